//! Typed game variants and setup parameters.
//!
//! Both are fixed once a game exists and are threaded explicitly into every
//! rules function that needs them.

use serde::{Deserialize, Serialize};

use crate::domain::rules::valid_player_count;
use crate::errors::domain::{DomainError, ValidationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeckMode {
    /// 36-card deck: Aces mark the jobs, no reward cards.
    #[default]
    Reduced,
    /// 52-card deck: Ace..5 of each suit are yearly job rewards.
    Full,
}

/// Optional rule variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Variants {
    pub deck: DeckMode,
    /// Trump Jack/Queen/King act as drunkard, informant and official.
    pub face_card_effects: bool,
    /// Players may swap one hand card with one plot card from year 2 on.
    pub allow_swap: bool,
    /// No job rewards; everyone is always vulnerable to requisition.
    pub northern_style: bool,
    /// Requisition pools every player's reveals and exiles globally.
    pub mice: bool,
    /// Completed jobs become stacks in the winner's plot (reduced deck only).
    pub stacking: bool,
    /// Trick wins count toward the score.
    pub medals_count: bool,
    /// Unclaimed rewards carry over to the next year (full deck only).
    pub accumulate_jobs: bool,
    /// A player who won every trick of the year is immune to requisition.
    pub hero_of_soviet_union: bool,
}

impl Default for Variants {
    fn default() -> Self {
        Self {
            deck: DeckMode::Reduced,
            face_card_effects: true,
            allow_swap: false,
            northern_style: false,
            mice: false,
            stacking: false,
            medals_count: false,
            accumulate_jobs: false,
            hero_of_soviet_union: false,
        }
    }
}

impl Variants {
    pub fn reduced_deck(&self) -> bool {
        self.deck == DeckMode::Reduced
    }

    pub fn stacks_enabled(&self) -> bool {
        self.reduced_deck() && self.stacking
    }

    pub fn accumulate_enabled(&self) -> bool {
        !self.reduced_deck() && self.accumulate_jobs
    }

    /// Whether completed jobs pay out reward cards.
    pub fn rewards_enabled(&self) -> bool {
        !self.reduced_deck() && !self.northern_style
    }

    /// Whether the swap phase runs in `year`.
    pub fn swap_in_year(&self, year: u8) -> bool {
        self.allow_swap && year > 1
    }
}

/// Parameters for creating a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub num_players: usize,
    pub seed: u64,
    /// Seats played by humans; every other seat is an AI seat.
    pub human_seats: Vec<u8>,
    pub variants: Variants,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_players: 4,
            seed: 0,
            human_seats: vec![0],
            variants: Variants::default(),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), DomainError> {
        if !valid_player_count(self.num_players) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Player count must be 2..=4, got {}", self.num_players),
            ));
        }
        if let Some(seat) = self
            .human_seats
            .iter()
            .find(|&&s| s as usize >= self.num_players)
        {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Human seat {seat} out of range"),
            ));
        }
        if self.variants.stacking && !self.variants.reduced_deck() {
            return Err(DomainError::validation(
                ValidationKind::InvalidVariants,
                "Stacking requires the reduced deck",
            ));
        }
        if self.variants.accumulate_jobs && self.variants.reduced_deck() {
            return Err(DomainError::validation(
                ValidationKind::InvalidVariants,
                "Carry-over of unclaimed rewards requires the full deck",
            ));
        }
        Ok(())
    }
}
