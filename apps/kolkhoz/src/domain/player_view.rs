//! Player view of game state - what information is visible to a seat.
//!
//! [`CurrentYearInfo`] is the interface between the rules engine and AI
//! players: everything a seat can see at its decision point, plus helpers
//! that enumerate legal choices so strategies never re-implement the rules.

use crate::domain::assignment::suits_in_trick;
use crate::domain::rules::is_worker_card;
use crate::domain::state::{GameState, Phase, PlayerId, Plot, PlotArea, RevealedJob, TrickPlays};
use crate::domain::tricks::legal_card_indices;
use crate::domain::variants::Variants;
use crate::domain::{Card, PerSuit, Suit};

/// Information visible to a seat at a decision point in the current year.
#[derive(Debug, Clone)]
pub struct CurrentYearInfo {
    /// Your seat.
    pub player_seat: PlayerId,
    pub num_players: usize,
    pub phase: Phase,
    /// Year of the plan, 1..=5.
    pub year: u8,
    pub variants: Variants,
    /// None in famine years and before trump selection.
    pub trump: Option<Suit>,
    pub is_famine: bool,
    /// Your hand, in dealt order; plays are addressed by index.
    pub hand: Vec<Card>,
    /// Your own plot, hidden part included.
    pub plot: Plot,
    /// Cards played in the current trick so far; the first entry leads.
    pub current_trick: TrickPlays,
    /// The last resolved trick; these are the cards to assign.
    pub last_trick: TrickPlays,
    pub last_winner: Option<PlayerId>,
    pub trick_count: u8,
    pub tricks_per_year: u8,
    pub work_hours: PerSuit<u32>,
    pub claimed: Vec<Suit>,
    pub revealed_jobs: PerSuit<Option<RevealedJob>>,
}

impl CurrentYearInfo {
    pub fn for_seat(state: &GameState, seat: PlayerId) -> Self {
        let player = state.player(seat);
        Self {
            player_seat: seat,
            num_players: state.num_players(),
            phase: state.phase,
            year: state.year,
            variants: state.variants,
            trump: state.trump,
            is_famine: state.is_famine,
            hand: player.hand.clone(),
            plot: player.plot.clone(),
            current_trick: state.current_trick.clone(),
            last_trick: state.last_trick.clone(),
            last_winner: state.last_winner,
            trick_count: state.trick_count,
            tricks_per_year: state.tricks_per_year(),
            work_hours: state.jobs.work_hours.clone(),
            claimed: state.jobs.claimed.iter().copied().collect(),
            revealed_jobs: state.jobs.revealed.clone(),
        }
    }

    /// Hand indices that follow suit (or anything when leading / void).
    pub fn legal_plays(&self) -> Vec<usize> {
        if self.phase != Phase::Trick {
            return Vec::new();
        }
        legal_card_indices(&self.hand, &self.current_trick)
    }

    /// Any suit may be named trump.
    pub fn legal_trumps(&self) -> Vec<Suit> {
        if self.phase != Phase::Planning {
            return Vec::new();
        }
        Suit::ALL.to_vec()
    }

    /// Cards of the last trick awaiting assignment.
    pub fn cards_to_assign(&self) -> Vec<Card> {
        self.last_trick.iter().map(|&(_, c)| c).collect()
    }

    /// Jobs the last trick's cards may be assigned to.
    pub fn assignment_targets(&self) -> Vec<Suit> {
        suits_in_trick(&self.last_trick)
    }

    /// Every (plot index, hand index, area) exchange available to you.
    pub fn legal_swaps(&self) -> Vec<(usize, usize, PlotArea)> {
        if self.phase != Phase::Swap {
            return Vec::new();
        }
        let mut swaps = Vec::new();
        for (area, plot_cards) in [
            (PlotArea::Hidden, &self.plot.hidden),
            (PlotArea::Revealed, &self.plot.revealed),
        ] {
            for (plot_index, &card) in plot_cards.iter().enumerate() {
                if !is_worker_card(card) {
                    continue;
                }
                for hand_index in 0..self.hand.len() {
                    swaps.push((plot_index, hand_index, area));
                }
            }
        }
        swaps
    }
}
