use std::collections::{BTreeMap, BTreeSet};

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::domain::assignment::Assignments;
use crate::domain::requisition::RequisitionReport;
use crate::domain::scoring::GameResult;
use crate::domain::variants::Variants;
use crate::domain::{Card, PerSuit, Suit};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..num_players

/// Ordered plays of one trick: (who, card).
pub type TrickPlays = Vec<(PlayerId, Card)>;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// Designated selector picks the year's trump.
    Planning,
    /// Players may exchange one hand card with one plot card.
    Swap,
    /// Playing tricks within the year.
    Trick,
    /// Trick winner distributes the trick's cards among jobs.
    Assignment,
    /// An AI winner's assignment is applied one card at a time.
    AiAssignment,
    /// Leftover hand cards go to the hidden plot.
    PlotSelection,
    /// Year-end confiscation has run; waiting for acknowledgment.
    Requisition,
    /// All five years complete.
    GameOver,
}

/// A reduced-deck reward pile built from a completed job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub suit: Suit,
    /// Exactly one card, the lowest of the job bucket, while intact.
    pub revealed: Vec<Card>,
    /// Remaining cards, ascending.
    pub hidden: Vec<Card>,
}

impl Stack {
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.hidden.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.revealed.iter().chain(self.hidden.iter())
    }
}

/// A player's private holding area.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plot {
    pub revealed: Vec<Card>,
    pub hidden: Vec<Card>,
    pub stacks: Vec<Stack>,
    /// Trick wins banked from earlier years (medals variant).
    pub medals: u32,
}

impl Plot {
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.revealed
            .iter()
            .chain(self.hidden.iter())
            .chain(self.stacks.iter().flat_map(Stack::cards))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub index: PlayerId,
    pub is_human: bool,
    pub name: String,
    pub hand: Vec<Card>,
    pub plot: Plot,
    pub brigade_leader: bool,
    pub has_won_trick_this_year: bool,
    /// Tricks won this year.
    pub medals: u32,
}

impl Player {
    pub fn new(index: PlayerId, is_human: bool, name: impl Into<String>) -> Self {
        Self {
            index,
            is_human,
            name: name.into(),
            hand: Vec::new(),
            plot: Plot::default(),
            brigade_leader: false,
            has_won_trick_this_year: false,
            medals: 0,
        }
    }
}

/// The reward(s) shown on a job this year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "cards", rename_all = "camelCase")]
pub enum RevealedJob {
    /// Reduced deck: the Ace marks the job but pays nothing.
    Marker(Card),
    /// One reward, or several when unclaimed rewards carried over.
    Rewards(Vec<Card>),
}

impl RevealedJob {
    /// Cards paid out when the job completes.
    pub fn reward_cards(&self) -> &[Card] {
        match self {
            RevealedJob::Marker(_) => &[],
            RevealedJob::Rewards(cards) => cards,
        }
    }
}

/// Per-suit job accumulators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobBoard {
    pub work_hours: PerSuit<u32>,
    pub buckets: PerSuit<Vec<Card>>,
    pub claimed: BTreeSet<Suit>,
    pub revealed: PerSuit<Option<RevealedJob>>,
    pub accumulated: PerSuit<Vec<Card>>,
    pub piles: PerSuit<Vec<Card>>,
}

/// Which part of the plot a swap touches.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlotArea {
    Hidden,
    Revealed,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwapRecord {
    pub plot_index: usize,
    pub hand_index: usize,
    pub area: PlotArea,
}

/// Progress through the swap phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct SwapState {
    /// Seat currently swapping; seats go in order from 0.
    pub seat: PlayerId,
    /// The swap this seat made and has not yet confirmed.
    pub made: Option<SwapRecord>,
}

/// A resolved trick, kept for replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrickRecord {
    pub year: u8,
    pub plays: TrickPlays,
    pub winner: PlayerId,
}

/// Entire game container, sufficient for pure domain operations.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Bumped on every accepted move.
    pub version: u64,
    pub variants: Variants,
    pub phase: Phase,
    /// Year of the plan, 1-based; exceeds `MAX_YEARS` once the game is over.
    pub year: u8,
    pub players: Vec<Player>,
    /// Player whose turn it is to act.
    /// - Some(seat) when exactly one seat is expected to act
    /// - None when any seat may act (AiAssignment, Requisition) or nobody can (GameOver)
    pub turn: Option<PlayerId>,
    /// Leader of the next trick.
    pub lead: PlayerId,
    /// Seat choosing trump this year.
    pub trump_selector: PlayerId,
    /// None during famine years and before trump selection.
    pub trump: Option<Suit>,
    pub is_famine: bool,
    /// Cards dealt to each player this year.
    pub hand_size: usize,
    pub trick_count: u8,
    pub current_trick: TrickPlays,
    pub last_trick: TrickPlays,
    pub last_winner: Option<PlayerId>,
    pub trick_history: Vec<TrickRecord>,
    pub jobs: JobBoard,
    pub workers_deck: Vec<Card>,
    /// Permanent record of cards sent North, per year.
    pub exiled: BTreeMap<u8, Vec<Card>>,
    /// Manual assignment being built by the trick winner.
    pub pending_assignments: Assignments,
    /// Deferred AI assignment effects, applied one per move.
    pub ai_assignment_queue: Vec<(Card, Suit)>,
    pub swap: Option<SwapState>,
    pub requisition_log: BTreeMap<u8, RequisitionReport>,
    pub result: Option<GameResult>,
    pub(crate) rng: ChaCha8Rng,
}

impl GameState {
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Trick quota for the current year.
    pub fn tricks_per_year(&self) -> u8 {
        crate::domain::rules::tricks_per_year(self.is_famine, self.hand_size)
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id as usize]
    }

    pub fn exiled_cards(&self) -> impl Iterator<Item = &Card> {
        self.exiled.values().flatten()
    }
}

/// Seat / turn math helpers (seats 0..num_players, clockwise positive).
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8, num_players: usize) -> PlayerId {
    let n = num_players as i16;
    ((seat as i16 + delta as i16).rem_euclid(n)) as PlayerId
}

/// Returns the next player clockwise.
#[inline]
pub fn next_player(p: PlayerId, num_players: usize) -> PlayerId {
    seat_offset(p, 1, num_players)
}

/// Expected actor seat during a trick.
///
/// `first_player` is the trick leader; `play_count` is how many cards
/// have already been played into the trick.
#[inline]
pub fn expected_actor(first_player: PlayerId, play_count: usize, num_players: usize) -> PlayerId {
    seat_offset(first_player, play_count as i8, num_players)
}

pub fn require_last_winner(state: &GameState, ctx: &'static str) -> Result<PlayerId, DomainError> {
    state.last_winner.ok_or_else(|| {
        DomainError::integrity(format!("Invariant violated: last_winner must be set ({ctx})"))
    })
}

pub fn require_swap(state: &GameState, ctx: &'static str) -> Result<SwapState, DomainError> {
    state.swap.ok_or_else(|| {
        DomainError::integrity(format!("Invariant violated: swap state must be set ({ctx})"))
    })
}
