//! Public snapshot API for observing game state without exposing internals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::requisition::RequisitionReport;
use crate::domain::scoring::{visible_score, GameResult};
use crate::domain::state::{GameState, Phase, Player, PlayerId, RevealedJob, SwapState, TrickPlays};
use crate::domain::tricks::legal_card_indices;
use crate::domain::variants::Variants;
use crate::domain::{Card, PerSuit, Suit};

/// Who the snapshot is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Seat(PlayerId),
    /// Sees everything; for tooling and debugging.
    Spectator,
}

impl Viewer {
    fn sees(self, seat: PlayerId) -> bool {
        match self {
            Viewer::Seat(s) => s == seat,
            Viewer::Spectator => true,
        }
    }
}

/// A card, or a placeholder for one the viewer may not see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CardSlot {
    Known(Card),
    Hidden,
}

impl CardSlot {
    fn project(cards: &[Card], visible: bool) -> Vec<CardSlot> {
        cards
            .iter()
            .map(|&c| if visible { CardSlot::Known(c) } else { CardSlot::Hidden })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSnapshot {
    pub suit: Suit,
    pub revealed: Vec<Card>,
    pub hidden: Vec<CardSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub revealed: Vec<Card>,
    pub hidden: Vec<CardSlot>,
    pub stacks: Vec<StackSnapshot>,
    pub medals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub index: PlayerId,
    pub name: String,
    pub is_human: bool,
    pub hand: Vec<CardSlot>,
    pub plot: PlotSnapshot,
    pub brigade_leader: bool,
    pub has_won_trick_this_year: bool,
    pub medals: u32,
    pub visible_score: u32,
}

impl PlayerSnapshot {
    fn project(player: &Player, viewer: Viewer, variants: &Variants) -> Self {
        let own = viewer.sees(player.index);
        Self {
            index: player.index,
            name: player.name.clone(),
            is_human: player.is_human,
            hand: CardSlot::project(&player.hand, own),
            plot: PlotSnapshot {
                revealed: player.plot.revealed.clone(),
                hidden: CardSlot::project(&player.plot.hidden, own),
                stacks: player
                    .plot
                    .stacks
                    .iter()
                    .map(|s| StackSnapshot {
                        suit: s.suit,
                        revealed: s.revealed.clone(),
                        hidden: CardSlot::project(&s.hidden, own),
                    })
                    .collect(),
                medals: player.plot.medals,
            },
            brigade_leader: player.brigade_leader,
            has_won_trick_this_year: player.has_won_trick_this_year,
            medals: player.medals,
            visible_score: visible_score(player, variants),
        }
    }
}

/// Public job board. Face-down reward piles are reduced to their sizes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobsSnapshot {
    pub work_hours: PerSuit<u32>,
    pub buckets: PerSuit<Vec<Card>>,
    pub claimed: Vec<Suit>,
    pub revealed: PerSuit<Option<RevealedJob>>,
    pub accumulated: PerSuit<Vec<Card>>,
    pub pile_sizes: PerSuit<usize>,
}

/// Everything an external collaborator needs to render or drive the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u64,
    pub variants: Variants,
    pub phase: Phase,
    pub year: u8,
    pub turn: Option<PlayerId>,
    pub lead: PlayerId,
    pub trump_selector: PlayerId,
    pub trump: Option<Suit>,
    pub is_famine: bool,
    pub hand_size: usize,
    pub trick_count: u8,
    pub tricks_per_year: u8,
    pub players: Vec<PlayerSnapshot>,
    pub jobs: JobsSnapshot,
    pub current_trick: TrickPlays,
    pub last_trick: TrickPlays,
    pub last_winner: Option<PlayerId>,
    pub workers_deck_count: usize,
    /// Only present for spectators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers_deck: Option<Vec<Card>>,
    pub exiled: BTreeMap<u8, Vec<Card>>,
    pub pending_assignments: Vec<(Card, Suit)>,
    pub ai_assignment_queue: Vec<(Card, Suit)>,
    pub swap: Option<SwapState>,
    /// Requisition of the current year, once it has run.
    pub requisition: Option<RequisitionReport>,
    /// Hand indices the viewing seat may play right now.
    pub playable: Vec<usize>,
    pub result: Option<GameResult>,
}

/// Produce a snapshot of `state` as seen by `viewer`.
pub fn snapshot_for(state: &GameState, viewer: Viewer) -> GameSnapshot {
    let variants = &state.variants;
    let playable = match viewer {
        Viewer::Seat(seat) if state.phase == Phase::Trick && state.turn == Some(seat) => {
            legal_card_indices(&state.player(seat).hand, &state.current_trick)
        }
        _ => Vec::new(),
    };

    GameSnapshot {
        version: state.version,
        variants: *variants,
        phase: state.phase,
        year: state.year,
        turn: state.turn,
        lead: state.lead,
        trump_selector: state.trump_selector,
        trump: state.trump,
        is_famine: state.is_famine,
        hand_size: state.hand_size,
        trick_count: state.trick_count,
        tricks_per_year: state.tricks_per_year(),
        players: state
            .players
            .iter()
            .map(|p| PlayerSnapshot::project(p, viewer, variants))
            .collect(),
        jobs: JobsSnapshot {
            work_hours: state.jobs.work_hours.clone(),
            buckets: state.jobs.buckets.clone(),
            claimed: state.jobs.claimed.iter().copied().collect(),
            revealed: state.jobs.revealed.clone(),
            accumulated: state.jobs.accumulated.clone(),
            pile_sizes: PerSuit::from_fn(|s| state.jobs.piles[s].len()),
        },
        current_trick: state.current_trick.clone(),
        last_trick: state.last_trick.clone(),
        last_winner: state.last_winner,
        workers_deck_count: state.workers_deck.len(),
        workers_deck: matches!(viewer, Viewer::Spectator).then(|| state.workers_deck.clone()),
        exiled: state.exiled.clone(),
        pending_assignments: state
            .pending_assignments
            .iter()
            .map(|(&c, &s)| (c, s))
            .collect(),
        ai_assignment_queue: state.ai_assignment_queue.clone(),
        swap: state.swap,
        requisition: state.requisition_log.get(&state.year).cloned(),
        playable,
        result: state.result.clone(),
    }
}
