//! Whole-state consistency checks, for tests and tooling.

use std::collections::HashSet;

use crate::domain::rules::is_worker_card;
use crate::domain::state::{GameState, Phase, RevealedJob};
use crate::domain::Card;
use crate::errors::domain::DomainError;

const WORKER_CARD_COUNT: usize = 32;

#[derive(Default)]
struct Universe {
    seen: HashSet<Card>,
}

impl Universe {
    fn place<'a>(
        &mut self,
        cards: impl IntoIterator<Item = &'a Card>,
        container: &str,
    ) -> Result<(), DomainError> {
        for &card in cards {
            if !self.seen.insert(card) {
                return Err(DomainError::integrity(format!(
                    "{card} appears twice (again in {container})"
                )));
            }
        }
        Ok(())
    }
}

/// Verify that every card sits in exactly one container.
///
/// Worker cards live in hands, plots, job buckets, the current trick, the
/// trick awaiting assignment, the worker deck or the exile ledger, and
/// together always number 32. Reward cards live in piles, revealed jobs,
/// plots or the ledger, never twice. Under stacking, exiled cards return to
/// the worker deck at the next deal.
pub fn check_card_universe(state: &GameState) -> Result<(), DomainError> {
    let mut u = Universe::default();

    for p in &state.players {
        u.place(&p.hand, "hand")?;
        u.place(p.plot.cards(), "plot")?;
    }
    for bucket in state.jobs.buckets.values() {
        u.place(bucket, "job bucket")?;
    }
    u.place(state.current_trick.iter().map(|(_, c)| c), "current trick")?;
    match state.phase {
        Phase::Assignment => {
            u.place(state.last_trick.iter().map(|(_, c)| c), "trick awaiting assignment")?;
        }
        Phase::AiAssignment => {
            u.place(state.ai_assignment_queue.iter().map(|(c, _)| c), "ai assignment queue")?;
        }
        _ => {}
    }
    u.place(&state.workers_deck, "worker deck")?;
    // Reduced-deck markers stay in their pile while shown.
    for pile in state.jobs.piles.values() {
        u.place(pile, "job pile")?;
    }
    for job in state.jobs.revealed.values().flatten() {
        if let RevealedJob::Rewards(cards) = job {
            u.place(cards, "revealed job")?;
        }
    }

    if !state.variants.stacks_enabled() {
        u.place(state.exiled_cards(), "exile ledger")?;
    } else if matches!(state.phase, Phase::Requisition | Phase::GameOver) {
        // The latest exiles are off the table until the next deal.
        if let Some((_, latest)) = state.exiled.iter().next_back() {
            let off_table: Vec<Card> = latest
                .iter()
                .copied()
                .filter(|c| !u.seen.contains(c))
                .collect();
            u.place(&off_table, "exile ledger")?;
        }
    }

    let workers = u
        .seen
        .iter()
        .filter(|&&c| is_worker_card(c))
        .count();
    if workers != WORKER_CARD_COUNT {
        return Err(DomainError::integrity(format!(
            "{workers} worker cards accounted for, expected {WORKER_CARD_COUNT}"
        )));
    }
    Ok(())
}
