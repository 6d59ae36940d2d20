//! Distributing a resolved trick's cards among job buckets, job completion
//! and reward payout.

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::domain::state::{GameState, PlayerId, Stack};
use crate::domain::variants::Variants;
use crate::domain::{Card, Nomenclature, Suit};
use crate::domain::rules::THRESHOLD;
use crate::errors::domain::{DomainError, ValidationKind};

/// Card -> target job suit for every card of a resolved trick.
pub type Assignments = BTreeMap<Card, Suit>;

/// Work hours `card` contributes to a job. The trump Jack (drunkard)
/// contributes nothing under face-card effects.
pub fn work_hours_for(card: Card, trump: Option<Suit>, variants: &Variants) -> u32 {
    if variants.face_card_effects && Nomenclature::of(card, trump) == Some(Nomenclature::Drunkard) {
        0
    } else {
        u32::from(card.value)
    }
}

/// Suits represented in `trick`, in suit order.
pub fn suits_in_trick(trick: &[(PlayerId, Card)]) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|s| trick.iter().any(|(_, c)| c.suit == *s))
        .collect()
}

/// Check a single card -> suit choice against the trick it came from.
pub fn validate_target(trick: &[(PlayerId, Card)], card: Card, target: Suit) -> Result<(), DomainError> {
    if !trick.iter().any(|&(_, c)| c == card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInTrick,
            format!("{card} is not part of the last trick"),
        ));
    }
    if !trick.iter().any(|(_, c)| c.suit == target) {
        return Err(DomainError::validation(
            ValidationKind::AssignmentTargetNotInTrick,
            format!("No {target} card was played in the last trick"),
        ));
    }
    Ok(())
}

/// Check a full assignment map: every trick card assigned, nothing else,
/// and every target present in the trick.
pub fn validate_assignments(trick: &[(PlayerId, Card)], assignments: &Assignments) -> Result<(), DomainError> {
    for (&card, &target) in assignments {
        validate_target(trick, card, target)?;
    }
    if assignments.len() != trick.len() {
        return Err(DomainError::validation(
            ValidationKind::IncompleteAssignments,
            format!(
                "{} of {} trick cards assigned",
                assignments.len(),
                trick.len()
            ),
        ));
    }
    Ok(())
}

/// Put one card into a job bucket and credit its work hours.
pub fn add_work(state: &mut GameState, card: Card, target: Suit) {
    let hours = work_hours_for(card, state.trump, &state.variants);
    state.jobs.buckets[target].push(card);
    state.jobs.work_hours[target] += hours;
    debug!(card = %card, job = %target, hours, total = state.jobs.work_hours[target], "work assigned");
}

/// Claim every unclaimed job at or over the threshold for `winner`,
/// in suit order. Returns the suits completed by this call.
pub fn complete_jobs(state: &mut GameState, winner: PlayerId) -> Vec<Suit> {
    let mut completed = Vec::new();
    for suit in Suit::ALL {
        if state.jobs.work_hours[suit] < THRESHOLD || state.jobs.claimed.contains(&suit) {
            continue;
        }
        state.jobs.claimed.insert(suit);
        pay_out(state, suit, winner);
        info!(job = %suit, winner, hours = state.jobs.work_hours[suit], "job completed");
        completed.push(suit);
    }
    completed
}

fn pay_out(state: &mut GameState, suit: Suit, winner: PlayerId) {
    let variants = state.variants;
    if variants.stacks_enabled() {
        let mut cards = std::mem::take(&mut state.jobs.buckets[suit]);
        if cards.is_empty() {
            return;
        }
        cards.sort_by_key(|c| c.value);
        let lowest = cards.remove(0);
        state.players[winner as usize].plot.stacks.push(Stack {
            suit,
            revealed: vec![lowest],
            hidden: cards,
        });
    } else if variants.rewards_enabled() {
        if let Some(job) = state.jobs.revealed[suit].take() {
            state.players[winner as usize]
                .plot
                .revealed
                .extend_from_slice(job.reward_cards());
        }
        if variants.accumulate_enabled() {
            state.jobs.accumulated[suit].clear();
        }
    }
}

/// Apply a complete assignment for the last trick's winner, then run job
/// completion once over all suits.
pub fn apply_assignments(state: &mut GameState, winner: PlayerId, assignments: &Assignments) -> Vec<Suit> {
    for (&card, &target) in assignments {
        add_work(state, card, target);
    }
    complete_jobs(state, winner)
}

/// When every card in the trick shares one suit, the only legal assignment.
pub fn generate_auto_assignment(trick: &[(PlayerId, Card)]) -> Option<Assignments> {
    let (_, first) = trick.first()?;
    if trick.iter().any(|(_, c)| c.suit != first.suit) {
        return None;
    }
    Some(trick.iter().map(|&(_, c)| (c, first.suit)).collect())
}
