//! Year boundaries: closing bookkeeping, per-year resets and the new deal.

use tracing::info;

use crate::domain::dealing::{deal_hands, prepare_workers_deck, reveal_jobs};
use crate::domain::rules::MAX_YEARS;
use crate::domain::state::{next_player, GameState};
use crate::domain::Suit;

/// Reveal the year's jobs, rebuild the worker deck and deal hands.
pub fn deal_year(state: &mut GameState) {
    state.jobs.revealed = reveal_jobs(&mut state.jobs.piles, &state.jobs.accumulated, &state.variants);

    let mut deck = prepare_workers_deck(
        &state.players,
        &state.jobs.buckets,
        state.exiled.values().flatten(),
        &state.variants,
        &mut state.rng,
    );
    let deal = deal_hands(&mut state.players, &mut deck);
    state.workers_deck = deck;
    state.is_famine = deal.is_famine;
    state.hand_size = deal.hand_size;
}

/// Close the current year and set up the next one.
///
/// Returns `true` when the plan is complete (the year counter passed
/// `MAX_YEARS`); in that case nothing else is reset.
pub fn transition_to_next_year(state: &mut GameState) -> bool {
    settle_unclaimed_rewards(state);

    state.year += 1;
    if state.year > MAX_YEARS {
        info!(years = MAX_YEARS, "five-year plan complete");
        return true;
    }

    state.trick_count = 0;
    state.current_trick.clear();
    state.trump = None;
    state.pending_assignments.clear();
    state.ai_assignment_queue.clear();
    state.swap = None;
    for hours in state.jobs.work_hours.values_mut() {
        *hours = 0;
    }

    if state.variants.stacks_enabled() {
        for p in state.players.iter_mut() {
            for stack in std::mem::take(&mut p.plot.stacks) {
                p.plot.revealed.extend(stack.revealed);
            }
        }
    }

    for bucket in state.jobs.buckets.values_mut() {
        bucket.clear();
    }
    state.jobs.claimed.clear();

    let medals_count = state.variants.medals_count;
    for p in state.players.iter_mut() {
        p.hand.clear();
        if medals_count {
            p.plot.medals += p.medals;
        }
        p.medals = 0;
        p.has_won_trick_this_year = false;
        p.brigade_leader = false;
    }

    state.trump_selector = next_player(state.trump_selector, state.num_players());
    deal_year(state);

    info!(
        year = state.year,
        famine = state.is_famine,
        hand_size = state.hand_size,
        deck_left = state.workers_deck.len(),
        "year started"
    );
    false
}

/// Unclaimed full-deck rewards either carry over (accumulate variant) or go
/// North with the closing year's ledger. Northern style keeps neither.
fn settle_unclaimed_rewards(state: &mut GameState) {
    let variants = state.variants;
    if variants.reduced_deck() || variants.northern_style {
        return;
    }
    for suit in Suit::ALL {
        if state.jobs.claimed.contains(&suit) {
            continue;
        }
        let Some(job) = state.jobs.revealed[suit].take() else {
            continue;
        };
        let rewards = job.reward_cards().to_vec();
        if rewards.is_empty() {
            continue;
        }
        if variants.accumulate_enabled() {
            state.jobs.accumulated[suit] = rewards;
        } else {
            state.exiled.entry(state.year).or_default().extend(rewards);
        }
    }
}
