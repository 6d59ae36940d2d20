//! Deck construction and dealing: job reward piles, the worker deck, hands.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{HAND_SIZE, REWARD_VALUES, WORKER_VALUES};
use crate::domain::state::{Player, RevealedJob};
use crate::domain::variants::Variants;
use crate::domain::{Card, PerSuit, Suit, ACE};

/// Build each suit's job pile.
///
/// Reduced deck: a single Ace per suit marking the job. Full deck: Ace..5
/// shuffled, one reward per year.
pub fn prepare_job_piles<R: Rng + ?Sized>(variants: &Variants, rng: &mut R) -> PerSuit<Vec<Card>> {
    PerSuit::from_fn(|suit| {
        if variants.reduced_deck() {
            vec![Card::new(suit, ACE)]
        } else {
            let mut pile: Vec<Card> = REWARD_VALUES.map(|v| Card::new(suit, v)).collect();
            pile.shuffle(rng);
            pile
        }
    })
}

/// Reveal this year's job rewards.
///
/// Reduced deck shows the Ace marker without drawing it. Full deck draws
/// the top of each pile; with carry-over active the draw joins any
/// unclaimed rewards from earlier years.
pub fn reveal_jobs(
    piles: &mut PerSuit<Vec<Card>>,
    accumulated: &PerSuit<Vec<Card>>,
    variants: &Variants,
) -> PerSuit<Option<RevealedJob>> {
    PerSuit::from_fn(|suit| {
        let pile = &mut piles[suit];
        if variants.reduced_deck() {
            return pile.first().copied().map(RevealedJob::Marker);
        }
        let drawn = pile.pop();
        let carried = &accumulated[suit];
        if variants.accumulate_enabled() && !carried.is_empty() {
            let mut rewards = carried.clone();
            rewards.extend(drawn);
            return Some(RevealedJob::Rewards(rewards));
        }
        drawn.map(|card| RevealedJob::Rewards(vec![card]))
    })
}

/// All 32 worker cards (6..=13 of each suit) in canonical order.
pub fn worker_cards() -> Vec<Card> {
    let mut deck = Vec::with_capacity(32);
    for suit in Suit::ALL {
        for value in WORKER_VALUES {
            deck.push(Card::new(suit, value));
        }
    }
    deck
}

/// Build and shuffle the worker deck for a year.
///
/// Excludes every card resident in a hand, plot or job bucket, and every
/// exiled card unless stacking is active (exiled cards recirculate there).
pub fn prepare_workers_deck<'a, R: Rng + ?Sized>(
    players: &[Player],
    buckets: &PerSuit<Vec<Card>>,
    exiled: impl IntoIterator<Item = &'a Card>,
    variants: &Variants,
    rng: &mut R,
) -> Vec<Card> {
    let mut used: HashSet<Card> = HashSet::new();
    for p in players {
        used.extend(p.hand.iter().copied());
        used.extend(p.plot.cards().copied());
    }
    for bucket in buckets.values() {
        used.extend(bucket.iter().copied());
    }
    if !variants.stacks_enabled() {
        used.extend(exiled.into_iter().copied());
    }

    let mut deck: Vec<Card> = worker_cards()
        .into_iter()
        .filter(|c| !used.contains(c))
        .collect();
    deck.shuffle(rng);
    deck
}

/// Outcome of a deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deal {
    pub hand_size: usize,
    pub is_famine: bool,
}

/// Deal hands round-robin from the end of `deck`.
///
/// Normally five cards each; when fewer than `5 * players` remain, the
/// largest equal share is dealt, the remainder stays in the deck, and the
/// year is a famine year.
pub fn deal_hands(players: &mut [Player], deck: &mut Vec<Card>) -> Deal {
    let n = players.len();
    let is_famine = deck.len() < HAND_SIZE * n;
    let hand_size = if is_famine { deck.len() / n } else { HAND_SIZE };

    for p in players.iter_mut() {
        p.hand.clear();
    }
    for _ in 0..hand_size {
        for p in players.iter_mut() {
            if let Some(card) = deck.pop() {
                p.hand.push(card);
            }
        }
    }
    Deal {
        hand_size,
        is_famine,
    }
}
