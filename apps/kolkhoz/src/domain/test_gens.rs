// Proptest generators for domain types.
// These generators ensure unique cards for property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::worker_cards;
use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};

/// Generate a random Suit
pub fn suit() -> impl Strategy<Value = Suit> {
    prop_oneof![
        Just(Suit::Hearts),
        Just(Suit::Diamonds),
        Just(Suit::Clubs),
        Just(Suit::Spades),
    ]
}

/// Generate a trump: a suit, or none (famine year)
pub fn trump() -> impl Strategy<Value = Option<Suit>> {
    prop::option::of(suit())
}

/// Generate a single worker card (6..=13)
pub fn worker_card() -> impl Strategy<Value = Card> {
    (suit(), 6u8..=13u8).prop_map(|(suit, value)| Card::new(suit, value))
}

/// Generate a vector of N unique worker cards
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Shuffled subset of the worker deck
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = worker_cards();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a hand of 1..=max_count unique worker cards
pub fn hand_up_to(max_count: usize) -> impl Strategy<Value = Vec<Card>> {
    (1..=max_count).prop_flat_map(unique_cards)
}

/// Number of seats at the table
pub fn num_players() -> impl Strategy<Value = usize> {
    2usize..=4usize
}

/// Generate a complete trick: one unique card per seat in turn order from a
/// random leader. Returns (plays, trump).
pub fn complete_trick() -> impl Strategy<Value = (Vec<(PlayerId, Card)>, Option<Suit>)> {
    (num_players(), 0u8..4u8)
        .prop_flat_map(|(n, leader)| (Just(n), Just(leader % n as u8), unique_cards(n), trump()))
        .prop_map(|(n, leader, cards, trump)| {
            let plays = cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| (((leader as usize + i) % n) as PlayerId, c))
                .collect();
            (plays, trump)
        })
}

/// A hand and a partial trick drawn from disjoint cards.
/// Returns (hand, trick_so_far); the trick may be empty.
pub fn hand_and_partial_trick() -> impl Strategy<Value = (Vec<Card>, Vec<(PlayerId, Card)>)> {
    (1usize..=5, 0usize..=3)
        .prop_flat_map(|(hand_len, trick_len)| (Just(hand_len), unique_cards(hand_len + trick_len)))
        .prop_map(|(hand_len, mut cards)| {
            let trick_cards = cards.split_off(hand_len);
            let trick = trick_cards
                .into_iter()
                .enumerate()
                .map(|(i, c)| (i as PlayerId + 1, c))
                .collect();
            (cards, trick)
        })
}

/// A complete trick plus one target choice per card (an index into the
/// suits present in the trick).
pub fn trick_with_targets() -> impl Strategy<Value = (Vec<(PlayerId, Card)>, Option<Suit>, Vec<usize>)> {
    complete_trick().prop_flat_map(|(plays, trump)| {
        let n = plays.len();
        (Just(plays), Just(trump), prop::collection::vec(0usize..4, n))
    })
}
