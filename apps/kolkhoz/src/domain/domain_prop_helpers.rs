//! Helper functions for domain property-based tests

use crate::domain::state::PlayerId;
use crate::domain::{Card, Suit};

/// Independent oracle for trick winner to cross-check domain logic.
/// Returns the index of the winning play.
pub fn oracle_trick_winner(plays: &[(PlayerId, Card)], trump: Option<Suit>) -> usize {
    assert!(!plays.is_empty(), "Oracle requires at least one play");

    // Derive lead suit from the first play to avoid parameter mismatch.
    let lead = plays[0].1.suit;

    // Compute key = (is_trump, is_lead, value) and take the max.
    let key = |c: Card| ((trump == Some(c.suit)) as u8, (c.suit == lead) as u8, c.value);
    let mut best_idx = 0;
    let mut best_key = key(plays[0].1);
    for (i, &(_, c)) in plays.iter().enumerate().skip(1) {
        let k = key(c);
        if k > best_key {
            best_key = k;
            best_idx = i;
        }
    }
    best_idx
}
