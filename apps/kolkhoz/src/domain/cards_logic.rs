//! Card game logic: checking suits in hands, comparing card strength

use super::cards_types::{Card, Suit};

pub fn hand_has_suit(hand: &[Card], suit: Suit) -> bool {
    hand.iter().any(|c| c.suit == suit)
}

/// Whether `a` beats `b` in a trick led with `lead`. With no trump (famine
/// year) only lead-suit cards can win.
pub fn card_beats(a: Card, b: Card, lead: Suit, trump: Option<Suit>) -> bool {
    if let Some(trump_suit) = trump {
        let a_trump = a.suit == trump_suit;
        let b_trump = b.suit == trump_suit;
        if a_trump && !b_trump {
            return true;
        }
        if b_trump && !a_trump {
            return false;
        }
        if a_trump && b_trump {
            return a.value > b.value;
        }
    }
    // Neither is trump: compare only if following lead
    let a_follows = a.suit == lead;
    let b_follows = b.suit == lead;
    if a_follows && !b_follows {
        return true;
    }
    if b_follows && !a_follows {
        return false;
    }
    if a_follows && b_follows {
        return a.value > b.value;
    }
    false
}
