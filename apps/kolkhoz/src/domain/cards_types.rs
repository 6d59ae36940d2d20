//! Core card-related types: Card, Suit, per-suit tables and face-card roles

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Suits in their canonical iteration order. Job completion and
/// requisition walk suits in this order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

pub const ACE: u8 = 1;
pub const JACK: u8 = 11;
pub const QUEEN: u8 = 12;
pub const KING: u8 = 13;

/// A playing card. `value` is 1 (Ace) through 13 (King); worker cards are
/// 6..=13 and job rewards are 1..=5.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub value: u8,
}

impl Card {
    pub const fn new(suit: Suit, value: u8) -> Self {
        Self { suit, value }
    }
}

// Note: Ord on Card is only for stable sorting: suit order H<D<C<S then value.
// Trick resolution never uses it.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.suit.cmp(&other.suit) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Special role of a trump face card under the face-card-effects variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Nomenclature {
    /// Trump Jack: contributes no work hours and is exiled in place of players' cards.
    Drunkard,
    /// Trump Queen: forces everyone to reveal every matching card.
    Informant,
    /// Trump King: a second card per affected player goes North.
    Official,
}

impl Nomenclature {
    /// Role of `card` given the year's trump, if any.
    pub fn of(card: Card, trump: Option<Suit>) -> Option<Self> {
        if Some(card.suit) != trump {
            return None;
        }
        match card.value {
            JACK => Some(Nomenclature::Drunkard),
            QUEEN => Some(Nomenclature::Informant),
            KING => Some(Nomenclature::Official),
            _ => None,
        }
    }

    /// Whether a trump card with this role sits in `cards`.
    pub fn present_in(self, cards: &[Card], trump: Option<Suit>) -> bool {
        cards.iter().any(|&c| Nomenclature::of(c, trump) == Some(self))
    }
}

/// Fixed-size table keyed by suit.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerSuit<T>(pub [T; 4]);

impl<T> PerSuit<T> {
    pub fn from_fn(mut f: impl FnMut(Suit) -> T) -> Self {
        Self([
            f(Suit::Hearts),
            f(Suit::Diamonds),
            f(Suit::Clubs),
            f(Suit::Spades),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.0.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.0.iter_mut()
    }
}

impl<T> Index<Suit> for PerSuit<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &T {
        &self.0[suit.index()]
    }
}

impl<T> IndexMut<Suit> for PerSuit<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut T {
        &mut self.0[suit.index()]
    }
}
