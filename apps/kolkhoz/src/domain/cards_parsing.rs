//! Card key encoding used at the move boundary and in the exile ledger
//! (e.g., "Hearts-7", "Spades-13").

use std::fmt;
use std::str::FromStr;

use super::cards_types::{Card, Suit};
use crate::errors::domain::{DomainError, ValidationKind};

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Hearts" => Ok(Suit::Hearts),
            "Diamonds" => Ok(Suit::Diamonds),
            "Clubs" => Ok(Suit::Clubs),
            "Spades" => Ok(Suit::Spades),
            _ => Err(DomainError::validation(
                ValidationKind::ParseCardKey,
                format!("Invalid suit: {s}"),
            )),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.suit, self.value)
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err =
            || DomainError::validation(ValidationKind::ParseCardKey, format!("Parse card key: {s}"));
        let (suit_str, value_str) = s.split_once('-').ok_or_else(parse_err)?;
        let suit = suit_str.parse::<Suit>().map_err(|_| parse_err())?;
        let value = value_str.parse::<u8>().map_err(|_| parse_err())?;
        if !(1..=13).contains(&value) {
            return Err(parse_err());
        }
        Ok(Card { suit, value })
    }
}

/// Encode a card as its boundary key.
pub fn card_key(card: Card) -> String {
    card.to_string()
}

/// Parse a list of card keys, failing on the first malformed one.
#[cfg(test)]
pub(crate) fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}
