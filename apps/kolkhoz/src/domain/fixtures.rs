use super::cards_parsing::try_parse_cards;
use super::cards_types::Card;

/// Centralized helper for parsing hardcoded card keys in fixtures and tests.
pub struct CardFixtures;

impl CardFixtures {
    /// Parse hardcoded card keys (e.g. `["Hearts-7", "Spades-13"]`).
    ///
    /// Only for literal keys known to be valid; panics otherwise.
    pub fn parse_hardcoded(tokens: &[&str]) -> Vec<Card> {
        #[allow(clippy::expect_used)]
        try_parse_cards(tokens).expect("hardcoded valid card keys")
    }

    /// Parse a single hardcoded card key.
    pub fn card(token: &str) -> Card {
        #[allow(clippy::expect_used)]
        token.parse::<Card>().expect("hardcoded valid card key")
    }
}
