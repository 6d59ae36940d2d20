//! Domain layer: pure game rules, state and helpers.

pub mod assignment;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod game_flow;
pub mod game_transition;
pub mod invariants;
pub mod player_view;
pub mod requisition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod swap;
pub mod tricks;
pub mod variants;
pub mod year;


#[cfg(test)]
mod domain_prop_helpers;
#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_assignment;
#[cfg(test)]
mod tests_props_assignment;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_props_trick_winner;
#[cfg(test)]
mod tests_snapshot;

// Re-exports for ergonomics
pub use cards_logic::{card_beats, hand_has_suit};
pub use cards_parsing::card_key;
pub use cards_types::{Card, Nomenclature, PerSuit, Suit, ACE, JACK, KING, QUEEN};
pub use game_flow::{apply_move, new_game, Move, MoveOutcome};
pub use rules::tricks_per_year;
pub use seed_derivation::{derive_ai_seed, derive_game_seed};
pub use state::{GameState, Phase, PlayerId};
pub use variants::{DeckMode, GameConfig, Variants};
