#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod telemetry;


// Re-exports for public API
pub use ai::{drive_ai_turn, AiError, AiPlayer, RandomPlayer};
pub use domain::snapshot::{snapshot_for, GameSnapshot, Viewer};
pub use domain::{apply_move, new_game, GameConfig, GameState, Move, MoveOutcome, Phase, Variants};
pub use error::AppError;
pub use errors::{DomainError, ValidationKind};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
