//! Test support for the kolkhoz workspace
//!
//! Logging initialization and environment knobs shared by integration tests.

pub mod logging;

/// Number of whole games a multi-game test plays: `KOLKHOZ_TEST_GAMES` when
/// set and valid, otherwise `default`.
pub fn games_from_env(default: u64) -> u64 {
    std::env::var("KOLKHOZ_TEST_GAMES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
