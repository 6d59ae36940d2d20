//! RNG seed derivation utilities for deterministic simulations.
//!
//! The game state owns its own RNG; these helpers derive separate seeds for
//! collaborators (AI players, batches of simulated games) from a base seed.

/// Derive a seed for the AI playing `seat` in a game seeded with `game_seed`.
///
/// Same game + seat = same seed; different seats get different seeds.
pub fn derive_ai_seed(game_seed: u64, seat: u8) -> u64 {
    game_seed
        .wrapping_add((seat as u64).wrapping_mul(100))
        .wrapping_add(1) // Offset to distinguish from the game seed itself
}

/// Derive the game seed for game number `game_no` of a simulated batch.
pub fn derive_game_seed(batch_seed: u64, game_no: u64) -> u64 {
    batch_seed
        .wrapping_add(game_no.wrapping_mul(1_000_000))
        .wrapping_add(2)
}
