//! Random AI player - makes random legal moves.
//!
//! [`RandomPlayer`] is the reference implementation of
//! [`AiPlayer`](super::AiPlayer): seedable for reproducible games and
//! thread-safe through a `Mutex` around its RNG.

use std::sync::{Mutex, MutexGuard};

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer, SwapChoice};
use crate::domain::assignment::Assignments;
use crate::domain::player_view::CurrentYearInfo;
use crate::domain::Suit;

/// AI that chooses uniformly at random among legal moves in every phase.
///
/// ```rust,ignore
/// use kolkhoz::ai::RandomPlayer;
///
/// let random_ai = RandomPlayer::new(None);
/// let seeded_ai = RandomPlayer::new(Some(12345));
/// ```
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    /// `Some(seed)` for reproducible choices, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng: Mutex::new(rng),
        }
    }

    fn rng(&self) -> Result<MutexGuard<'_, StdRng>, AiError> {
        self.rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_trump(&self, state: &CurrentYearInfo) -> Result<Suit, AiError> {
        let legal = state.legal_trumps();
        let mut rng = self.rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No legal trump available".into()))
    }

    fn choose_play(&self, state: &CurrentYearInfo) -> Result<usize, AiError> {
        let legal = state.legal_plays();
        let mut rng = self.rng()?;
        legal
            .choose(&mut *rng)
            .copied()
            .ok_or_else(|| AiError::InvalidMove("No legal plays available".into()))
    }

    fn choose_assignments(&self, state: &CurrentYearInfo) -> Result<Assignments, AiError> {
        let targets = state.assignment_targets();
        if targets.is_empty() {
            return Err(AiError::InvalidMove("No trick to assign".into()));
        }
        let mut rng = self.rng()?;
        let mut assignments = Assignments::new();
        for card in state.cards_to_assign() {
            let target = targets
                .choose(&mut *rng)
                .copied()
                .ok_or_else(|| AiError::Internal("Failed to choose a target".into()))?;
            assignments.insert(card, target);
        }
        Ok(assignments)
    }

    fn choose_swap(&self, state: &CurrentYearInfo) -> Result<Option<SwapChoice>, AiError> {
        let legal = state.legal_swaps();
        let mut rng = self.rng()?;
        if legal.is_empty() || rng.random_bool(0.5) {
            return Ok(None);
        }
        Ok(legal.choose(&mut *rng).copied())
    }
}
