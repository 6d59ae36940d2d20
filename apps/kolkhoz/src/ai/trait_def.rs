//! AI player trait definition.

use std::fmt;

use crate::domain::assignment::Assignments;
use crate::domain::player_view::CurrentYearInfo;
use crate::domain::state::PlotArea;
use crate::domain::Suit;
use crate::error::AppError;

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced an invalid move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for AppError {
    fn from(err: AiError) -> Self {
        AppError::internal(format!("AI error: {err}"))
    }
}

/// A swap choice: (plot index, hand index, plot area).
pub type SwapChoice = (usize, usize, PlotArea);

/// Trait for AI players.
///
/// Implementations receive what their seat can see and must choose a legal
/// action, using the legal-choice helpers on [`CurrentYearInfo`].
pub trait AiPlayer: Send + Sync {
    /// Choose the year's trump. Called only for the trump selector.
    fn choose_trump(&self, state: &CurrentYearInfo) -> Result<Suit, AiError>;

    /// Choose a hand index to play; must be one of `state.legal_plays()`.
    fn choose_play(&self, state: &CurrentYearInfo) -> Result<usize, AiError>;

    /// Distribute the last trick (`state.cards_to_assign()`) among
    /// `state.assignment_targets()`.
    fn choose_assignments(&self, state: &CurrentYearInfo) -> Result<Assignments, AiError>;

    /// Optionally exchange one hand card with one plot card.
    fn choose_swap(&self, state: &CurrentYearInfo) -> Result<Option<SwapChoice>, AiError>;
}
