//! Domain-level error type returned by every rules operation.
//!
//! An illegal move is always reported as [`DomainError::Validation`] and is
//! guaranteed to leave the game state untouched. [`DomainError::Integrity`]
//! is only produced by the invariant checker; the rules code itself asserts.

use thiserror::Error;

/// Fine-grained reason an illegal move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ValidationKind {
    PhaseMismatch,
    OutOfTurn,
    CardIndexOutOfRange,
    MustFollowSuit,
    ParseCardKey,
    CardNotInTrick,
    AssignmentTargetNotInTrick,
    IncompleteAssignments,
    UnknownPendingAssignment,
    SwapAlreadyMade,
    NoSwapToUndo,
    SwapIndexOutOfRange,
    SwapRewardCard,
    InvalidPlayerCount,
    InvalidVariants,
    GameOver,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Illegal move or invalid input; state is unchanged.
    #[error("validation error ({0:?}): {1}")]
    Validation(ValidationKind, String),
    /// A state invariant does not hold.
    #[error("integrity violation: {0}")]
    Integrity(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn integrity(detail: impl Into<String>) -> Self {
        Self::Integrity(detail.into())
    }

    /// Validation kind, if this is an illegal-move error.
    pub fn kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Integrity(_) => None,
        }
    }
}
