//! Error handling for the Kolkhoz engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
