//! Core error taxonomy used across the system
//!
//! Four kinds cover everything the domain services can report:
//!
//! - `Validation` - malformed or out-of-range input (negative capacity, negative charge)
//! - `Conflict` - a precondition failed because of concurrent or stale state
//!   (bed already occupied, deleting an occupied bed or a non-empty ward)
//! - `InvalidState` - the operation is not valid for the entity's current
//!   lifecycle state (discharging an already-discharged admission)
//! - `NotFound` - a referenced entity is absent
//!
//! Errors are surfaced to the caller unmodified; the core never recovers
//! silently and never retries. A lost race on bed assignment is reported as
//! `Conflict` and retry policy, if any, belongs to the caller.

use std::fmt;
use thiserror::Error;

use crate::money::MoneyError;

/// Coarse classification of a [`CoreError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Conflict,
    InvalidState,
    NotFound,
}

/// Error type shared by domain services and storage ports
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

impl CoreError {
    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        CoreError::Conflict(message.into())
    }

    /// Creates an InvalidState error
    pub fn invalid_state(message: impl Into<String>) -> Self {
        CoreError::InvalidState(message.into())
    }

    /// Creates a NotFound error
    pub fn not_found(entity: &'static str, id: impl fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    /// Returns the kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoreError::Validation(_) => ErrorKind::Validation,
            CoreError::Conflict(_) => ErrorKind::Conflict,
            CoreError::InvalidState(_) => ErrorKind::InvalidState,
            CoreError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Returns true if this error is a conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, CoreError::Conflict(_))
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

impl From<MoneyError> for CoreError {
    fn from(err: MoneyError) -> Self {
        CoreError::Validation(err.to_string())
    }
}
