//! Error types for the pairing engine.
//!
//! Every failure is a caller-visible contract violation detected at the
//! boundary of a matcher call. Nothing is retried internally.

use thiserror::Error;

use crate::model::ParticipantId;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PairingError>;

/// Errors produced while validating inputs or evaluating matchings.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PairingError {
    /// Group sizes differ, a preference list has the wrong length, ids are
    /// duplicated, or a configuration is unusable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A counterpart id is absent from an owner's preference list.
    #[error("participant {owner} has no rank for counterpart {counterpart}")]
    PreferenceLookupFailed {
        owner: ParticipantId,
        counterpart: ParticipantId,
    },

    /// A satisfaction score at or below zero reached the harmonic mean.
    #[error("non-positive satisfaction score {score} at position {position}")]
    NumericDegeneracy { position: usize, score: i64 },
}

impl PairingError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        PairingError::InvalidInput(message.into())
    }
}
