//! Error types for scoring and its collaborators
//!
//! The engine itself only ever rejects observations; the other variants come
//! from providers and the prediction store at the boundary.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A required numeric field was missing or non-finite
    #[error("invalid observation: `{field}` {reason}")]
    InvalidObservation {
        field: &'static str,
        reason: &'static str,
    },

    /// An observation provider could not supply conditions for a region/event pair
    #[error("observation provider failed for {region} ({event_type}): {message}")]
    Provider {
        region: String,
        event_type: String,
        message: String,
    },

    /// The prediction store could not record or read predictions
    #[error("prediction store error: {0}")]
    Store(String),
}

impl ScoringError {
    pub fn missing(field: &'static str) -> Self {
        ScoringError::InvalidObservation { field, reason: "is missing" }
    }

    pub fn non_finite(field: &'static str) -> Self {
        ScoringError::InvalidObservation { field, reason: "must be a finite number" }
    }

    /// True for errors caused by the caller's input rather than a collaborator
    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::InvalidObservation { .. })
    }
}
