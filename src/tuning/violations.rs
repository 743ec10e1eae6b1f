//! Tuning violations and load errors.

use thiserror::Error;

/// One rejected tuning value.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TuningViolation {
    #[error("'{field}' must be a finite number greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("'{field}' must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("'{field}' must span at least one frame")]
    EmptyWindow { field: &'static str },

    #[error("Release clip speed ({release}) must be below the jump speed ({jump})")]
    ReleaseAboveJump { release: f32, jump: f32 },

    #[error("Patrol start bound ({start_x}) must not lie past its end bound ({end_x})")]
    InvertedBounds { start_x: f32, end_x: f32 },
}

/// Errors produced while loading or checking tuning.
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("Failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Tuning rejected with {} violation(s)", .violations.len())]
    Invalid { violations: Vec<TuningViolation> },
}
