//! Game stats error types.

use thiserror::Error;

/// A rejected stats value. The previous value is kept.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum StatsError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be a whole number, got {value}")]
    NotInteger { field: &'static str, value: f64 },

    #[error("{field} is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}
