//! Controllers that own machines and step them once per tick.
//!
//! - [`hero`] – the player character: horizontal, vertical and animation
//!   layers updated in that order
//! - [`patrol`] – a secondary actor walking between two bounds
//!
//! Controllers are plain values. The host keeps them next to its own body and
//! sprite registries, keyed by whatever id it uses, and lends each one its
//! [`Body`](crate::body::Body) during the tick.

pub mod countdown;
pub mod hero;
pub mod patrol;

pub use countdown::Countdown;
pub use hero::{HeroController, HeroEvent};
pub use patrol::{PatrolController, PatrolEvent};

use crate::builder::BuildError;
use crate::tuning::TuningError;
use thiserror::Error;

/// Errors that abort controller construction.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid machine configuration: {0}")]
    Build(#[from] BuildError),

    #[error(transparent)]
    Tuning(#[from] TuningError),
}
