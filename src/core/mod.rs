//! Core state machine types.
//!
//! This module contains the building blocks shared by every machine:
//! - State tags via the `State` trait
//! - Guard predicates for transition control
//! - Events passed to state handlers
//!
//! Nothing here owns or mutates a machine; see [`crate::machine`] for the
//! evaluator.

mod event;
mod guard;
mod state;

pub use event::StateEvent;
pub use guard::Guard;
pub use state::State;
