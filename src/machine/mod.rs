//! Machine runtime: state registry, transition edges and the evaluator.
//!
//! # Key Concepts
//!
//! - **Handlers**: optional enter/update/leave callbacks per state
//! - **Transitions**: ordered, guarded edges owned by their source state
//! - **State Machine**: registers both and takes at most one edge per update
//!
//! Evaluation is synchronous and bounded by the number of edges leaving the
//! current state.

mod state_machine;
mod transition;

pub use state_machine::StateMachine;
pub use transition::{StateHandler, StateHandlers, Transition, TransitionError};
