//! Build errors for state registration and transition wiring.

use thiserror::Error;

/// Configuration errors raised while a machine is being set up.
///
/// These abort setup; a machine is never stepped with a half-applied
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Handlers for state '{state}' already exist")]
    DuplicateState { state: &'static str },

    #[error("State '{state}' has index {index} outside of its {count} declared tags")]
    IndexOutOfRange {
        state: &'static str,
        index: usize,
        count: usize,
    },

    #[error("Cannot add transition from '{from}' to '{to}': state '{from}' is not registered")]
    UnknownSourceState {
        from: &'static str,
        to: &'static str,
    },

    #[error("Cannot add transition from '{from}' to '{to}': state '{to}' is not registered")]
    UnknownTargetState {
        from: &'static str,
        to: &'static str,
    },

    #[error("Transition from '{from}' to '{to}' already exists")]
    DuplicateTransition {
        from: &'static str,
        to: &'static str,
    },

    #[error("Initial state '{state}' was never registered. Call .state({state}, ..) before .build()")]
    UnregisteredInitialState { state: &'static str },
}
