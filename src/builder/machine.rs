//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{State, StateEvent};
use crate::machine::{StateHandlers, StateMachine};

/// Builder for constructing state machines with a fluent API.
///
/// Every registration step validates immediately and returns the first
/// configuration error, so a chain of `?` aborts setup at the faulty line.
pub struct StateMachineBuilder<S: State, C> {
    machine: StateMachine<S, C>,
}

impl<S: State, C> StateMachineBuilder<S, C> {
    /// Create a new builder for a machine starting in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            machine: StateMachine::new(initial),
        }
    }

    /// Label used in log records.
    pub fn named(mut self, name: &'static str) -> Self {
        self.machine = self.machine.named(name);
        self
    }

    /// Register a state with its handlers.
    pub fn state(mut self, state: S, handlers: StateHandlers<S, C>) -> Result<Self, BuildError> {
        self.machine.add_state(state, handlers)?;
        Ok(self)
    }

    /// Add a guarded transition.
    pub fn transition<F>(mut self, from: S, to: S, condition: F) -> Result<Self, BuildError>
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.machine.add_transition(from, to, condition)?;
        Ok(self)
    }

    /// Add the same guarded transition from several source states.
    pub fn transitions<F>(mut self, from: &[S], to: S, condition: F) -> Result<Self, BuildError>
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.machine.add_transitions(from, to, condition)?;
        Ok(self)
    }

    /// Observer invoked on every transition.
    pub fn on_state_change<F>(mut self, observer: F) -> Self
    where
        F: Fn(&StateEvent<S>, &mut C) + Send + Sync + 'static,
    {
        self.machine.set_state_change_observer(observer);
        self
    }

    /// Build the state machine.
    /// Returns an error if the initial state was never registered.
    pub fn build(self) -> Result<StateMachine<S, C>, BuildError> {
        let initial = self.machine.current();
        if !self.machine.is_registered(initial) {
            return Err(BuildError::UnregisteredInitialState {
                state: initial.name(),
            });
        }

        Ok(self.machine)
    }
}
