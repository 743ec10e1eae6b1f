//! Transition edges, state handlers and evaluation errors.

use crate::core::{Guard, State, StateEvent};
use thiserror::Error;

/// Errors that can occur while stepping a machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("State '{state}' has no registered handlers")]
    UnregisteredState { state: &'static str },
}

/// Callback run on enter, update or leave of a state.
pub type StateHandler<S, C> = Box<dyn Fn(&StateEvent<S>, &mut C) + Send + Sync>;

/// A conditioned edge owned by its source state.
pub struct Transition<S: State, C> {
    pub to: S,
    pub guard: Guard<C>,
}

impl<S: State, C> Transition<S, C> {
    /// Whether the edge may be taken for this context.
    pub fn can_execute(&self, context: &C) -> bool {
        self.guard.check(context)
    }
}

impl<S: State, C> Clone for Transition<S, C> {
    fn clone(&self) -> Self {
        Self {
            to: self.to,
            guard: self.guard.clone(),
        }
    }
}

/// Optional enter/update/leave callbacks of one state.
///
/// ```rust
/// use layered_fsm::machine::StateHandlers;
/// use layered_fsm::state_enum;
///
/// state_enum! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// let handlers = StateHandlers::<Lamp, u32>::new()
///     .on_enter(|_, switches| *switches += 1)
///     .on_update(|event, _| assert!(event.next.is_none()));
/// ```
pub struct StateHandlers<S: State, C> {
    pub(crate) on_enter: Option<StateHandler<S, C>>,
    pub(crate) on_update: Option<StateHandler<S, C>>,
    pub(crate) on_leave: Option<StateHandler<S, C>>,
}

impl<S: State, C> StateHandlers<S, C> {
    /// Handlers that do nothing.
    pub fn new() -> Self {
        Self {
            on_enter: None,
            on_update: None,
            on_leave: None,
        }
    }

    /// Run `handler` right after the machine enters this state.
    pub fn on_enter<F>(mut self, handler: F) -> Self
    where
        F: Fn(&StateEvent<S>, &mut C) + Send + Sync + 'static,
    {
        self.on_enter = Some(Box::new(handler));
        self
    }

    /// Run `handler` on every update while in this state, including the
    /// update that entered it.
    pub fn on_update<F>(mut self, handler: F) -> Self
    where
        F: Fn(&StateEvent<S>, &mut C) + Send + Sync + 'static,
    {
        self.on_update = Some(Box::new(handler));
        self
    }

    /// Run `handler` right before the machine leaves this state.
    pub fn on_leave<F>(mut self, handler: F) -> Self
    where
        F: Fn(&StateEvent<S>, &mut C) + Send + Sync + 'static,
    {
        self.on_leave = Some(Box::new(handler));
        self
    }
}

impl<S: State, C> Default for StateHandlers<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum TestState {
            Start,
            Middle,
            End,
        }
        final: [End]
    }

    #[test]
    fn can_execute_follows_guard() {
        let transition: Transition<TestState, bool> = Transition {
            to: TestState::Middle,
            guard: Guard::new(|ready: &bool| *ready),
        };

        assert!(transition.can_execute(&true));
        assert!(!transition.can_execute(&false));
    }

    #[test]
    fn cloned_transition_keeps_target_and_guard() {
        let transition: Transition<TestState, u8> = Transition {
            to: TestState::End,
            guard: Guard::new(|n: &u8| *n > 3),
        };
        let cloned = transition.clone();

        assert_eq!(cloned.to, TestState::End);
        assert!(cloned.can_execute(&4));
        assert!(!cloned.can_execute(&3));
    }

    #[test]
    fn empty_handlers_have_no_callbacks() {
        let handlers: StateHandlers<TestState, ()> = StateHandlers::default();

        assert!(handlers.on_enter.is_none());
        assert!(handlers.on_update.is_none());
        assert!(handlers.on_leave.is_none());
    }

    #[test]
    fn handlers_run_against_context() {
        let handlers = StateHandlers::<TestState, Vec<&'static str>>::new()
            .on_enter(|event, log| log.push(event.current.name()))
            .on_leave(|event, log| {
                if let Some(next) = event.next {
                    log.push(next.name());
                }
            });

        let mut log = Vec::new();
        let enter = StateEvent::settled(Some(TestState::Start), TestState::Middle);
        let leave = StateEvent::leaving(Some(TestState::Start), TestState::Middle, TestState::End);

        if let Some(on_enter) = &handlers.on_enter {
            on_enter(&enter, &mut log);
        }
        if let Some(on_leave) = &handlers.on_leave {
            on_leave(&leave, &mut log);
        }

        assert_eq!(log, vec!["Middle", "End"]);
    }
}
