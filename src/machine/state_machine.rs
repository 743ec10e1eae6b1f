//! Registry of states and transitions plus the single-step evaluator.

use crate::builder::BuildError;
use crate::core::{Guard, State, StateEvent};
use crate::machine::transition::{StateHandler, StateHandlers, Transition, TransitionError};
use tracing::trace;

struct StateSlot<S: State, C> {
    handlers: StateHandlers<S, C>,
    transitions: Vec<Transition<S, C>>,
}

/// Declarative state machine stepped once per tick.
///
/// `C` is the context the owner lends on every [`update`](Self::update):
/// guards read it, handlers mutate it. Per-state data lives in a dense array
/// indexed by [`State::index`].
pub struct StateMachine<S: State, C> {
    name: &'static str,
    current: S,
    previous: Option<S>,
    slots: Vec<Option<StateSlot<S, C>>>,
    on_state_change: Option<StateHandler<S, C>>,
}

impl<S: State, C> StateMachine<S, C> {
    /// Create a machine resting in `initial`. The initial state still has to
    /// be registered with [`add_state`](Self::add_state).
    pub fn new(initial: S) -> Self {
        let mut slots = Vec::with_capacity(S::ALL.len());
        slots.resize_with(S::ALL.len(), || None);

        Self {
            name: "fsm",
            current: initial,
            previous: None,
            slots,
            on_state_change: None,
        }
    }

    /// Label used in log records.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get current state (pure)
    pub fn current(&self) -> S {
        self.current
    }

    /// State held before the most recent transition.
    pub fn previous(&self) -> Option<S> {
        self.previous
    }

    /// Check if machine is in a final state (pure)
    pub fn is_final(&self) -> bool {
        self.current.is_final()
    }

    pub fn is_registered(&self, state: S) -> bool {
        self.slot(state).is_some()
    }

    /// Destinations of the edges leaving `state`, in evaluation order.
    pub fn transitions_from(&self, state: S) -> impl Iterator<Item = S> + '_ {
        self.slot(state)
            .into_iter()
            .flat_map(|slot| slot.transitions.iter().map(|t| t.to))
    }

    /// Register `state` with its handlers.
    pub fn add_state(&mut self, state: S, handlers: StateHandlers<S, C>) -> Result<(), BuildError> {
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(state.index())
            .ok_or(BuildError::IndexOutOfRange {
                state: state.name(),
                index: state.index(),
                count,
            })?;

        if slot.is_some() {
            return Err(BuildError::DuplicateState {
                state: state.name(),
            });
        }

        *slot = Some(StateSlot {
            handlers,
            transitions: Vec::new(),
        });
        Ok(())
    }

    /// Append an edge `from -> to` guarded by `condition`.
    pub fn add_transition<F>(&mut self, from: S, to: S, condition: F) -> Result<(), BuildError>
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.add_guarded(from, to, Guard::new(condition))
    }

    /// Append an edge `from -> to` for every `from`, in list order, sharing
    /// one condition. Stops at the first rejected edge.
    pub fn add_transitions<F>(&mut self, from: &[S], to: S, condition: F) -> Result<(), BuildError>
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        let guard = Guard::new(condition);
        for &source in from {
            self.add_guarded(source, to, guard.clone())?;
        }
        Ok(())
    }

    /// Observer invoked after the new state's enter handler on every transition.
    pub fn set_state_change_observer<F>(&mut self, observer: F)
    where
        F: Fn(&StateEvent<S>, &mut C) + Send + Sync + 'static,
    {
        self.on_state_change = Some(Box::new(observer));
    }

    fn add_guarded(&mut self, from: S, to: S, guard: Guard<C>) -> Result<(), BuildError> {
        if !self.is_registered(from) {
            return Err(BuildError::UnknownSourceState {
                from: from.name(),
                to: to.name(),
            });
        }
        if !self.is_registered(to) {
            return Err(BuildError::UnknownTargetState {
                from: from.name(),
                to: to.name(),
            });
        }

        let Some(slot) = self.slot_mut(from) else {
            return Err(BuildError::UnknownSourceState {
                from: from.name(),
                to: to.name(),
            });
        };

        if slot.transitions.iter().any(|t| t.to == to) {
            return Err(BuildError::DuplicateTransition {
                from: from.name(),
                to: to.name(),
            });
        }

        slot.transitions.push(Transition { to, guard });
        Ok(())
    }

    /// Execute one step of the state machine.
    ///
    /// Takes at most one transition: the first edge of the current state whose
    /// guard holds. On a transition the old state's leave handler, the new
    /// state's enter handler and the machine observer run in that order. The
    /// (possibly new) current state's update handler always runs last.
    ///
    /// Returns the enter event when a transition happened.
    pub fn update(&mut self, context: &mut C) -> Result<Option<StateEvent<S>>, TransitionError> {
        let from = self.current;
        let slot = self
            .slot(from)
            .ok_or(TransitionError::UnregisteredState { state: from.name() })?;

        let next = {
            let view: &C = context;
            slot.transitions
                .iter()
                .find(|t| t.can_execute(view))
                .map(|t| t.to)
        };

        let entered = match next {
            Some(to) => {
                let leave = StateEvent::leaving(self.previous, from, to);
                if let Some(on_leave) = &slot.handlers.on_leave {
                    on_leave(&leave, context);
                }

                self.previous = Some(from);
                self.current = to;
                trace!(
                    machine = self.name,
                    from = from.name(),
                    to = to.name(),
                    "state transition"
                );

                let enter = StateEvent::settled(self.previous, to);
                let slot = self
                    .slot(to)
                    .ok_or(TransitionError::UnregisteredState { state: to.name() })?;
                if let Some(on_enter) = &slot.handlers.on_enter {
                    on_enter(&enter, context);
                }
                if let Some(observer) = &self.on_state_change {
                    observer(&enter, context);
                }
                Some(enter)
            }
            None => None,
        };

        let current = self.current;
        let slot = self
            .slot(current)
            .ok_or(TransitionError::UnregisteredState {
                state: current.name(),
            })?;
        if let Some(on_update) = &slot.handlers.on_update {
            on_update(&StateEvent::settled(self.previous, current), context);
        }

        Ok(entered)
    }

    fn slot(&self, state: S) -> Option<&StateSlot<S, C>> {
        self.slots.get(state.index()).and_then(Option::as_ref)
    }

    fn slot_mut(&mut self, state: S) -> Option<&mut StateSlot<S, C>> {
        self.slots.get_mut(state.index()).and_then(Option::as_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::state_enum! {
        enum Light {
            Red,
            Green,
            Yellow,
            Broken,
        }
        final: [Broken]
    }

    #[derive(Default)]
    struct Signals {
        go: bool,
        slow: bool,
        smash: bool,
        log: Vec<String>,
    }

    type Handlers = StateHandlers<Light, Signals>;

    fn logging(state: Light) -> Handlers {
        Handlers::new()
            .on_enter(move |event, s| {
                s.log.push(format!("enter {} from {:?}", state.name(), event.previous))
            })
            .on_update(move |_, s| s.log.push(format!("update {}", state.name())))
            .on_leave(move |event, s| {
                s.log.push(format!(
                    "leave {} for {}",
                    state.name(),
                    event.next.map_or("?", |n| n.name())
                ))
            })
    }

    fn traffic_light() -> StateMachine<Light, Signals> {
        let mut machine = StateMachine::new(Light::Red);
        for state in Light::ALL {
            machine.add_state(*state, logging(*state)).unwrap();
        }
        machine
            .add_transition(Light::Red, Light::Green, |s: &Signals| s.go)
            .unwrap();
        machine
            .add_transition(Light::Green, Light::Yellow, |s: &Signals| s.slow)
            .unwrap();
        machine
            .add_transition(Light::Yellow, Light::Red, |s: &Signals| !s.go)
            .unwrap();
        machine
            .add_transitions(
                &[Light::Red, Light::Green, Light::Yellow],
                Light::Broken,
                |s: &Signals| s.smash,
            )
            .unwrap();
        machine
    }

    #[test]
    fn no_matching_edge_keeps_state_and_runs_update_only() {
        let mut machine = traffic_light();
        let mut signals = Signals::default();

        let entered = machine.update(&mut signals).unwrap();

        assert!(entered.is_none());
        assert_eq!(machine.current(), Light::Red);
        assert_eq!(machine.previous(), None);
        assert_eq!(signals.log, vec!["update Red"]);
    }

    #[test]
    fn transition_runs_leave_enter_update_in_order() {
        let mut machine = traffic_light();
        let mut signals = Signals {
            go: true,
            ..Signals::default()
        };

        let entered = machine.update(&mut signals).unwrap();

        assert_eq!(
            entered,
            Some(StateEvent {
                previous: Some(Light::Red),
                current: Light::Green,
                next: None,
            })
        );
        assert_eq!(
            signals.log,
            vec![
                "leave Red for Green",
                "enter Green from Some(Red)",
                "update Green",
            ]
        );
    }

    #[test]
    fn one_hop_per_update_even_when_next_edge_also_holds() {
        let mut machine = traffic_light();
        let mut signals = Signals {
            go: true,
            slow: true,
            ..Signals::default()
        };

        machine.update(&mut signals).unwrap();
        assert_eq!(machine.current(), Light::Green);

        machine.update(&mut signals).unwrap();
        assert_eq!(machine.current(), Light::Yellow);
    }

    #[test]
    fn first_registered_edge_wins() {
        let mut machine = traffic_light();
        // Red -> Green is registered before Red -> Broken.
        let mut signals = Signals {
            go: true,
            smash: true,
            ..Signals::default()
        };

        machine.update(&mut signals).unwrap();

        assert_eq!(machine.current(), Light::Green);
        assert_eq!(
            machine.transitions_from(Light::Red).collect::<Vec<_>>(),
            vec![Light::Green, Light::Broken]
        );
    }

    #[test]
    fn previous_tracks_only_the_last_transition() {
        let mut machine = traffic_light();
        let mut signals = Signals {
            go: true,
            slow: true,
            ..Signals::default()
        };

        machine.update(&mut signals).unwrap();
        machine.update(&mut signals).unwrap();

        assert_eq!(machine.current(), Light::Yellow);
        assert_eq!(machine.previous(), Some(Light::Green));
    }

    #[test]
    fn observer_sees_enter_event() {
        let mut machine = traffic_light();
        machine.set_state_change_observer(|event, s: &mut Signals| {
            s.log.push(format!("changed to {}", event.current.name()))
        });
        let mut signals = Signals {
            smash: true,
            ..Signals::default()
        };

        machine.update(&mut signals).unwrap();

        assert_eq!(
            signals.log,
            vec![
                "leave Red for Broken",
                "enter Broken from Some(Red)",
                "changed to Broken",
                "update Broken",
            ]
        );
        assert!(machine.is_final());
    }

    #[test]
    fn duplicate_state_is_rejected() {
        let mut machine: StateMachine<Light, Signals> = StateMachine::new(Light::Red);
        machine.add_state(Light::Red, Handlers::new()).unwrap();

        let result = machine.add_state(Light::Red, Handlers::new());

        assert_eq!(result, Err(BuildError::DuplicateState { state: "Red" }));
    }

    #[test]
    fn duplicate_edge_is_rejected() {
        let mut machine = traffic_light();

        let result = machine.add_transition(Light::Red, Light::Green, |_: &Signals| true);

        assert_eq!(
            result,
            Err(BuildError::DuplicateTransition {
                from: "Red",
                to: "Green"
            })
        );
    }

    #[test]
    fn edges_to_or_from_unregistered_states_are_rejected() {
        let mut machine: StateMachine<Light, Signals> = StateMachine::new(Light::Red);
        machine.add_state(Light::Red, Handlers::new()).unwrap();

        assert_eq!(
            machine.add_transition(Light::Green, Light::Red, |_: &Signals| true),
            Err(BuildError::UnknownSourceState {
                from: "Green",
                to: "Red"
            })
        );
        assert_eq!(
            machine.add_transition(Light::Red, Light::Green, |_: &Signals| true),
            Err(BuildError::UnknownTargetState {
                from: "Red",
                to: "Green"
            })
        );
    }

    #[test]
    fn update_on_unregistered_current_state_fails() {
        let mut machine: StateMachine<Light, Signals> = StateMachine::new(Light::Yellow);
        machine.add_state(Light::Red, Handlers::new()).unwrap();

        let result = machine.update(&mut Signals::default());

        assert_eq!(
            result,
            Err(TransitionError::UnregisteredState { state: "Yellow" })
        );
    }
}
