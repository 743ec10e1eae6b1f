//! Events handed to state handlers.

use super::state::State;
use serde::Serialize;

/// Snapshot of a machine's position at the moment a handler runs.
///
/// `next` is only set on the leave event of a transition. Enter and update
/// events always carry `next: None`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(bound = "")]
pub struct StateEvent<S: State> {
    /// State held before the most recent transition, `None` before the first one.
    pub previous: Option<S>,
    /// State the machine is in (or leaving, for a leave event).
    pub current: S,
    /// Destination of the transition in progress.
    pub next: Option<S>,
}

impl<S: State> StateEvent<S> {
    /// Event for a machine resting in `current`.
    pub fn settled(previous: Option<S>, current: S) -> Self {
        Self {
            previous,
            current,
            next: None,
        }
    }

    /// Event for a machine about to leave `current` for `next`.
    pub fn leaving(previous: Option<S>, current: S, next: S) -> Self {
        Self {
            previous,
            current,
            next: Some(next),
        }
    }

    /// True for the leave half of a transition.
    pub fn is_leaving(&self) -> bool {
        self.next.is_some()
    }
}
