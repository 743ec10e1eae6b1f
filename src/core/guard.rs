//! Guard predicates for controlling state transitions.
//!
//! A guard reads the owner's per-tick context and answers whether an edge may
//! be taken. Guards never mutate the context; side effects belong in state
//! handlers.

use std::fmt;
use std::sync::Arc;

/// Condition attached to a transition edge.
///
/// `C` is the context the owning controller lends to the machine on every
/// update. Cloning a guard is cheap: clones share the same predicate, which is
/// how one condition is attached to several source states at once.
///
/// # Example
///
/// ```rust
/// use layered_fsm::core::Guard;
///
/// struct Signals {
///     grounded: bool,
/// }
///
/// let airborne = Guard::new(|s: &Signals| !s.grounded);
///
/// assert!(airborne.check(&Signals { grounded: false }));
/// assert!(!airborne.check(&Signals { grounded: true }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a predicate over the context.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against the context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
