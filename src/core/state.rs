//! The `State` trait implemented by every machine tag.
//!
//! Every machine is driven by a closed set of tags. The trait exposes a dense
//! ordinal for each tag so a machine can keep its per-state data in a plain
//! array instead of a map.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// Implementors are field-less enums. `index` must return a value in
/// `0..Self::ALL.len()` and `ALL[s.index()] == s` must hold for every tag;
/// the [`state_enum!`](crate::state_enum) macro guarantees both.
///
/// # Example
///
/// ```rust
/// use layered_fsm::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Open,
///     Broken,
/// }
///
/// impl State for DoorState {
///     const ALL: &'static [Self] = &[Self::Closed, Self::Open, Self::Broken];
///
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn index(&self) -> usize {
///         *self as usize
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert_eq!(DoorState::Open.index(), 1);
/// assert!(DoorState::Broken.is_final());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Every tag, ordered by [`State::index`].
    const ALL: &'static [Self];

    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Dense ordinal of this tag.
    fn index(&self) -> usize;

    /// Check if this is a final (terminal) state.
    ///
    /// Final states are expected to have no outgoing transitions. The engine
    /// does not enforce this; it is a hint for owners and diagnostics.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}
