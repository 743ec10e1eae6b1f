//! Layered FSM: declarative state machines for platformer actors
//!
//! A small, generic finite-state-machine engine and the controllers built on
//! it. Each machine is a closed set of states, per-state enter/update/leave
//! handlers and an ordered list of guarded edges. One call to `update` takes
//! at most one edge: the first one, in registration order, whose guard holds.
//!
//! # Core Concepts
//!
//! - **State**: a closed enum implementing [`State`], usually generated with
//!   [`state_enum!`]
//! - **Guards**: pure predicates over a caller-supplied context
//! - **Controllers**: plain values that own machines and are stepped once per
//!   tick by the host, see [`controller`]
//!
//! # Example
//!
//! ```rust
//! use layered_fsm::builder::StateMachineBuilder;
//! use layered_fsm::machine::StateHandlers;
//! use layered_fsm::state_enum;
//!
//! state_enum! {
//!     enum Door {
//!         Closed,
//!         Open,
//!     }
//! }
//!
//! struct Sensor {
//!     someone_near: bool,
//!     openings: u32,
//! }
//!
//! let mut door = StateMachineBuilder::<Door, Sensor>::new(Door::Closed)
//!     .state(Door::Closed, StateHandlers::new())?
//!     .state(
//!         Door::Open,
//!         StateHandlers::<Door, Sensor>::new().on_enter(|_, sensor| sensor.openings += 1),
//!     )?
//!     .transition(Door::Closed, Door::Open, |sensor| sensor.someone_near)?
//!     .transition(Door::Open, Door::Closed, |sensor| !sensor.someone_near)?
//!     .build()?;
//!
//! let mut sensor = Sensor { someone_near: true, openings: 0 };
//! door.update(&mut sensor).unwrap();
//! door.update(&mut sensor).unwrap();
//!
//! assert_eq!(door.current(), Door::Open);
//! assert_eq!(sensor.openings, 1);
//! # Ok::<(), layered_fsm::builder::BuildError>(())
//! ```

pub mod body;
pub mod builder;
pub mod controller;
pub mod core;
pub mod input;
pub mod machine;
pub mod stats;
pub mod tuning;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use core::{Guard, State, StateEvent};
pub use machine::{StateHandlers, StateMachine, TransitionError};
