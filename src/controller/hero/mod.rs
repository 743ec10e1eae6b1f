//! Layered controller for the player character.
//!
//! Three machines are stepped every tick in a fixed order:
//!
//! 1. [`HorizontalState`] – left/right drive from the merged input
//! 2. [`VerticalState`] – jumps, flips and falls, after the grounded grace
//!    and jump buffer countdowns have been refreshed
//! 3. [`AnimationState`] – derived from the vertical state, the facing the
//!    horizontal layer wrote into the body and the body's velocity
//!
//! Later layers read the post-update state of earlier ones within the same
//! tick. Each machine takes at most one transition per tick.
//!
//! # Example
//!
//! ```rust
//! use layered_fsm::body::Body;
//! use layered_fsm::controller::{HeroController, HeroEvent};
//! use layered_fsm::controller::hero::{AnimationState, VerticalState};
//! use layered_fsm::input::{ButtonState, InputSnapshot, KeySet};
//! use layered_fsm::tuning::HeroTuning;
//!
//! let mut hero = HeroController::new(HeroTuning::default()).unwrap();
//! let mut body = Body { on_floor: true, ..Body::default() };
//!
//! let input = InputSnapshot::from_keys(KeySet {
//!     jump: ButtonState::just_pressed(),
//!     ..KeySet::default()
//! });
//! let events: Vec<HeroEvent> = hero.update(&input, &mut body).unwrap().collect();
//!
//! assert_eq!(hero.vertical_state(), VerticalState::PreJumping);
//! assert_eq!(body.velocity.y, -400.0);
//! assert_eq!(events, vec![HeroEvent::AnimationChanged(AnimationState::Jumping)]);
//! ```

pub mod animation;
mod frame;
pub mod horizontal;
pub mod vertical;

pub use animation::AnimationState;
pub use frame::HeroEvent;
pub use horizontal::HorizontalState;
pub use vertical::VerticalState;

use self::frame::HeroFrame;
use crate::body::{Body, Facing};
use crate::controller::SetupError;
use crate::input::InputSnapshot;
use crate::machine::{StateMachine, TransitionError};
use crate::tuning::HeroTuning;
use std::vec::Drain;
use tracing::debug;

/// The player character's composite controller.
pub struct HeroController {
    horizontal: StateMachine<HorizontalState, HeroFrame>,
    vertical: StateMachine<VerticalState, HeroFrame>,
    animation: StateMachine<AnimationState, HeroFrame>,
    frame: HeroFrame,
}

impl HeroController {
    /// Validate `tuning` and wire the three machines.
    pub fn new(tuning: HeroTuning) -> Result<Self, SetupError> {
        tuning.check()?;

        Ok(Self {
            horizontal: horizontal::build()?,
            vertical: vertical::build()?,
            animation: animation::build()?,
            frame: HeroFrame::new(tuning),
        })
    }

    /// Step all three layers for one tick.
    ///
    /// `body` carries this tick's collision results in and the controller's
    /// drive and impulses out. Returns the events raised since the previous
    /// update, including a `Died` queued by [`kill`](Self::kill).
    pub fn update(
        &mut self,
        input: &InputSnapshot,
        body: &mut Body,
    ) -> Result<Drain<'_, HeroEvent>, TransitionError> {
        self.frame.begin(input, body);

        self.horizontal.update(&mut self.frame)?;

        self.frame.refresh_countdowns();
        self.vertical.update(&mut self.frame)?;
        self.frame.vertical = self.vertical.current();

        self.animation.update(&mut self.frame)?;

        *body = self.frame.body;
        Ok(self.frame.events.drain(..))
    }

    /// Kill the hero. Returns `true` only for the call that actually killed
    /// it; `HeroEvent::Died` is queued exactly once.
    pub fn kill(&mut self) -> bool {
        if self.frame.dead {
            return false;
        }
        self.frame.dead = true;
        self.frame.events.push(HeroEvent::Died);
        debug!("hero died");
        true
    }

    pub fn is_dead(&self) -> bool {
        self.frame.dead
    }

    pub fn horizontal_state(&self) -> HorizontalState {
        self.horizontal.current()
    }

    pub fn vertical_state(&self) -> VerticalState {
        self.vertical.current()
    }

    pub fn animation_state(&self) -> AnimationState {
        self.animation.current()
    }

    /// Direction of the last horizontal drive.
    pub fn facing(&self) -> Facing {
        self.frame.body.facing
    }

    /// Remaining ticks of coyote time.
    pub fn grounded_grace(&self) -> u32 {
        self.frame.grounded_grace.remaining()
    }

    /// Remaining ticks of the buffered jump press.
    pub fn jump_buffer(&self) -> u32 {
        self.frame.jump_buffer.remaining()
    }

    pub fn tuning(&self) -> &HeroTuning {
        &self.frame.tuning
    }
}
