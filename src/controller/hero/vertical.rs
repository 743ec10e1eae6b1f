//! Vertical movement layer: jumping, flipping, falling and dying.
//!
//! Jumps are arbitrated by two countdowns owned by the controller and
//! refreshed right before this layer updates: the grounded grace (coyote
//! time) and the jump buffer. A jump starts when both are running.

use super::frame::HeroFrame;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::machine::{StateHandlers, StateMachine};
use crate::state_enum;
use tracing::debug;

state_enum! {
    /// Vertical phase of the hero.
    pub enum VerticalState {
        Standing,
        /// Jump impulse applied, waiting for the body to start rising.
        PreJumping,
        Jumping,
        /// Mid-air double jump.
        Flipping,
        Falling,
        Dead,
    }
    final: [Dead]
}

impl VerticalState {
    pub fn is_airborne(self) -> bool {
        matches!(
            self,
            Self::PreJumping | Self::Jumping | Self::Flipping | Self::Falling
        )
    }
}

type Handlers = StateHandlers<VerticalState, HeroFrame>;

fn start_jump(frame: &mut HeroFrame) {
    frame.grounded_grace.clear();
    frame.jump_buffer.clear();
    frame.body.velocity.y = -frame.tuning.jump_speed;
    debug!(vy = frame.body.velocity.y, "hero jump");
}

/// Variable jump height: releasing the button early clips the ascent.
fn clip_released_jump(frame: &mut HeroFrame) {
    let clip = -frame.tuning.jump_release_speed;
    if !frame.input.jump_held() && frame.body.velocity.y < clip {
        frame.body.velocity.y = clip;
    }
}

fn start_flip(frame: &mut HeroFrame) {
    frame.jump_buffer.clear();
    frame.body.velocity.y = -frame.tuning.double_jump_speed;
    debug!(vy = frame.body.velocity.y, "hero double jump");
}

fn death_hop(frame: &mut HeroFrame) {
    frame.body.velocity.y = -frame.tuning.death_hop_speed;
    frame.body.collide_world_bounds = false;
}

pub(crate) fn build() -> Result<StateMachine<VerticalState, HeroFrame>, BuildError> {
    use VerticalState::*;

    StateMachineBuilder::<VerticalState, HeroFrame>::new(Standing)
        .named("hero.vertical")
        .state(Standing, Handlers::new())?
        .state(PreJumping, Handlers::new().on_enter(|_, frame| start_jump(frame)))?
        .state(
            Jumping,
            Handlers::new().on_update(|_, frame| clip_released_jump(frame)),
        )?
        .state(Flipping, Handlers::new().on_enter(|_, frame| start_flip(frame)))?
        .state(Falling, Handlers::new())?
        .state(Dead, Handlers::new().on_enter(|_, frame| death_hop(frame)))?
        .transitions(
            &[Standing, PreJumping, Jumping, Flipping, Falling],
            Dead,
            |frame| frame.dead,
        )?
        .transitions(&[Standing, Falling], PreJumping, |frame| {
            frame.grounded_grace.is_active() && frame.jump_buffer.is_active()
        })?
        // Waits for the host's integrator to apply the impulse.
        .transition(PreJumping, Jumping, |frame| frame.body.velocity.y < 0.0)?
        .transition(Jumping, Flipping, |frame| frame.input.jump_pressed())?
        .transitions(
            &[PreJumping, Jumping, Flipping, Falling],
            Standing,
            |frame| frame.body.on_floor,
        )?
        .transition(Standing, Falling, |frame| !frame.body.on_floor)?
        .build()
}
