//! Horizontal movement layer.

use super::frame::HeroFrame;
use crate::body::Facing;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::machine::{StateHandlers, StateMachine};
use crate::state_enum;

state_enum! {
    /// Horizontal drive of the hero.
    pub enum HorizontalState {
        Still,
        Left,
        Right,
        Dead,
    }
    final: [Dead]
}

type Handlers = StateHandlers<HorizontalState, HeroFrame>;

fn drive(frame: &mut HeroFrame, facing: Facing) {
    frame.body.acceleration_x = facing.sign() * frame.tuning.run_acceleration;
    frame.body.facing = facing;
    frame.body.hitbox_offset = match facing {
        Facing::Left => frame.tuning.hitbox_offset_left,
        Facing::Right => frame.tuning.hitbox_offset_right,
    };
}

fn stop(frame: &mut HeroFrame) {
    frame.body.acceleration_x = 0.0;
}

pub(crate) fn build() -> Result<StateMachine<HorizontalState, HeroFrame>, BuildError> {
    use HorizontalState::*;

    StateMachineBuilder::<HorizontalState, HeroFrame>::new(Still)
        .named("hero.horizontal")
        .state(Still, Handlers::new().on_enter(|_, frame| stop(frame)))?
        .state(Left, Handlers::new().on_enter(|_, frame| drive(frame, Facing::Left)))?
        .state(Right, Handlers::new().on_enter(|_, frame| drive(frame, Facing::Right)))?
        .state(Dead, Handlers::new().on_enter(|_, frame| stop(frame)))?
        .transitions(&[Still, Right], Left, |frame| {
            frame.input.left_held() && !frame.input.right_held()
        })?
        .transitions(&[Still, Left], Right, |frame| {
            frame.input.right_held() && !frame.input.left_held()
        })?
        // Holding both directions counts as holding neither.
        .transitions(&[Left, Right], Still, |frame| {
            frame.input.left_held() == frame.input.right_held()
        })?
        .transitions(&[Still, Left, Right], Dead, |frame| frame.dead)?
        .build()
}
