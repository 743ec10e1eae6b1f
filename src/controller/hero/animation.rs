//! Animation layer, derived from the two movement layers.
//!
//! This machine has no physics side effects. Every transition is reported to
//! the host as [`HeroEvent::AnimationChanged`](super::HeroEvent) so it can
//! pick a sprite clip.

use super::frame::{HeroEvent, HeroFrame};
use super::vertical::VerticalState;
use crate::builder::{BuildError, StateMachineBuilder};
use crate::core::State;
use crate::machine::{StateHandlers, StateMachine};
use crate::state_enum;

state_enum! {
    /// Sprite clip the hero should be playing.
    pub enum AnimationState {
        Idle,
        /// Skidding while reversing direction.
        Pivot,
        Running,
        Jumping,
        Flipping,
        Falling,
        Dead,
    }
    final: [Dead]
}

type Handlers = StateHandlers<AnimationState, HeroFrame>;

fn standing_still(frame: &HeroFrame) -> bool {
    frame.standing() && frame.body.velocity.x == 0.0
}

fn running_forward(frame: &HeroFrame) -> bool {
    frame.standing() && frame.moving() == Some(frame.body.facing)
}

fn reversing(frame: &HeroFrame) -> bool {
    frame.standing() && frame.moving() == Some(frame.body.facing.opposite())
}

fn rising(frame: &HeroFrame) -> bool {
    matches!(
        frame.vertical,
        VerticalState::PreJumping | VerticalState::Jumping
    ) && frame.body.velocity.y < 0.0
}

fn flipping(frame: &HeroFrame) -> bool {
    frame.vertical == VerticalState::Flipping
}

fn descending(frame: &HeroFrame) -> bool {
    frame.body.velocity.y > 0.0
}

pub(crate) fn build() -> Result<StateMachine<AnimationState, HeroFrame>, BuildError> {
    use AnimationState::*;

    let mut builder = StateMachineBuilder::<AnimationState, HeroFrame>::new(Idle)
        .named("hero.animation")
        .on_state_change(|event, frame| {
            frame
                .events
                .push(HeroEvent::AnimationChanged(event.current))
        });
    for state in AnimationState::ALL {
        builder = builder.state(*state, Handlers::new())?;
    }

    builder
        .transitions(
            &[Idle, Pivot, Running, Jumping, Flipping, Falling],
            Dead,
            |frame| frame.dead,
        )?
        .transitions(
            &[Pivot, Running, Jumping, Flipping, Falling],
            Idle,
            standing_still,
        )?
        .transitions(
            &[Idle, Pivot, Jumping, Flipping, Falling],
            Running,
            running_forward,
        )?
        .transitions(&[Running, Falling], Pivot, reversing)?
        .transitions(&[Idle, Running, Pivot, Falling], Jumping, rising)?
        .transition(Jumping, Flipping, flipping)?
        // A flip started while falling shows once the body stops descending.
        .transition(Falling, Flipping, |frame| {
            flipping(frame) && frame.body.velocity.y >= 0.0
        })?
        .transitions(
            &[Idle, Pivot, Running, Jumping, Flipping],
            Falling,
            descending,
        )?
        .build()
}

#[cfg(test)]
mod tests {
    use super::AnimationState::*;
    use super::*;
    use crate::body::Facing;
    use crate::tuning::HeroTuning;

    fn frame(vertical: VerticalState, vx: f32, vy: f32, facing: Facing) -> HeroFrame {
        let mut frame = HeroFrame::new(HeroTuning::default());
        frame.vertical = vertical;
        frame.body.velocity.x = vx;
        frame.body.velocity.y = vy;
        frame.body.facing = facing;
        frame
    }

    #[test]
    fn every_transition_is_reported() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::Standing, 120.0, 0.0, Facing::Right);

        machine.update(&mut f).unwrap();

        assert_eq!(machine.current(), Running);
        assert_eq!(f.events, vec![HeroEvent::AnimationChanged(Running)]);
    }

    #[test]
    fn no_event_without_transition() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::Standing, 0.0, 0.0, Facing::Right);

        machine.update(&mut f).unwrap();

        assert_eq!(machine.current(), Idle);
        assert!(f.events.is_empty());
    }

    #[test]
    fn reversing_while_running_pivots() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::Standing, 120.0, 0.0, Facing::Right);
        machine.update(&mut f).unwrap();

        // Facing flips before the velocity does.
        f.body.facing = Facing::Left;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Pivot);

        f.body.velocity.x = -20.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Running);
    }

    #[test]
    fn dead_pre_empts_everything() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::Jumping, 50.0, -300.0, Facing::Right);
        f.dead = true;

        machine.update(&mut f).unwrap();

        assert_eq!(machine.current(), Dead);
        assert_eq!(f.events, vec![HeroEvent::AnimationChanged(Dead)]);
        assert_eq!(machine.transitions_from(Dead).count(), 0);
    }

    #[test]
    fn jump_flip_fall_sequence() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::PreJumping, 0.0, -400.0, Facing::Right);
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Jumping);

        f.vertical = VerticalState::Flipping;
        f.body.velocity.y = -300.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Flipping);

        f.body.velocity.y = 40.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Falling);

        f.vertical = VerticalState::Standing;
        f.body.velocity.y = 0.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Idle);
    }

    #[test]
    fn flip_from_falling_waits_for_apex() {
        let mut machine = build().unwrap();
        let mut f = frame(VerticalState::Falling, 0.0, 80.0, Facing::Right);
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Falling);

        f.vertical = VerticalState::Flipping;
        f.body.velocity.y = -300.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Falling);

        f.body.velocity.y = 0.0;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Flipping);
    }

    #[test]
    fn only_one_hop_per_update() {
        let mut machine = build().unwrap();
        // Standing and moving forward: Idle -> Running this tick, even though
        // the body is also descending.
        let mut f = frame(VerticalState::Standing, 10.0, 5.0, Facing::Right);

        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Running);
        assert_eq!(f.events.len(), 1);

        // Once airborne, Running falls through to its Falling edge.
        f.vertical = VerticalState::Falling;
        machine.update(&mut f).unwrap();
        assert_eq!(machine.current(), Falling);
        assert_eq!(f.events.len(), 2);
    }
}
