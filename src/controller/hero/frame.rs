//! Per-tick context shared by the hero's three machines.

use super::animation::AnimationState;
use super::vertical::VerticalState;
use crate::body::{Body, Facing};
use crate::controller::Countdown;
use crate::input::InputSnapshot;
use crate::tuning::HeroTuning;

/// Notifications produced by the hero during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeroEvent {
    /// The animation layer changed; the host selects the matching clip.
    AnimationChanged(AnimationState),
    /// The hero was killed. Emitted once per controller.
    Died,
}

/// Everything guards read and handlers write during one tick.
///
/// The vertical state is copied in after that layer's update so the animation
/// layer sees this tick's value. Horizontal drive reaches it through
/// `body.facing`.
pub(crate) struct HeroFrame {
    pub(crate) tuning: HeroTuning,
    pub(crate) input: InputSnapshot,
    pub(crate) body: Body,
    pub(crate) dead: bool,
    pub(crate) grounded_grace: Countdown,
    pub(crate) jump_buffer: Countdown,
    pub(crate) vertical: VerticalState,
    pub(crate) events: Vec<HeroEvent>,
}

impl HeroFrame {
    pub(crate) fn new(tuning: HeroTuning) -> Self {
        Self {
            tuning,
            input: InputSnapshot::default(),
            body: Body::default(),
            dead: false,
            grounded_grace: Countdown::new(tuning.coyote_frames),
            jump_buffer: Countdown::new(tuning.jump_buffer_frames),
            vertical: VerticalState::Standing,
            events: Vec::new(),
        }
    }

    pub(crate) fn begin(&mut self, input: &InputSnapshot, body: &Body) {
        self.input = *input;
        self.body = *body;
    }

    pub(crate) fn refresh_countdowns(&mut self) {
        self.grounded_grace.refresh(self.body.on_floor);
        self.jump_buffer.refresh(self.input.jump_pressed());
    }

    /// Direction the hero is actually moving in, if any.
    pub(crate) fn moving(&self) -> Option<Facing> {
        Facing::of(self.body.velocity.x)
    }

    pub(crate) fn standing(&self) -> bool {
        self.vertical == VerticalState::Standing
    }
}
