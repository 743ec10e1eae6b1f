//! Patrol controller for a secondary actor walking between two bounds.
//!
//! The actor starts paused in `Idle`. Once [`run`](PatrolController::run) is
//! called it walks right, turns around whenever its centre lies strictly past
//! a bound and stops again on [`pause`](PatrolController::pause).

use crate::body::{Body, Facing};
use crate::builder::{BuildError, StateMachineBuilder};
use crate::controller::SetupError;
use crate::machine::{StateHandlers, StateMachine, TransitionError};
use crate::state_enum;
use crate::tuning::{self, PatrolBounds, PatrolTuning};
use std::vec::Drain;
use tracing::debug;

state_enum! {
    /// Walking phase of a patrolling actor.
    pub enum PatrolState {
        Idle,
        ToLeft,
        ToRight,
        Dead,
    }
    final: [Dead]
}

/// Notifications produced by a patrolling actor during a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatrolEvent {
    /// Started walking in the given direction.
    Turned(Facing),
    /// The actor was killed. Emitted once per controller.
    Died,
}

struct PatrolFrame {
    body: Body,
    bounds: PatrolBounds,
    speed: f32,
    paused: bool,
    dead: bool,
    events: Vec<PatrolEvent>,
}

type Handlers = StateHandlers<PatrolState, PatrolFrame>;

fn halt(frame: &mut PatrolFrame) {
    frame.body.velocity.x = 0.0;
}

fn turn(frame: &mut PatrolFrame, facing: Facing) {
    frame.body.facing = facing;
    frame.events.push(PatrolEvent::Turned(facing));
    debug!(?facing, center_x = frame.body.center_x, "patrol turned");
}

fn walk(frame: &mut PatrolFrame) {
    frame.body.velocity.x = frame.body.facing.sign() * frame.speed;
}

fn build() -> Result<StateMachine<PatrolState, PatrolFrame>, BuildError> {
    use PatrolState::*;

    StateMachineBuilder::<PatrolState, PatrolFrame>::new(Idle)
        .named("patrol")
        .state(Idle, Handlers::new().on_enter(|_, frame| halt(frame)))?
        .state(
            ToLeft,
            Handlers::new()
                .on_enter(|_, frame| turn(frame, Facing::Left))
                .on_update(|_, frame| walk(frame)),
        )?
        .state(
            ToRight,
            Handlers::new()
                .on_enter(|_, frame| turn(frame, Facing::Right))
                .on_update(|_, frame| walk(frame)),
        )?
        .state(Dead, Handlers::new().on_enter(|_, frame| halt(frame)))?
        .transitions(&[Idle, ToLeft, ToRight], Dead, |frame| frame.dead)?
        .transitions(&[ToLeft, ToRight], Idle, |frame| frame.paused)?
        .transition(Idle, ToRight, |frame| !frame.paused)?
        .transition(ToLeft, ToRight, |frame| {
            frame.body.center_x < frame.bounds.start_x
        })?
        .transition(ToRight, ToLeft, |frame| {
            frame.body.center_x > frame.bounds.end_x
        })?
        .build()
}

/// Walks a body back and forth between [`PatrolBounds`].
pub struct PatrolController {
    machine: StateMachine<PatrolState, PatrolFrame>,
    frame: PatrolFrame,
}

impl PatrolController {
    pub fn new(bounds: PatrolBounds, tuning: PatrolTuning) -> Result<Self, SetupError> {
        tuning::patrol::check(&bounds, &tuning)?;

        Ok(Self {
            machine: build()?,
            frame: PatrolFrame {
                body: Body::default(),
                bounds,
                speed: tuning.speed,
                paused: true,
                dead: false,
                events: Vec::new(),
            },
        })
    }

    /// Start walking on the next update.
    pub fn run(&mut self) {
        self.frame.paused = false;
    }

    /// Stop on the next update.
    pub fn pause(&mut self) {
        self.frame.paused = true;
    }

    pub fn is_paused(&self) -> bool {
        self.frame.paused
    }

    /// Kill the actor. Returns `true` only for the first call.
    pub fn kill(&mut self) -> bool {
        if self.frame.dead {
            return false;
        }
        self.frame.dead = true;
        self.frame.events.push(PatrolEvent::Died);
        debug!("patrol died");
        true
    }

    pub fn is_dead(&self) -> bool {
        self.frame.dead
    }

    pub fn state(&self) -> PatrolState {
        self.machine.current()
    }

    pub fn bounds(&self) -> PatrolBounds {
        self.frame.bounds
    }

    /// Step the machine for one tick against the host's `body`.
    pub fn update(&mut self, body: &mut Body) -> Result<Drain<'_, PatrolEvent>, TransitionError> {
        self.frame.body = *body;
        self.machine.update(&mut self.frame)?;
        *body = self.frame.body;
        Ok(self.frame.events.drain(..))
    }
}
