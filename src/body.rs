//! Controller-side view of a physics body.
//!
//! The host owns one [`Body`] per actor in its own registry, fills in the
//! collision results before a tick, lends it to the actor's controller and
//! applies whatever the controller wrote back. Integration and collision
//! resolution stay on the host side.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Horizontal direction a sprite faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Direction of a horizontal velocity, `None` when it is exactly zero.
    pub fn of(x: f32) -> Option<Facing> {
        if x < 0.0 {
            Some(Facing::Left)
        } else if x > 0.0 {
            Some(Facing::Right)
        } else {
            None
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Left => Facing::Right,
            Facing::Right => Facing::Left,
        }
    }

    /// `-1.0` for left, `1.0` for right.
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }

    /// Whether the sprite should be mirrored.
    pub fn flip_x(self) -> bool {
        self == Facing::Left
    }
}

/// Kinematic state exchanged between the host and a controller each tick.
///
/// Screen coordinates: negative `y` velocity points up.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub velocity: Vec2,
    pub acceleration_x: f32,
    pub facing: Facing,
    pub hitbox_offset: Vec2,
    pub collide_world_bounds: bool,
    /// Resting on a floor after the host's last collision pass.
    pub on_floor: bool,
    /// Horizontal centre of the bounding box.
    pub center_x: f32,
}

impl Body {
    /// A resting body centred at `center_x`.
    pub fn at(center_x: f32) -> Self {
        Self {
            center_x,
            ..Self::default()
        }
    }
}

impl Default for Body {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            acceleration_x: 0.0,
            facing: Facing::Right,
            hitbox_offset: Vec2::ZERO,
            collide_world_bounds: true,
            on_floor: false,
            center_x: 0.0,
        }
    }
}
