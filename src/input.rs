//! Per-tick input snapshot merged from every input source.
//!
//! Three sources feed a character: the arrow keys, an alternate key set and
//! the on-screen touch buttons. Keyboard sources are polled by the host and
//! arrive as plain [`KeySet`] values. Touch buttons are written asynchronously
//! by the UI layer into [`VirtualControls`]; their jump press edge is consumed
//! exactly once, when the tick's [`InputSnapshot`] is captured.

use serde::{Deserialize, Serialize};

/// State of one button during a tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonState {
    /// Button is down.
    pub held: bool,
    /// Button went down during this tick.
    pub pressed: bool,
}

impl ButtonState {
    pub const RELEASED: ButtonState = ButtonState {
        held: false,
        pressed: false,
    };

    /// A button that went down this tick.
    pub const fn just_pressed() -> Self {
        Self {
            held: true,
            pressed: true,
        }
    }

    /// A button that has been down since an earlier tick.
    pub const fn held() -> Self {
        Self {
            held: true,
            pressed: false,
        }
    }
}

/// Directional and jump buttons of one input source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySet {
    pub left: bool,
    pub right: bool,
    pub jump: ButtonState,
}

/// Touch-button state shared between the UI layer and the simulation.
///
/// The jump press edge is raised by [`press_jump`](Self::press_jump) and
/// cleared by the single reader, [`InputSnapshot::capture`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VirtualControls {
    left: bool,
    right: bool,
    jump: bool,
    jump_pressed: bool,
}

impl VirtualControls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_left(&mut self) {
        self.left = true;
    }

    pub fn release_left(&mut self) {
        self.left = false;
    }

    pub fn press_right(&mut self) {
        self.right = true;
    }

    pub fn release_right(&mut self) {
        self.right = false;
    }

    pub fn press_jump(&mut self) {
        self.jump = true;
        self.jump_pressed = true;
    }

    pub fn release_jump(&mut self) {
        self.jump = false;
        self.jump_pressed = false;
    }

    /// Whether an unconsumed jump press edge is pending.
    pub fn has_pending_jump(&self) -> bool {
        self.jump_pressed
    }

    fn take(&mut self) -> KeySet {
        KeySet {
            left: self.left,
            right: self.right,
            jump: ButtonState {
                held: self.jump,
                pressed: std::mem::take(&mut self.jump_pressed),
            },
        }
    }
}

/// Everything a controller reads from input during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    pub keyboard: KeySet,
    pub alternate: KeySet,
    pub touch: KeySet,
}

impl InputSnapshot {
    /// Capture the tick's input, consuming the pending touch jump edge.
    ///
    /// Call once per tick and pass the snapshot by reference to every
    /// controller.
    pub fn capture(keyboard: KeySet, alternate: KeySet, touch: &mut VirtualControls) -> Self {
        Self {
            keyboard,
            alternate,
            touch: touch.take(),
        }
    }

    /// Snapshot with a single source, mostly useful in tests and replays.
    pub fn from_keys(keys: KeySet) -> Self {
        Self {
            keyboard: keys,
            ..Self::default()
        }
    }

    fn sources(&self) -> [&KeySet; 3] {
        [&self.keyboard, &self.alternate, &self.touch]
    }

    pub fn left_held(&self) -> bool {
        self.sources().iter().any(|s| s.left)
    }

    pub fn right_held(&self) -> bool {
        self.sources().iter().any(|s| s.right)
    }

    pub fn jump_held(&self) -> bool {
        self.sources().iter().any(|s| s.jump.held)
    }

    /// A jump press began this tick on any source.
    pub fn jump_pressed(&self) -> bool {
        self.sources().iter().any(|s| s.jump.pressed)
    }
}
