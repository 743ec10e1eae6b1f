//! Frame-counted countdown windows.

/// A window of `window` ticks that is re-armed by an event and otherwise
/// runs down to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    window: u32,
    remaining: u32,
}

impl Countdown {
    /// An expired countdown with the given window.
    pub fn new(window: u32) -> Self {
        Self {
            window,
            remaining: 0,
        }
    }

    /// Re-arm when `armed`, otherwise tick down. Called once per tick.
    pub fn refresh(&mut self, armed: bool) {
        if armed {
            self.remaining = self.window;
        } else {
            self.remaining = self.remaining.saturating_sub(1);
        }
    }

    /// Consume the window.
    pub fn clear(&mut self) {
        self.remaining = 0;
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn window(&self) -> u32 {
        self.window
    }
}
