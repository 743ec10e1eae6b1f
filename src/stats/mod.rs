//! Game-wide stats shown by the host's status bar.
//!
//! [`GameStats`] is a small observable value object: every setter that
//! actually changes a value dispatches a [`GameStatsUpdate`] snapshot to all
//! registered listeners. Numeric values arrive as `f64` measurements and are
//! validated when assigned; a rejected value leaves the previous one in place.

use serde::{Deserialize, Serialize};
use tracing::warn;

pub mod error;

pub use error::StatsError;

/// Overall state of a play session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    #[default]
    Paused,
    Running,
    Finished,
    HeroDead,
}

/// Immutable snapshot handed to listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatsUpdate {
    pub status: GameStatus,
    pub hero_has_key: bool,
    pub elapsed_time_ms: u64,
    pub fps: u32,
}

impl GameStatsUpdate {
    /// Render the snapshot as JSON for telemetry.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Handle returned by [`GameStats::add_listener`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&GameStatsUpdate) + Send>;

pub struct GameStats {
    status: GameStatus,
    hero_has_key: bool,
    elapsed_time_ms: u64,
    fps: u32,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl GameStats {
    pub fn new(
        status: GameStatus,
        hero_has_key: bool,
        elapsed_time_ms: f64,
        fps: f64,
    ) -> Result<Self, StatsError> {
        Ok(Self {
            status,
            hero_has_key,
            elapsed_time_ms: whole("elapsed_time_ms", elapsed_time_ms, U64_LIMIT)? as u64,
            fps: whole("fps", fps, U32_LIMIT)? as u32,
            listeners: Vec::new(),
            next_listener: 0,
        })
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn hero_has_key(&self) -> bool {
        self.hero_has_key
    }

    pub fn elapsed_time_ms(&self) -> u64 {
        self.elapsed_time_ms
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn snapshot(&self) -> GameStatsUpdate {
        GameStatsUpdate {
            status: self.status,
            hero_has_key: self.hero_has_key,
            elapsed_time_ms: self.elapsed_time_ms,
            fps: self.fps,
        }
    }

    pub fn set_status(&mut self, status: GameStatus) {
        if self.status != status {
            self.status = status;
            self.dispatch();
        }
    }

    pub fn set_hero_has_key(&mut self, has_key: bool) {
        if self.hero_has_key != has_key {
            self.hero_has_key = has_key;
            self.dispatch();
        }
    }

    pub fn set_elapsed_time_ms(&mut self, value: f64) -> Result<(), StatsError> {
        let value = whole("elapsed_time_ms", value, U64_LIMIT)
            .inspect_err(|error| warn!(%error, "rejected stats value"))? as u64;
        if self.elapsed_time_ms != value {
            self.elapsed_time_ms = value;
            self.dispatch();
        }
        Ok(())
    }

    pub fn set_fps(&mut self, value: f64) -> Result<(), StatsError> {
        let value = whole("fps", value, U32_LIMIT)
            .inspect_err(|error| warn!(%error, "rejected stats value"))? as u32;
        if self.fps != value {
            self.fps = value;
            self.dispatch();
        }
        Ok(())
    }

    /// Register a listener called with a snapshot after every change.
    pub fn add_listener<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GameStatsUpdate) + Send + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(registered, _)| *registered != id);
        self.listeners.len() != before
    }

    pub fn remove_all_listeners(&mut self) {
        self.listeners.clear();
    }

    fn dispatch(&mut self) {
        let update = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&update);
        }
    }
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            status: GameStatus::default(),
            hero_has_key: false,
            elapsed_time_ms: 0,
            fps: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }
}

impl std::fmt::Debug for GameStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameStats")
            .field("status", &self.status)
            .field("hero_has_key", &self.hero_has_key)
            .field("elapsed_time_ms", &self.elapsed_time_ms)
            .field("fps", &self.fps)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// 2^64 and 2^32. `u64::MAX as f64` rounds up to 2^64, so the bounds are exclusive.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;
const U32_LIMIT: f64 = 4_294_967_296.0;

/// A non-negative whole number below `limit`.
fn whole(field: &'static str, value: f64, limit: f64) -> Result<f64, StatsError> {
    if !value.is_finite() {
        Err(StatsError::NotFinite { field, value })
    } else if value < 0.0 {
        Err(StatsError::Negative { field, value })
    } else if value.fract() != 0.0 {
        Err(StatsError::NotInteger { field, value })
    } else if value >= limit {
        Err(StatsError::OutOfRange { field, value })
    } else {
        Ok(value)
    }
}
