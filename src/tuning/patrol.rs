//! Tuning of patrolling actors.

use super::{collect, finite, positive, TuningCheck, TuningError, TuningViolation};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolTuning {
    /// Horizontal walking speed.
    pub speed: f32,
}

impl Default for PatrolTuning {
    fn default() -> Self {
        Self { speed: 50.0 }
    }
}

impl PatrolTuning {
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: PatrolTuning = serde_json::from_str(json)?;
        collect(tuning.validate())?;
        Ok(tuning)
    }

    pub fn validate(&self) -> Vec<TuningCheck> {
        vec![positive("speed", self.speed)]
    }
}

/// Horizontal interval a patrolling actor walks between.
///
/// The actor turns around once its centre lies strictly past a bound.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PatrolBounds {
    pub start_x: f32,
    pub end_x: f32,
}

impl PatrolBounds {
    pub fn new(start_x: f32, end_x: f32) -> Self {
        Self { start_x, end_x }
    }

    pub fn validate(&self) -> Vec<TuningCheck> {
        let ordered = if self.start_x <= self.end_x {
            Validation::success(())
        } else {
            Validation::fail(TuningViolation::InvertedBounds {
                start_x: self.start_x,
                end_x: self.end_x,
            })
        };

        vec![
            finite("start_x", self.start_x),
            finite("end_x", self.end_x),
            ordered,
        ]
    }
}

/// Validate bounds and tuning together.
pub fn check(bounds: &PatrolBounds, tuning: &PatrolTuning) -> Result<(), TuningError> {
    let mut checks = bounds.validate();
    checks.extend(tuning.validate());
    collect(checks)
}
