//! Tuning of the player character.

use super::{collect, finite, positive, window, TuningCheck, TuningError, TuningViolation};
use crate::body::Vec2;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;

/// Speeds are magnitudes in pixels per second; the controller applies the
/// upward ones as negative `y` velocity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroTuning {
    /// Horizontal drive while a direction is held.
    pub run_acceleration: f32,
    /// Upward speed applied when a jump starts.
    pub jump_speed: f32,
    /// Upward speed applied by the mid-air flip.
    pub double_jump_speed: f32,
    /// Upward speed a jump is clipped to once the button is released.
    pub jump_release_speed: f32,
    /// Upward speed of the hop played on death.
    pub death_hop_speed: f32,
    /// Ticks after leaving the ground during which a jump is still honoured.
    pub coyote_frames: u32,
    /// Ticks a jump press is remembered before landing.
    pub jump_buffer_frames: u32,
    pub hitbox_offset_left: Vec2,
    pub hitbox_offset_right: Vec2,
}

impl Default for HeroTuning {
    fn default() -> Self {
        Self {
            run_acceleration: 1000.0,
            jump_speed: 400.0,
            double_jump_speed: 300.0,
            jump_release_speed: 150.0,
            death_hop_speed: 250.0,
            coyote_frames: 6,
            jump_buffer_frames: 6,
            hitbox_offset_left: Vec2::new(5.0, 23.0),
            hitbox_offset_right: Vec2::new(12.0, 23.0),
        }
    }
}

impl HeroTuning {
    /// Parse tuning from JSON, filling omitted fields with defaults, and
    /// validate it.
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: HeroTuning = serde_json::from_str(json)?;
        tuning.check()?;
        Ok(tuning)
    }

    /// Run every check, accumulating all violations.
    pub fn validate(&self) -> Vec<TuningCheck> {
        let release = if self.jump_release_speed < self.jump_speed {
            Validation::success(())
        } else {
            Validation::fail(TuningViolation::ReleaseAboveJump {
                release: self.jump_release_speed,
                jump: self.jump_speed,
            })
        };

        vec![
            positive("run_acceleration", self.run_acceleration),
            positive("jump_speed", self.jump_speed),
            positive("double_jump_speed", self.double_jump_speed),
            positive("jump_release_speed", self.jump_release_speed),
            positive("death_hop_speed", self.death_hop_speed),
            window("coyote_frames", self.coyote_frames),
            window("jump_buffer_frames", self.jump_buffer_frames),
            finite("hitbox_offset_left.x", self.hitbox_offset_left.x),
            finite("hitbox_offset_left.y", self.hitbox_offset_left.y),
            finite("hitbox_offset_right.x", self.hitbox_offset_right.x),
            finite("hitbox_offset_right.y", self.hitbox_offset_right.y),
            release,
        ]
    }

    /// Validate and flatten into a `Result`.
    pub fn check(&self) -> Result<(), TuningError> {
        collect(self.validate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(HeroTuning::default().check().is_ok());
    }

    #[test]
    fn every_violation_is_reported() {
        let tuning = HeroTuning {
            jump_speed: 100.0,
            jump_release_speed: 150.0,
            coyote_frames: 0,
            death_hop_speed: f32::INFINITY,
            ..HeroTuning::default()
        };

        match tuning.check() {
            Err(TuningError::Invalid { violations }) => {
                assert_eq!(violations.len(), 3);
                assert!(violations.contains(&TuningViolation::EmptyWindow {
                    field: "coyote_frames"
                }));
                assert!(violations.contains(&TuningViolation::ReleaseAboveJump {
                    release: 150.0,
                    jump: 100.0
                }));
                assert!(violations.contains(&TuningViolation::NotPositive {
                    field: "death_hop_speed",
                    value: f32::INFINITY
                }));
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn from_json_fills_defaults() {
        let tuning = HeroTuning::from_json(r#"{ "run_acceleration": 800.0 }"#).unwrap();

        assert_eq!(tuning.run_acceleration, 800.0);
        assert_eq!(tuning.jump_speed, HeroTuning::default().jump_speed);
        assert_eq!(
            tuning.hitbox_offset_left,
            HeroTuning::default().hitbox_offset_left
        );
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let result = HeroTuning::from_json("{ not json");
        assert!(matches!(result, Err(TuningError::Parse(_))));
    }

    #[test]
    fn tuning_roundtrips_through_json() {
        let tuning = HeroTuning {
            coyote_frames: 9,
            ..HeroTuning::default()
        };
        let json = serde_json::to_string(&tuning).unwrap();
        assert_eq!(HeroTuning::from_json(&json).unwrap(), tuning);
    }
}
