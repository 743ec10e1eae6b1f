//! Controller tuning: defaults, loading and validation.
//!
//! Tuning values are plain `serde` structs. Validation uses Stillwater's
//! `Validation` so that every rejected field is reported in one pass instead
//! of stopping at the first.
//!
//! # Frame windows
//!
//! Countdown windows (coyote time, jump buffer) are counted in ticks. A host
//! with a fixed timestep can use them as-is. A host with a variable timestep
//! should derive them from wall-clock durations with [`frames_for`] at its
//! nominal tick rate and keep the simulation step fixed.
//!
//! # Example
//!
//! ```rust
//! use layered_fsm::tuning::HeroTuning;
//!
//! let tuning = HeroTuning::from_json(r#"{ "jump_speed": 420.0, "coyote_frames": 8 }"#).unwrap();
//! assert_eq!(tuning.coyote_frames, 8);
//! assert_eq!(tuning.jump_buffer_frames, HeroTuning::default().jump_buffer_frames);
//!
//! let rejected = HeroTuning::from_json(r#"{ "jump_speed": -1.0, "coyote_frames": 0 }"#);
//! assert!(rejected.is_err());
//! ```

pub mod hero;
pub mod patrol;
pub mod violations;

pub use hero::HeroTuning;
pub use patrol::{PatrolBounds, PatrolTuning};
pub use violations::{TuningError, TuningViolation};

use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking one or more tuning values.
pub type TuningCheck = Validation<(), NonEmptyVec<TuningViolation>>;

/// Number of whole ticks covering `window` at `tick_hz`, never less than one.
pub fn frames_for(window: Duration, tick_hz: u32) -> u32 {
    let frames = (window.as_secs_f64() * f64::from(tick_hz)).round();
    if frames < 1.0 {
        1
    } else if frames > f64::from(u32::MAX) {
        u32::MAX
    } else {
        frames as u32
    }
}

pub(crate) fn positive(field: &'static str, value: f32) -> TuningCheck {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(TuningViolation::NotPositive { field, value })
    }
}

pub(crate) fn finite(field: &'static str, value: f32) -> TuningCheck {
    if value.is_finite() {
        Validation::success(())
    } else {
        Validation::fail(TuningViolation::NotFinite { field, value })
    }
}

pub(crate) fn window(field: &'static str, frames: u32) -> TuningCheck {
    if frames > 0 {
        Validation::success(())
    } else {
        Validation::fail(TuningViolation::EmptyWindow { field })
    }
}

/// Accumulate every check, then flatten into a `Result`.
pub(crate) fn collect(checks: Vec<TuningCheck>) -> Result<(), TuningError> {
    match Validation::all_vec(checks).map(|_| ()) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(violations) => {
            let violations: Vec<TuningViolation> = violations.iter().cloned().collect();
            tracing::warn!(count = violations.len(), "tuning rejected");
            Err(TuningError::Invalid { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_for_rounds_to_whole_ticks() {
        assert_eq!(frames_for(Duration::from_millis(100), 60), 6);
        assert_eq!(frames_for(Duration::from_millis(100), 144), 14);
        assert_eq!(frames_for(Duration::from_millis(1), 60), 1);
        assert_eq!(frames_for(Duration::ZERO, 60), 1);
    }

    #[test]
    fn collect_reports_every_violation() {
        let result = collect(vec![
            positive("a", -1.0),
            positive("b", 2.0),
            window("c", 0),
            finite("d", f32::NAN),
        ]);

        match result {
            Err(TuningError::Invalid { violations }) => {
                assert_eq!(violations.len(), 3);
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TuningViolation::NotPositive { field: "a", .. })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TuningViolation::EmptyWindow { field: "c" })));
                assert!(violations
                    .iter()
                    .any(|v| matches!(v, TuningViolation::NotFinite { field: "d", .. })));
            }
            other => panic!("expected violations, got {other:?}"),
        }
    }

    #[test]
    fn collect_accepts_passing_checks() {
        assert!(collect(vec![positive("a", 1.0), window("b", 3)]).is_ok());
    }
}
