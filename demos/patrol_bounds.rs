//! Patrol Between Bounds
//!
//! This example walks a patrolling actor back and forth, pauses it, resumes
//! it and finally kills it.
//!
//! Run with: cargo run --example patrol_bounds

use layered_fsm::body::Body;
use layered_fsm::controller::{PatrolController, PatrolEvent, SetupError};
use layered_fsm::tuning::{PatrolBounds, PatrolTuning};

fn main() -> Result<(), SetupError> {
    tracing_subscriber::fmt().init();

    println!("=== Patrol Between Bounds ===\n");

    let tuning = PatrolTuning::from_json(r#"{ "speed": 80.0 }"#)?;
    let mut patrol = PatrolController::new(PatrolBounds::new(32.0, 160.0), tuning)?;
    let mut body = Body::at(96.0);
    let dt = 1.0 / 60.0;

    patrol.run();
    for tick in 0..600 {
        match tick {
            240 => patrol.pause(),
            300 => patrol.run(),
            540 => {
                patrol.kill();
            }
            _ => {}
        }

        for event in patrol.update(&mut body).expect("machine is fully registered") {
            match event {
                PatrolEvent::Turned(facing) => {
                    println!("[{tick:>3}] turned {facing:?} at x = {:.1}", body.center_x)
                }
                PatrolEvent::Died => println!("[{tick:>3}] died at x = {:.1}", body.center_x),
            }
        }
        body.center_x += body.velocity.x * dt;
    }

    println!("\nFinal state: {:?}", patrol.state());
    Ok(())
}
