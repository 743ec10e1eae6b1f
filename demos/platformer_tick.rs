//! Platformer Tick Loop
//!
//! This example drives the layered hero controller from a scripted input
//! track with a toy integrator standing in for the host's physics.
//!
//! Key concepts:
//! - Building the input snapshot once per tick
//! - Lending the host-owned body to the controller
//! - Reacting to animation and death events
//!
//! Run with: cargo run --example platformer_tick
//! Set RUST_LOG=layered_fsm=trace to see every transition.

use layered_fsm::body::Body;
use layered_fsm::controller::{HeroController, HeroEvent, SetupError};
use layered_fsm::input::{ButtonState, InputSnapshot, KeySet, VirtualControls};
use layered_fsm::tuning::{frames_for, HeroTuning};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TICK_HZ: u32 = 60;
const GRAVITY: f32 = 1200.0;
const MAX_RUN_SPEED: f32 = 160.0;

fn keys_for(tick: u32) -> KeySet {
    KeySet {
        left: (90..130).contains(&tick),
        right: (10..90).contains(&tick),
        jump: match tick {
            20 | 35 => ButtonState::just_pressed(),
            21..=28 => ButtonState::held(),
            _ => ButtonState::RELEASED,
        },
    }
}

fn main() -> Result<(), SetupError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Platformer Tick Loop ===\n");

    let tuning = HeroTuning {
        coyote_frames: frames_for(Duration::from_millis(100), TICK_HZ),
        jump_buffer_frames: frames_for(Duration::from_millis(100), TICK_HZ),
        ..HeroTuning::default()
    };
    let mut hero = HeroController::new(tuning)?;
    let mut touch = VirtualControls::new();
    let mut body = Body {
        on_floor: true,
        ..Body::at(0.0)
    };
    let mut y = 0.0_f32;
    let dt = 1.0 / TICK_HZ as f32;

    for tick in 0..200 {
        if tick == 150 {
            touch.press_jump();
        }
        if tick == 152 {
            touch.release_jump();
        }
        let input = InputSnapshot::capture(keys_for(tick), KeySet::default(), &mut touch);

        if tick == 190 && hero.kill() {
            println!("[{tick:>3}] hero killed");
        }

        let events = hero
            .update(&input, &mut body)
            .expect("machines are fully registered");
        for event in events {
            match event {
                HeroEvent::AnimationChanged(animation) => {
                    println!("[{tick:>3}] animation -> {animation:?} (x = {:.1})", body.center_x)
                }
                HeroEvent::Died => println!("[{tick:>3}] died"),
            }
        }

        body.velocity.x = (body.velocity.x + body.acceleration_x * dt)
            .clamp(-MAX_RUN_SPEED, MAX_RUN_SPEED);
        if body.acceleration_x == 0.0 && body.on_floor {
            body.velocity.x = 0.0;
        }
        body.velocity.y += GRAVITY * dt;
        body.center_x += body.velocity.x * dt;
        y += body.velocity.y * dt;
        body.on_floor = y >= 0.0 && body.collide_world_bounds;
        if body.on_floor {
            y = 0.0;
            body.velocity.y = 0.0;
        }
    }

    println!(
        "\nFinal: horizontal {:?}, vertical {:?}, animation {:?}",
        hero.horizontal_state(),
        hero.vertical_state(),
        hero.animation_state()
    );
    Ok(())
}
