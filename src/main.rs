//! Neon Pong headless driver
//!
//! Plays a short match between the AI and a scripted pointer-following
//! stand-in for the human, then prints the final snapshot as JSON. Useful
//! for smoke-testing the engine and tuning the AI from the command line:
//!
//! ```text
//! RUST_LOG=debug neon-pong [settings.json]
//! ```

use std::path::PathBuf;

use neon_pong::sim::{Game, GameEvent, InputSignals};
use neon_pong::Settings;

/// Simulated display refresh (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Length of the demo match
const MATCH_SECONDS: u32 = 90;

fn main() {
    env_logger::init();
    log::info!("Neon Pong (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load(&path),
        None => Settings::default(),
    };

    let mut game = Game::new(&settings);
    let frames = MATCH_SECONDS * 60;

    for frame in 0..frames {
        // Every few seconds the stand-in stalls, like a dropped frame
        let raw_dt = if frame % 300 == 299 { 0.2 } else { FRAME_DT };
        let dt = settings.clamp_frame_dt(raw_dt);

        let ball_y = game.state.ball.pos.y;
        game.set_input(InputSignals {
            pointer_active: true,
            pointer_y: ball_y,
            ..Default::default()
        });

        let snapshot = game.advance(dt);
        for event in game.events() {
            if let GameEvent::Scored(side) = event {
                log::info!(
                    "[{:>5.1}s] {:?} scores, {} : {}",
                    frame as f32 * FRAME_DT,
                    side,
                    snapshot.score.left,
                    snapshot.score.right
                );
            }
        }
    }

    let snapshot = game.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize snapshot: {}", e),
    }
}
