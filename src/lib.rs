//! Neon Pong - a classic two-paddle arena game
//!
//! Core modules:
//! - `sim`: Simulation engine (physics, collisions, AI, game lifecycle)
//! - `settings`: Tunable defaults (AI difficulty, frame clamp, seed)
//!
//! Rendering, input decoding and frame scheduling live outside this crate.
//! They talk to the engine through [`sim::Game`] and read [`sim::Snapshot`].

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Game, GameEvent, InputSignals, Lifecycle, Side, Snapshot, StatusKey};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (logical units, independent of output resolution)
    pub const ARENA_WIDTH: f32 = 1200.0;
    pub const ARENA_HEIGHT: f32 = 720.0;

    /// Paddle defaults (shared by both sides)
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 120.0;
    pub const PADDLE_SPEED: f32 = 560.0;
    /// Gap between each paddle and its side wall
    pub const PADDLE_INSET: f32 = 34.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_BASE_SPEED: f32 = 350.0;
    pub const BALL_MAX_SPEED: f32 = 760.0;
    /// Speed added on every paddle hit
    pub const BALL_SPEED_STEP: f32 = 24.0;
    /// Vertical share of speed at a full edge hit
    pub const MAX_DEFLECTION: f32 = 0.9;

    /// Largest physics slice; keeps fast balls from skipping a paddle
    pub const MAX_SUBSTEP: f32 = 1.0 / 240.0;

    /// Countdown before a served ball goes live (seconds)
    pub const SERVE_DELAY: f32 = 0.8;

    /// AI defaults (tuned by feel, see `Settings`)
    pub const AI_LAG_FACTOR: f32 = 0.15;
    pub const AI_MAX_SPEED: f32 = 470.0;

    /// Upper bound for a single frame's dt, applied by the driver
    pub const MAX_FRAME_DT: f32 = 0.04;
}

/// Bound `value` to `[min, max]`. Callers guarantee `min <= max`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.max(min).min(max)
}
