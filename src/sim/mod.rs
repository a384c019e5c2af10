//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering, input-device or timing dependencies
//! - Randomness only through an injected `RandomSource`
//! - Never fails or panics inside `advance`

pub mod collision;
pub mod control;
pub mod physics;
pub mod random;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::{paddle_overlap, resolve_paddle_hit, resolve_wall_bounce};
pub use control::{AiTuning, update_ai, update_player};
pub use physics::advance_ball;
pub use random::{FixedRandom, RandomSource};
pub use snapshot::{Snapshot, StatusKey};
pub use state::{Ball, GameEvent, GameState, InputSignals, Lifecycle, Paddle, Phase, Score, Side};
pub use tick::Game;
