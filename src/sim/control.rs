//! Paddle controllers
//!
//! The human paddle follows the input signals; the AI paddle chases the ball
//! with a deliberate lag so it can be beaten. Both move through
//! [`Paddle::move_toward`], which keeps them inside the arena.

use super::state::{Ball, InputSignals, Paddle};
use crate::clamp;
use crate::consts::*;

/// AI difficulty knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTuning {
    /// Fraction of the gap to the ball closed per frame, in `(0, 1]`
    pub lag_factor: f32,
    /// Max vertical speed (units/s)
    pub max_speed: f32,
}

impl Default for AiTuning {
    fn default() -> Self {
        Self {
            lag_factor: AI_LAG_FACTOR,
            max_speed: AI_MAX_SPEED,
        }
    }
}

/// Drive the human paddle from the held input
///
/// An active pointer wins over the keys and is tracked directly at full
/// paddle speed. Otherwise up/down give a constant direction; both or neither
/// held means no motion.
pub fn update_player(paddle: &mut Paddle, input: &InputSignals, dt: f32) {
    if input.pointer_active {
        let target = input.pointer_y - paddle.height / 2.0;
        paddle.move_toward(target, paddle.speed, dt);
        return;
    }

    let mut dir = 0.0;
    if input.up {
        dir -= 1.0;
    }
    if input.down {
        dir += 1.0;
    }
    // Any target beyond one step's reach gives a full-speed step
    let target = paddle.y + dir * ARENA_HEIGHT;
    paddle.move_toward(target, paddle.speed, dt);
}

/// Drive the AI paddle toward the ball with damped pursuit
pub fn update_ai(paddle: &mut Paddle, ball: &Ball, tuning: &AiTuning, dt: f32) {
    let target = ball.pos.y - paddle.height / 2.0;
    let predicted = paddle.y + (target - paddle.y) * tuning.lag_factor;
    let max_step = tuning.max_speed * dt;
    let delta = clamp(predicted - paddle.y, -max_step, max_step);
    paddle.move_toward(paddle.y + delta, tuning.max_speed, dt);
}
