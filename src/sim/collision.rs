//! Collision detection and response
//!
//! Ball vs paddle uses the ball's bounding square against the paddle
//! rectangle. The rebound angle comes from where on the paddle the ball
//! landed, not from the incoming angle.

use super::random::RandomSource;
use super::state::{Ball, Paddle, Side};
use crate::clamp;
use crate::consts::*;

/// AABB overlap between the ball's bounding square and the paddle
pub fn paddle_overlap(ball: &Ball, paddle: &Paddle) -> bool {
    let r = ball.radius;
    !(ball.pos.x + r < paddle.x
        || ball.pos.x - r > paddle.x + paddle.width
        || ball.pos.y + r < paddle.y
        || ball.pos.y - r > paddle.y + paddle.height)
}

/// Normalized impact offset from paddle center, in `[-1, 1]`
#[inline]
pub fn impact_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let half = paddle.height / 2.0;
    clamp((ball.pos.y - paddle.center_y()) / half, -1.0, 1.0)
}

/// Rebound off `paddle` (which belongs to `side`)
///
/// Speeds the ball up by one step, sends it away from the paddle with a
/// little horizontal jitter, and places it flush against the paddle face so
/// the next sub-step does not see it overlapping again.
pub fn resolve_paddle_hit(
    ball: &mut Ball,
    paddle: &Paddle,
    side: Side,
    rng: &mut impl RandomSource,
) {
    let impact = impact_offset(ball, paddle);
    ball.speed = clamp(ball.speed + BALL_SPEED_STEP, BALL_BASE_SPEED, BALL_MAX_SPEED);

    let away = side.opposite().toward();
    let jitter = 0.92 + rng.unit() * 0.08;
    ball.vel.x = away * ball.speed * jitter;
    ball.vel.y = ball.speed * impact * MAX_DEFLECTION;

    ball.pos.x = match side {
        Side::Left => paddle.x + paddle.width + ball.radius,
        Side::Right => paddle.x - ball.radius,
    };
}

/// Elastic bounce off the top/bottom walls. Returns true if the ball touched one.
pub fn resolve_wall_bounce(ball: &mut Ball, arena_height: f32) -> bool {
    let r = ball.radius;
    if ball.pos.y - r <= 0.0 {
        ball.pos.y = r;
        ball.vel.y = ball.vel.y.abs();
        true
    } else if ball.pos.y + r >= arena_height {
        ball.pos.y = arena_height - r;
        ball.vel.y = -ball.vel.y.abs();
        true
    } else {
        false
    }
}
