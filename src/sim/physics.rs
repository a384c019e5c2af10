//! Sub-stepped ball integration
//!
//! A frame's dt is sliced into steps of at most `MAX_SUBSTEP` so a ball at
//! top speed moves far less than a paddle's width per step.

use super::collision::{paddle_overlap, resolve_paddle_hit, resolve_wall_bounce};
use super::random::RandomSource;
use super::state::{Ball, GameEvent, Paddle, Side};
use crate::consts::*;

/// Move the ball through `dt` seconds against both paddles
///
/// Collision events are appended to `events`. Returns the scoring side if
/// the ball left the arena; integration stops at that point.
pub fn advance_ball(
    ball: &mut Ball,
    dt: f32,
    left: &Paddle,
    right: &Paddle,
    rng: &mut impl RandomSource,
    events: &mut Vec<GameEvent>,
) -> Option<Side> {
    let mut remaining = dt;

    while remaining > 0.0 {
        let step = remaining.min(MAX_SUBSTEP);
        remaining -= step;

        ball.pos += ball.vel * step;

        if resolve_wall_bounce(ball, ARENA_HEIGHT) {
            events.push(GameEvent::WallBounce);
        }

        // A paddle hit intercepts the ball before it can leave this step
        if paddle_overlap(ball, left) {
            resolve_paddle_hit(ball, left, Side::Left, rng);
            events.push(GameEvent::PaddleHit(Side::Left));
            continue;
        }
        if paddle_overlap(ball, right) {
            resolve_paddle_hit(ball, right, Side::Right, rng);
            events.push(GameEvent::PaddleHit(Side::Right));
            continue;
        }

        if let Some(exit) = ball.exited() {
            return Some(exit.opposite());
        }
    }

    None
}
