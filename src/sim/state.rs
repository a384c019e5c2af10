//! Game state and core simulation types
//!
//! Plain data for the two paddles, the ball, the score and the held input
//! signals. [`GameState`] bundles them into the single context the engine
//! threads through every component.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::clamp;
use crate::consts::*;

/// Which side of the arena (and which paddle)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human-controlled paddle
    Left,
    /// AI-controlled paddle
    Right,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign of travel toward this side
    pub fn toward(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// High-level mode of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    /// Not yet started; the next frame serves
    Idle,
    /// Ball parked at center, countdown running
    Serving,
    /// Ball live
    Playing,
    /// Frozen by the pause toggle
    Paused,
}

/// A vertical paddle. `x` is fixed, `y` is the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Max vertical speed (units/s)
    pub speed: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let x = match side {
            Side::Left => PADDLE_INSET,
            Side::Right => ARENA_WIDTH - PADDLE_INSET - PADDLE_WIDTH,
        };
        Self {
            x,
            y: Self::centered_y(),
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }

    /// Top edge that vertically centers a paddle in the arena
    pub fn centered_y() -> f32 {
        ARENA_HEIGHT / 2.0 - PADDLE_HEIGHT / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        ARENA_HEIGHT - self.height
    }

    /// Step toward `target_y` at no more than `max_speed`, then clamp into the arena
    pub fn move_toward(&mut self, target_y: f32, max_speed: f32, dt: f32) {
        let max_step = max_speed * dt;
        let step = clamp(target_y - self.y, -max_step, max_step);
        self.y = clamp(self.y + step, 0.0, self.max_y());
    }
}

/// The ball. `pos` is the center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Current rally speed; only paddle hits change it
    pub speed: f32,
    pub radius: f32,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: arena_center(),
            vel: Vec2::new(BALL_BASE_SPEED, BALL_BASE_SPEED * 0.22),
            speed: BALL_BASE_SPEED,
            radius: BALL_RADIUS,
        }
    }
}

impl Ball {
    /// Park at center with a fresh serve heading toward `toward`
    pub fn serve(&mut self, toward: Side, rng: &mut impl RandomSource) {
        let magnitude = rng.unit() * 0.7 + 0.2;
        let sign = if rng.unit() > 0.5 { 1.0 } else { -1.0 };
        self.pos = arena_center();
        self.speed = BALL_BASE_SPEED;
        self.vel = Vec2::new(self.speed * toward.toward(), self.speed * magnitude * sign);
    }

    /// Fully outside the arena on the left or right
    pub fn exited(&self) -> Option<Side> {
        if self.pos.x < -self.radius {
            Some(Side::Left)
        } else if self.pos.x > ARENA_WIDTH + self.radius {
            Some(Side::Right)
        } else {
            None
        }
    }
}

#[inline]
pub fn arena_center() -> Vec2 {
    Vec2::new(ARENA_WIDTH / 2.0, ARENA_HEIGHT / 2.0)
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Something that happened during a frame (for audio/visual feedback)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball relaunched from center toward this side
    Served(Side),
    PaddleHit(Side),
    WallBounce,
    /// This side won the point
    Scored(Side),
}

/// Logical input from the external input source
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputSignals {
    pub up: bool,
    pub down: bool,
    /// A touch/pointer drag is steering the paddle
    pub pointer_active: bool,
    /// Arena-space y of the pointer
    pub pointer_y: f32,
}

impl Default for InputSignals {
    fn default() -> Self {
        Self {
            up: false,
            down: false,
            pointer_active: false,
            pointer_y: ARENA_HEIGHT / 2.0,
        }
    }
}

/// Where the game is in its serve/play cycle (pause is tracked separately)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Serving { timer: f32 },
    Playing,
}

/// Everything a single match owns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: Phase,
    pub paused: bool,
    pub score: Score,
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub input: InputSignals,
    /// Side the next serve heads toward
    pub serve_toward: Side,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            paused: false,
            score: Score::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            ball: Ball::default(),
            input: InputSignals::default(),
            serve_toward: Side::Right,
        }
    }
}

impl GameState {
    pub fn lifecycle(&self) -> Lifecycle {
        if self.paused {
            return Lifecycle::Paused;
        }
        match self.phase {
            Phase::Idle => Lifecycle::Idle,
            Phase::Serving { .. } => Lifecycle::Serving,
            Phase::Playing => Lifecycle::Playing,
        }
    }
}
