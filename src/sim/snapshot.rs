//! Read-only view handed to the renderer and status display

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Lifecycle, Score};

/// Status line identifier; wording and localization are up to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKey {
    /// Fresh game, nothing pressed yet
    Ready,
    Restarted,
    /// Resumed while a serve is still pending
    LetsGo,
    Running,
    Paused,
    /// A point was just scored, next serve counting down
    Point,
}

impl StatusKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Ready => "status.ready",
            StatusKey::Restarted => "status.restarted",
            StatusKey::LetsGo => "status.lets_go",
            StatusKey::Running => "status.running",
            StatusKey::Paused => "status.paused",
            StatusKey::Point => "status.point",
        }
    }
}

/// Per-frame snapshot of everything a renderer needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub left_paddle_y: f32,
    pub right_paddle_y: f32,
    pub ball: Vec2,
    pub score: Score,
    pub lifecycle: Lifecycle,
    pub status: StatusKey,
}

impl Snapshot {
    pub fn capture(state: &GameState, status: StatusKey) -> Self {
        Self {
            left_paddle_y: state.left.y,
            right_paddle_y: state.right.y,
            ball: state.ball.pos,
            score: state.score,
            lifecycle: state.lifecycle(),
            status,
        }
    }
}
