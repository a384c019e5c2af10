//! Game settings
//!
//! Tunable defaults for the things that are a matter of feel rather than
//! rules: AI difficulty, the driver's frame-time clamp and the RNG seed.
//! Arena geometry and ball physics stay fixed in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::AiTuning;

/// Largest accepted `max_frame_dt` (seconds)
const MAX_FRAME_DT_LIMIT: f32 = 0.25;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fraction of the gap to the ball the AI closes per frame, in `(0, 1]`
    pub ai_lag_factor: f32,
    /// AI paddle max speed (units/s)
    pub ai_max_speed: f32,
    /// Largest dt the driver feeds to `advance` (seconds)
    pub max_frame_dt: f32,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ai_lag_factor: AI_LAG_FACTOR,
            ai_max_speed: AI_MAX_SPEED,
            max_frame_dt: MAX_FRAME_DT,
            seed: None,
        }
    }
}

impl Settings {
    /// Parse from JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => settings.sanitized(),
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Load from a JSON file, falling back to defaults if it can't be read
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                log::info!("Loaded settings from {}", path.display());
                Self::from_json(&json)
            }
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        // A flat struct of numbers always serializes
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Clamp every field into its valid range
    ///
    /// Values past an upper bound clamp to it. Lower bounds that are open
    /// (or NaN) have no nearest valid value and fall back to the default.
    pub fn sanitized(mut self) -> Self {
        let lag = self.ai_lag_factor;
        if lag > 1.0 {
            log::warn!("ai_lag_factor {} above 1, clamping", lag);
            self.ai_lag_factor = 1.0;
        } else if !(lag > 0.0) {
            log::warn!("ai_lag_factor {} out of range, using {}", lag, AI_LAG_FACTOR);
            self.ai_lag_factor = AI_LAG_FACTOR;
        }

        let speed = self.ai_max_speed;
        let max_ai = PADDLE_SPEED * 2.0;
        if speed.is_nan() {
            log::warn!("ai_max_speed is NaN, using {}", AI_MAX_SPEED);
            self.ai_max_speed = AI_MAX_SPEED;
        } else if !(0.0..=max_ai).contains(&speed) {
            log::warn!("ai_max_speed {} out of range, clamping", speed);
            self.ai_max_speed = crate::clamp(speed, 0.0, max_ai);
        }

        let frame = self.max_frame_dt;
        if frame > MAX_FRAME_DT_LIMIT {
            log::warn!("max_frame_dt {} too large, clamping", frame);
            self.max_frame_dt = MAX_FRAME_DT_LIMIT;
        } else if !(frame > 0.0) {
            log::warn!("max_frame_dt {} out of range, using {}", frame, MAX_FRAME_DT);
            self.max_frame_dt = MAX_FRAME_DT;
        }

        self
    }

    pub fn ai_tuning(&self) -> AiTuning {
        AiTuning {
            lag_factor: self.ai_lag_factor,
            max_speed: self.ai_max_speed,
        }
    }

    /// Clamp a raw frame time into `[0, max_frame_dt]`
    pub fn clamp_frame_dt(&self, dt: f32) -> f32 {
        crate::clamp(dt, 0.0, self.max_frame_dt)
    }
}
