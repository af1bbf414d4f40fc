use serde::{Deserialize, Serialize};

/// Tuning shared by every tween driven through a `TweenState`.
/// Loaded from JSON or built from `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TweenConfig {
    /// Fixed timestep in seconds used by `TweenState::advance` (default: 1/60).
    pub fixed_dt: f32,
    /// Upper bound on fixed steps run for a single frame (default: 10).
    pub max_steps_per_frame: u32,
    /// Canvas group fades finish once |alpha - end| drops to this (default: 0.02).
    pub alpha_tolerance: f32,
    /// Positions closer than this are considered equal (default: 1e-5).
    pub position_epsilon: f32,
    /// RGBA colors closer than this are considered equal (default: 1e-5).
    pub color_epsilon: f32,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            alpha_tolerance: 0.02,
            position_epsilon: 1e-5,
            color_epsilon: 1e-5,
        }
    }
}

impl TweenConfig {
    /// Parse a config from a JSON string. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_fixed_dt(mut self, fixed_dt: f32) -> Self {
        self.fixed_dt = fixed_dt;
        self
    }

    pub fn with_alpha_tolerance(mut self, tolerance: f32) -> Self {
        self.alpha_tolerance = tolerance;
        self
    }
}
