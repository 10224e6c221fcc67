//! Serde-backed configuration for splines and agents.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrackError};
use crate::policy::{DriveMode, InterpolationPolicy};
use crate::tolerance::Tolerance;

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| TrackError::Config(e.to_string()))
}

/// Settings a spline is created with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineConfig {
    pub interpolation: InterpolationPolicy,
    /// Treat the last control point as a duplicate of the first in linear indexing.
    pub closed: bool,
    pub tolerance: Tolerance,
}

impl SplineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            interpolation: InterpolationPolicy::default(),
            closed: true,
            tolerance: Tolerance::default(),
        }
    }
}

/// Settings a moving agent is created with.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub start_time: f64,
    /// Bezier segments travelled per second.
    pub speed: f64,
    pub drive_mode: DriveMode,
    pub scale: f64,
    /// Progress offset used to sample the linear heading ahead of a vertex.
    pub heading_lookahead: f64,
}

impl AgentConfig {
    pub const DEFAULT_SCALE: f64 = 0.7;
    pub const DEFAULT_HEADING_LOOKAHEAD: f64 = 0.001;

    pub fn from_json(json: &str) -> Result<Self> {
        from_json(json)
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            speed: 1.0,
            drive_mode: DriveMode::default(),
            scale: Self::DEFAULT_SCALE,
            heading_lookahead: Self::DEFAULT_HEADING_LOOKAHEAD,
        }
    }
}
