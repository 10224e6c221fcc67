//! Agents that lap a spline forever, turning wall time into a pose.

use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};
use track_core::error::{Result, TrackError};
use track_core::{AgentConfig, DriveMode};
use track_math::{Point2, Vector2};
use track_spline::Spline;

use crate::ids::CurveId;
use crate::pose::Pose;

/// A moving entity riding a curve it does not own.
///
/// The agent keeps only scalars and the handle of its curve; every query takes
/// the curve explicitly and leaves it untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AgentRepr")]
pub struct MotionAgent {
    curve: CurveId,
    start_time: f64,
    /// Bezier segments per second.
    speed: f64,
    drive_mode: DriveMode,
    scale: f64,
    heading_lookahead: f64,
}

/// Unchecked wire form; loading goes through [`check_speed`] like construction does.
#[derive(Deserialize)]
struct AgentRepr {
    curve: CurveId,
    start_time: f64,
    speed: f64,
    drive_mode: DriveMode,
    scale: f64,
    heading_lookahead: f64,
}

impl TryFrom<AgentRepr> for MotionAgent {
    type Error = TrackError;

    fn try_from(repr: AgentRepr) -> Result<Self> {
        check_speed(repr.speed)?;
        Ok(Self {
            curve: repr.curve,
            start_time: repr.start_time,
            speed: repr.speed,
            drive_mode: repr.drive_mode,
            scale: repr.scale,
            heading_lookahead: repr.heading_lookahead,
        })
    }
}

fn check_speed(speed: f64) -> Result<()> {
    if speed.is_finite() && speed > 0.0 {
        Ok(())
    } else {
        Err(TrackError::InvalidOperation(format!(
            "agent speed must be positive and finite, got {speed}"
        )))
    }
}

impl MotionAgent {
    pub fn new(curve: CurveId, start_time: f64, drive_mode: DriveMode, speed: f64) -> Result<Self> {
        Self::from_config(
            curve,
            &AgentConfig {
                start_time,
                drive_mode,
                speed,
                ..AgentConfig::default()
            },
        )
    }

    pub fn from_config(curve: CurveId, config: &AgentConfig) -> Result<Self> {
        check_speed(config.speed)?;
        Ok(Self {
            curve,
            start_time: config.start_time,
            speed: config.speed,
            drive_mode: config.drive_mode,
            scale: config.scale,
            heading_lookahead: config.heading_lookahead,
        })
    }

    pub fn curve(&self) -> CurveId {
        self.curve
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn drive_mode(&self) -> DriveMode {
        self.drive_mode
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        check_speed(speed)?;
        self.speed = speed;
        Ok(())
    }

    pub fn set_drive_mode(&mut self, mode: DriveMode) {
        self.drive_mode = mode;
    }

    /// Switch drive mode by name; unknown names are an error and change nothing.
    pub fn set_drive_mode_named(&mut self, name: &str) -> Result<()> {
        self.drive_mode = name.parse()?;
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_start_time(&mut self, start_time: f64) {
        self.start_time = start_time;
    }

    /// Seconds per lap. Laps are counted in Bezier segments for both drive
    /// modes. `None` while the curve has no whole segment.
    pub fn lap_duration(&self, spline: &Spline) -> Option<f64> {
        match spline.segment_count() {
            0 => None,
            segments => Some(segments as f64 / self.speed),
        }
    }

    /// Progress in `[0, 1]` along the current lap at time `t`.
    ///
    /// Rounding in the wrap can land exactly on `1.0`. Times before `start_time`
    /// wrap backwards into the previous lap.
    pub fn progress_at(&self, spline: &Spline, t: f64) -> f64 {
        let Some(lap) = self.lap_duration(spline) else {
            return 0.0;
        };
        let age = t - self.start_time;
        age.rem_euclid(lap) / lap
    }

    pub fn position_at(&self, spline: &Spline, t: f64) -> Point2 {
        let progress = self.progress_at(spline, t);
        match self.drive_mode {
            DriveMode::Linear => spline.linear_position(progress),
            DriveMode::CubicBezier => spline
                .bezier_position(progress)
                .resolve("agent position", progress, || spline.linear_position(progress)),
        }
    }

    /// Direction of travel at time `t`. Not normalized.
    pub fn tangent_at(&self, spline: &Spline, t: f64) -> Vector2 {
        let progress = self.progress_at(spline, t);
        match self.drive_mode {
            DriveMode::Linear => {
                // Sampled slightly ahead so a vertex reports the segment being entered.
                // The sample is clamped at the curve end, so the last lookahead of a lap
                // takes its heading from behind rather than from the closing segment.
                let ahead = spline.linear_tangent(progress + self.heading_lookahead);
                if spline.tolerance().is_zero(ahead.length()) {
                    spline.linear_tangent(progress - self.heading_lookahead)
                } else {
                    ahead
                }
            }
            DriveMode::CubicBezier => spline
                .bezier_tangent(progress)
                .resolve("agent tangent", progress, || spline.linear_tangent(progress)),
        }
    }

    /// Pose at time `t`: on the curve, nose along the tangent, at the agent's scale.
    pub fn pose_at(&self, spline: &Spline, t: f64) -> Pose {
        let position = self.position_at(spline, t);
        let tangent = self.tangent_at(spline, t);
        let heading = tangent.y.atan2(tangent.x) - FRAC_PI_2;
        Pose::new(position, heading, self.scale)
    }
}
