//! Interpolation policies for curves and drive modes for agents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackError;

/// Which evaluator a curve answers position, color, and tangent queries with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum InterpolationPolicy {
    /// Straight segments between consecutive control points.
    Linear,
    /// Chained cubic Bezier segments sharing their end anchors.
    #[default]
    CubicBezier,
}

impl InterpolationPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::CubicBezier => "CubicBezier",
        }
    }
}

impl FromStr for InterpolationPolicy {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" | "linear" => Ok(Self::Linear),
            "CubicBezier" | "cubic_bezier" | "Bezier" => Ok(Self::CubicBezier),
            other => Err(TrackError::UnknownPolicy(other.to_string())),
        }
    }
}

impl TryFrom<String> for InterpolationPolicy {
    type Error = TrackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<InterpolationPolicy> for String {
    fn from(value: InterpolationPolicy) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for InterpolationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a moving agent follows its curve, independent of the curve's own policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DriveMode {
    #[default]
    Linear,
    CubicBezier,
}

impl DriveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::CubicBezier => "CubicBezier",
        }
    }
}

impl FromStr for DriveMode {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Linear" | "linear" => Ok(Self::Linear),
            "CubicBezier" | "cubic_bezier" | "BezierSpline" => Ok(Self::CubicBezier),
            other => Err(TrackError::UnknownDriveMode(other.to_string())),
        }
    }
}

impl TryFrom<String> for DriveMode {
    type Error = TrackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DriveMode> for String {
    fn from(value: DriveMode) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for DriveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
