//! Per-segment evaluation: the math shared by every curve, independent of storage.

mod bezier;
mod linear;

use std::ops::{Add, Mul, Sub};

use track_math::{DVec2, DVec4};

pub use bezier::{bezier_derivative, bezier_value, BEZIER_BASIS};
pub use linear::{lerp, linear_tangent};

/// Anything a segment can blend: positions and colors alike.
pub trait ControlValue:
    Copy + Add<Output = Self> + Sub<Output = Self> + Mul<f64, Output = Self>
{
    const ZERO: Self;
}

impl ControlValue for DVec2 {
    const ZERO: Self = DVec2::ZERO;
}

impl ControlValue for DVec4 {
    const ZERO: Self = DVec4::ZERO;
}

/// Row-major 4x4 characteristic matrix of a cubic segment.
pub type SegmentBasis = [[f64; 4]; 4];

/// Blend four control values with the basis `m` at parameter `alpha`.
///
/// The weights are `m · (1, α, α², α³)`; row `i` of `m` produces the weight of `points[i]`.
pub fn evaluate_with_basis<P: ControlValue>(alpha: f64, m: &SegmentBasis, points: [P; 4]) -> P {
    let w = [1.0, alpha, alpha * alpha, alpha * alpha * alpha];
    let mut out = P::ZERO;
    for (row, p) in m.iter().zip(points) {
        let c = row[0] * w[0] + row[1] * w[1] + row[2] * w[2] + row[3] * w[3];
        out = out + p * c;
    }
    out
}
