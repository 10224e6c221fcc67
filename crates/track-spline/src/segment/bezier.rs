//! Cubic Bezier segment evaluation.

use super::{evaluate_with_basis, ControlValue, SegmentBasis};

/// Bernstein basis of a cubic Bezier segment in power form.
pub const BEZIER_BASIS: SegmentBasis = [
    [1.0, -3.0, 3.0, -1.0],
    [0.0, 3.0, -6.0, 3.0],
    [0.0, 0.0, 3.0, -3.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Point `alpha` along the segment `p0..p3`. Exact at both ends.
pub fn bezier_value<P: ControlValue>(alpha: f64, p0: P, p1: P, p2: P, p3: P) -> P {
    evaluate_with_basis(alpha, &BEZIER_BASIS, [p0, p1, p2, p3])
}

/// Derivative with respect to `alpha` of [`bezier_value`].
pub fn bezier_derivative<P: ControlValue>(alpha: f64, p0: P, p1: P, p2: P, p3: P) -> P {
    let a2 = alpha * alpha;
    let c0 = -3.0 + 6.0 * alpha - 3.0 * a2;
    let c1 = 3.0 - 12.0 * alpha + 9.0 * a2;
    let c2 = 6.0 * alpha - 9.0 * a2;
    let c3 = 3.0 * a2;
    p0 * c0 + p1 * c1 + p2 * c2 + p3 * c3
}
