//! Sampling a spline into a colored polyline for a renderer.

use track_math::{Color, Point2};

use crate::spline::Spline;

/// One polyline vertex with the curve color at that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveVertex {
    pub position: Point2,
    pub color: Color,
}

/// Sample `spline` at `samples + 1` evenly spaced progress values under its
/// active policy, both ends included.
///
/// # Arguments
/// * `spline` - The curve to sample
/// * `samples` - Number of polyline segments; `0` yields no vertices
pub fn tessellate(spline: &Spline, samples: usize) -> Vec<CurveVertex> {
    if samples == 0 {
        return Vec::new();
    }
    (0..=samples)
        .map(|i| {
            let progress = i as f64 / samples as f64;
            CurveVertex {
                position: spline.position_at(progress),
                color: spline.color_at(progress),
            }
        })
        .collect()
}
