//! A curve through control points under a runtime-switchable interpolation policy.

use serde::{Deserialize, Serialize};
use track_core::error::{Result, TrackError};
use track_core::{InterpolationPolicy, SplineConfig, Tolerance};
use track_math::color::BLACK;
use track_math::{Color, Point2, Vector2};

use crate::control::{ControlPoint, ControlPointSequence};
use crate::progress::{self, BezierSample};
use crate::segment::{bezier_derivative, bezier_value, lerp, linear_tangent};

/// Outcome of a Bezier query, before any fallback is applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation<T> {
    Exact(T),
    /// Too few control points for a Bezier segment.
    Degenerate,
    /// The query could not be evaluated, e.g. a segment runs past the last point.
    Failed(TrackError),
}

impl<T> Evaluation<T> {
    fn from_result(r: Result<Option<T>>) -> Self {
        match r {
            Ok(Some(v)) => Self::Exact(v),
            Ok(None) => Self::Degenerate,
            Err(e) => Self::Failed(e),
        }
    }

    /// Take the value, or compute the fallback. Failures are logged.
    pub fn resolve(self, what: &str, progress: f64, fallback: impl FnOnce() -> T) -> T {
        match self {
            Self::Exact(v) => v,
            Self::Degenerate => {
                log::trace!("{what} at {progress}: too few control points, using linear");
                fallback()
            }
            Self::Failed(e) => {
                log::warn!("{what} at {progress} failed ({e}), using linear");
                fallback()
            }
        }
    }

    pub fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spline {
    points: ControlPointSequence,
    policy: InterpolationPolicy,
    closed: bool,
    tolerance: Tolerance,
}

impl Spline {
    pub fn new() -> Self {
        Self::from_config(&SplineConfig::default())
    }

    pub fn from_config(config: &SplineConfig) -> Self {
        Self {
            points: ControlPointSequence::new(),
            policy: config.interpolation,
            closed: config.closed,
            tolerance: config.tolerance,
        }
    }

    pub fn with_policy(policy: InterpolationPolicy) -> Self {
        Self {
            policy,
            ..Self::new()
        }
    }

    /// Build a spline from positions that all share `color`.
    pub fn from_points(positions: &[Point2], color: Color, policy: InterpolationPolicy) -> Self {
        let mut spline = Self::with_policy(policy);
        spline.append_control_points(positions, color);
        spline
    }

    // --- Mutation ---

    pub fn append_control_points(&mut self, positions: &[Point2], color: Color) {
        self.points.append(positions, color);
    }

    pub fn push_control_point(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    pub fn set_point_position(&mut self, index: usize, position: Point2) -> Result<()> {
        self.points.set_position_at(index, position)
    }

    pub fn set_point_color(&mut self, index: usize, color: Color) -> Result<()> {
        self.points.set_color_at(index, color)
    }

    pub fn set_interpolation_policy(&mut self, policy: InterpolationPolicy) {
        self.policy = policy;
    }

    /// Switch policy by name. Unknown names leave the policy untouched.
    pub fn set_interpolation_policy_named(&mut self, name: &str) -> Result<()> {
        self.policy = name.parse()?;
        Ok(())
    }

    pub fn set_closed(&mut self, closed: bool) {
        self.closed = closed;
    }

    /// Direct access to the control points, for editors.
    pub fn points_mut(&mut self) -> &mut ControlPointSequence {
        &mut self.points
    }

    // --- Query ---

    pub fn points(&self) -> &ControlPointSequence {
        &self.points
    }

    pub fn policy(&self) -> InterpolationPolicy {
        self.policy
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Whether the points actually return to their start, within the spline's tolerance.
    pub fn loops_back(&self) -> bool {
        self.points.is_closed_loop(self.tolerance)
    }

    pub fn point_count(&self) -> usize {
        self.points.count()
    }

    pub fn segment_count(&self) -> usize {
        progress::segment_count(self.points.count())
    }

    pub fn anchor_count(&self) -> usize {
        progress::anchor_count(self.points.count())
    }

    pub fn position_at(&self, progress: f64) -> Point2 {
        match self.policy {
            InterpolationPolicy::Linear => self.linear_position(progress),
            InterpolationPolicy::CubicBezier => self
                .bezier_position(progress)
                .resolve("bezier position", progress, || self.linear_position(progress)),
        }
    }

    pub fn color_at(&self, progress: f64) -> Color {
        match self.policy {
            InterpolationPolicy::Linear => self.linear_color(progress),
            InterpolationPolicy::CubicBezier => self
                .bezier_color(progress)
                .resolve("bezier color", progress, || self.linear_color(progress)),
        }
    }

    /// Unnormalized tangent under the active policy.
    pub fn tangent_at(&self, progress: f64) -> Vector2 {
        match self.policy {
            InterpolationPolicy::Linear => self.linear_tangent(progress),
            InterpolationPolicy::CubicBezier => self
                .bezier_tangent(progress)
                .resolve("bezier tangent", progress, || self.linear_tangent(progress)),
        }
    }

    // --- Linear ---

    // Sampled indices are always in range, so the sequence lookups cannot fail.
    fn linear_pair<T>(&self, progress: f64, get: impl Fn(&ControlPoint) -> T) -> Option<(T, T, f64)> {
        let s = progress::linear_sample(progress, self.points.count(), self.closed)?;
        let start = self.points.get(s.start).ok()?;
        let end = self.points.get(s.end).ok()?;
        Some((get(start), get(end), s.alpha))
    }

    pub fn linear_position(&self, progress: f64) -> Point2 {
        match self.linear_pair(progress, |p| p.position) {
            Some((a, b, alpha)) => lerp(a, b, alpha),
            None => Point2::ZERO,
        }
    }

    pub fn linear_color(&self, progress: f64) -> Color {
        match self.linear_pair(progress, |p| p.color) {
            Some((a, b, alpha)) => lerp(a, b, alpha),
            None => self.points.color_at(0).unwrap_or(BLACK),
        }
    }

    pub fn linear_tangent(&self, progress: f64) -> Vector2 {
        match self.linear_pair(progress, |p| p.position) {
            Some((a, b, _)) => linear_tangent(a, b),
            None => Vector2::ZERO,
        }
    }

    // --- Cubic Bezier ---

    pub fn bezier_position(&self, progress: f64) -> Evaluation<Point2> {
        Evaluation::from_result(self.try_bezier_position(progress))
    }

    pub fn bezier_color(&self, progress: f64) -> Evaluation<Color> {
        Evaluation::from_result(self.try_bezier_color(progress))
    }

    pub fn bezier_tangent(&self, progress: f64) -> Evaluation<Vector2> {
        Evaluation::from_result(self.try_bezier_tangent(progress))
    }

    fn try_bezier_position(&self, progress: f64) -> Result<Option<Point2>> {
        let Some(sample) = progress::bezier_sample(progress, self.points.count())? else {
            return Ok(None);
        };
        match sample {
            BezierSample::End { anchor } => self.points.position_at(anchor).map(Some),
            BezierSample::Interior { segment, alpha, .. } => {
                let [p0, p1, p2, p3] = self.points.segment_positions(segment)?;
                Ok(Some(bezier_value(alpha, p0, p1, p2, p3)))
            }
        }
    }

    fn try_bezier_color(&self, progress: f64) -> Result<Option<Color>> {
        let Some(sample) = progress::bezier_sample(progress, self.points.count())? else {
            return Ok(None);
        };
        match sample {
            BezierSample::End { anchor } => self.points.color_at(anchor).map(Some),
            BezierSample::Interior { segment, alpha, .. } => {
                let [c0, c1, c2, c3] = self.points.segment_colors(segment)?;
                Ok(Some(bezier_value(alpha, c0, c1, c2, c3)))
            }
        }
    }

    fn try_bezier_tangent(&self, progress: f64) -> Result<Option<Vector2>> {
        let Some(sample) = progress::bezier_sample(progress, self.points.count())? else {
            return Ok(None);
        };
        match sample {
            // Backward difference into the final anchor; there is no segment past it.
            BezierSample::End { anchor } => {
                let last = self.points.position_at(anchor)?;
                let before = self.points.position_at(anchor - 1)?;
                Ok(Some((last - before) * 3.0))
            }
            BezierSample::Interior { segment, alpha, .. } => {
                let [p0, p1, p2, p3] = self.points.segment_positions(segment)?;
                Ok(Some(bezier_derivative(alpha, p0, p1, p2, p3)))
            }
        }
    }
}

impl Default for Spline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use track_math::{rgb, DVec2};

    fn closed_track(policy: InterpolationPolicy) -> Spline {
        Spline::from_points(
            &[
                DVec2::new(0.0, 0.0),
                DVec2::new(0.0, 1.0),
                DVec2::new(1.0, 1.0),
                DVec2::new(1.0, 0.0),
                DVec2::new(1.0, -1.0),
            ],
            rgb(0.5, 0.5, 0.5),
            policy,
        )
    }

    #[test]
    fn test_counts() {
        let s = closed_track(InterpolationPolicy::Linear);
        assert_eq!(s.point_count(), 5);
        assert_eq!(s.segment_count(), 1);
        assert_eq!(s.anchor_count(), 2);
    }

    #[test]
    fn test_linear_endpoints() {
        let s = closed_track(InterpolationPolicy::Linear);
        assert_eq!(s.position_at(0.0), DVec2::new(0.0, 0.0));
        // The fifth point is the closing duplicate; progress 1 stops at the fourth.
        assert_eq!(s.position_at(1.0), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_bezier_endpoints() {
        let s = closed_track(InterpolationPolicy::CubicBezier);
        assert_eq!(s.position_at(0.0), DVec2::new(0.0, 0.0));
        assert_eq!(s.position_at(1.0), DVec2::new(1.0, 0.0));
    }

    #[test]
    fn test_linear_colors() {
        let mut s = closed_track(InterpolationPolicy::Linear);
        s.set_point_color(0, rgb(0.0, 0.0, 0.0)).unwrap();
        s.set_point_color(1, rgb(1.0, 1.0, 1.0)).unwrap();
        let c = s.color_at(1.0 / 6.0);
        assert_abs_diff_eq!(c.x, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c.w, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bezier_color_end_is_final_anchor() {
        let mut s = closed_track(InterpolationPolicy::CubicBezier);
        s.set_point_color(3, rgb(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(s.color_at(1.0), rgb(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_degenerate_linear() {
        let mut s = Spline::with_policy(InterpolationPolicy::Linear);
        assert_eq!(s.position_at(0.3), DVec2::ZERO);
        assert_eq!(s.tangent_at(0.3), DVec2::ZERO);
        assert_eq!(s.color_at(0.3), BLACK);
        s.append_control_points(&[DVec2::new(2.0, 3.0)], rgb(0.2, 0.3, 0.4));
        assert_eq!(s.position_at(0.3), DVec2::ZERO);
        assert_eq!(s.color_at(0.3), rgb(0.2, 0.3, 0.4));
    }

    #[test]
    fn test_bezier_with_too_few_points_matches_linear() {
        let pts = [DVec2::new(0.0, 0.0), DVec2::new(2.0, 1.0), DVec2::new(3.0, 5.0)];
        let linear = Spline::from_points(&pts, rgb(1.0, 0.0, 0.0), InterpolationPolicy::Linear);
        let bezier = Spline::from_points(&pts, rgb(1.0, 0.0, 0.0), InterpolationPolicy::CubicBezier);
        assert_eq!(bezier.bezier_position(0.5), Evaluation::Degenerate);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            assert_eq!(bezier.position_at(t), linear.position_at(t));
            assert_eq!(bezier.tangent_at(t), linear.tangent_at(t));
            assert_eq!(bezier.color_at(t), linear.color_at(t));
        }
    }

    #[test]
    fn test_bezier_failure_falls_back_to_linear() {
        // Six points: the second segment would need a seventh.
        let pts: Vec<DVec2> = (0..6).map(|i| DVec2::new(i as f64, (i * i) as f64)).collect();
        let s = Spline::from_points(&pts, rgb(1.0, 1.0, 1.0), InterpolationPolicy::CubicBezier);
        assert!(matches!(s.bezier_position(0.75), Evaluation::Failed(_)));
        assert_eq!(s.position_at(0.75), s.linear_position(0.75));
        // First segment still evaluates as Bezier.
        assert!(s.bezier_position(0.25).is_exact());
    }

    #[test]
    fn test_end_tangent_is_backward_difference() {
        let s = Spline::from_points(
            &[
                DVec2::new(0.0, 0.0),
                DVec2::new(1.0, 2.0),
                DVec2::new(3.0, 3.0),
                DVec2::new(4.0, 0.0),
            ],
            rgb(1.0, 1.0, 1.0),
            InterpolationPolicy::CubicBezier,
        );
        let at_end = s.tangent_at(1.0);
        assert_eq!(at_end, DVec2::new(3.0, -9.0));
        let forward = bezier_derivative(
            1.0 - 1e-9,
            DVec2::new(0.0, 0.0),
            DVec2::new(1.0, 2.0),
            DVec2::new(3.0, 3.0),
            DVec2::new(4.0, 0.0),
        );
        // For a single segment the backward difference is the limit of the forward derivative.
        assert!((at_end - forward).length() < 1e-6);
    }

    #[test]
    fn test_end_tangent_differs_from_forward_formula_on_asymmetric_polygon() {
        // A forward derivative at progress 1 would start a segment at the final
        // anchor and read the point after it.
        let pts = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
            DVec2::new(2.0, 0.0),
        ];
        let s = Spline::from_points(&pts, rgb(1.0, 1.0, 1.0), InterpolationPolicy::CubicBezier);
        let backward = s.tangent_at(1.0);
        let forward = (pts[4] - pts[3]) * 3.0;
        assert_eq!(backward, DVec2::new(0.0, -3.0));
        assert_eq!(forward, DVec2::new(3.0, 0.0));
        assert_ne!(backward, forward);
    }

    #[test]
    fn test_policy_switch() {
        let mut s = closed_track(InterpolationPolicy::CubicBezier);
        let bezier = s.position_at(0.2);
        s.set_interpolation_policy(InterpolationPolicy::Linear);
        assert_ne!(s.position_at(0.2), bezier);
        assert!(s.set_interpolation_policy_named("Catmull").is_err());
        assert_eq!(s.policy(), InterpolationPolicy::Linear);
        s.set_interpolation_policy_named("CubicBezier").unwrap();
        assert_eq!(s.position_at(0.2), bezier);
    }

    #[test]
    fn test_open_curve_reaches_last_point() {
        let mut s = closed_track(InterpolationPolicy::Linear);
        s.set_closed(false);
        assert_eq!(s.position_at(1.0), DVec2::new(1.0, -1.0));
    }

    #[test]
    fn test_loops_back_within_tolerance() {
        let mut s = closed_track(InterpolationPolicy::Linear);
        assert!(!s.loops_back());
        s.append_control_points(&[DVec2::new(0.0, 1e-12)], rgb(0.5, 0.5, 0.5));
        assert!(s.loops_back());

        let mut strict = Spline::from_config(&SplineConfig {
            tolerance: Tolerance::new(0.0),
            ..SplineConfig::default()
        });
        strict.append_control_points(
            &[DVec2::ZERO, DVec2::X, DVec2::new(0.0, 1e-12)],
            rgb(0.5, 0.5, 0.5),
        );
        assert!(!strict.loops_back());
    }

    #[test]
    fn test_set_point_position_out_of_range() {
        let mut s = closed_track(InterpolationPolicy::Linear);
        assert_eq!(
            s.set_point_position(5, DVec2::ONE),
            Err(TrackError::IndexOutOfRange { index: 5, count: 5 })
        );
    }
}
