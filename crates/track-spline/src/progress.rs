//! Mapping of global curve progress onto control point indices.
//!
//! Progress is a scalar in `[0, 1]` covering the whole curve. The linear
//! mapping spreads it evenly over the control polygon; the Bezier mapping
//! spreads it evenly over segments, so each segment gets the same share of
//! progress regardless of its length.

use track_core::error::{Result, TrackError};

/// Number of whole cubic Bezier segments `count` control points form.
pub fn segment_count(count: usize) -> usize {
    count / 3
}

/// Number of control points that lie on the curve (every third one).
pub fn anchor_count(count: usize) -> usize {
    count.div_ceil(3)
}

/// Control point index of the `anchor`-th on-curve point.
pub fn anchor_control_index(anchor: usize) -> usize {
    anchor * 3
}

/// Two neighbouring control points and the blend between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSample {
    pub start: usize,
    pub end: usize,
    pub alpha: f64,
}

/// Number of linear steps progress is spread over.
///
/// A closed curve repeats its first point at the end, and that duplicate is
/// never used as an interpolation endpoint. Always at least one step.
pub fn linear_steps(count: usize, closed: bool) -> usize {
    let steps = if closed {
        count.saturating_sub(2)
    } else {
        count.saturating_sub(1)
    };
    steps.max(1)
}

/// Locate `progress` on the control polygon. `None` with fewer than two points.
///
/// Progress outside `[0, 1]` is clamped so the result always indexes real points.
pub fn linear_sample(progress: f64, count: usize, closed: bool) -> Option<LinearSample> {
    if count < 2 {
        return None;
    }
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let index = progress * linear_steps(count, closed) as f64;
    let floor = index.floor();
    let last = count - 1;
    Some(LinearSample {
        start: (floor as usize).min(last),
        end: (index.ceil() as usize).min(last),
        alpha: index - floor,
    })
}

/// Where a progress value falls among the Bezier segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierSample {
    /// Inside segment `segment`, whose points start at `first_control`.
    Interior {
        segment: usize,
        first_control: usize,
        alpha: f64,
    },
    /// Exactly the end of the curve: the final anchor, with no segment after it.
    End { anchor: usize },
}

/// Locate `progress` among the Bezier segments of `count` control points.
///
/// `Ok(None)` means there are too few points for a single segment and the
/// caller should use the linear mapping instead.
pub fn bezier_sample(progress: f64, count: usize) -> Result<Option<BezierSample>> {
    if count < 4 {
        return Ok(None);
    }
    if !(0.0..=1.0).contains(&progress) {
        return Err(TrackError::NumericEvaluation(format!(
            "progress {progress} outside [0, 1]"
        )));
    }

    let segments = segment_count(count);
    if progress == 1.0 {
        let anchor = anchor_control_index(segments);
        if anchor >= count {
            return Err(TrackError::NumericEvaluation(format!(
                "final anchor {anchor} past the last of {count} control points"
            )));
        }
        return Ok(Some(BezierSample::End { anchor }));
    }

    let continuous = progress * segments as f64;
    let segment = (continuous.floor() as usize).min(segments - 1);
    let first_control = anchor_control_index(segment);
    if first_control + 3 >= count {
        return Err(TrackError::NumericEvaluation(format!(
            "segment {segment} needs control points {first_control}..={}, only {count} exist",
            first_control + 3
        )));
    }
    Ok(Some(BezierSample::Interior {
        segment,
        first_control,
        alpha: continuous - segment as f64,
    }))
}
