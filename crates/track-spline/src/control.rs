//! Ordered control points carrying a position and a color.

use serde::{Deserialize, Serialize};
use track_core::error::{Result, TrackError};
use track_core::traits::Validate;
use track_core::Tolerance;
use track_math::{Color, Point2};

use crate::progress::anchor_control_index;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point2,
    pub color: Color,
}

impl ControlPoint {
    pub fn new(position: Point2, color: Color) -> Self {
        Self { position, color }
    }
}

/// Control points in insertion order. A point is addressed only by its index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlPointSequence {
    points: Vec<ControlPoint>,
}

impl ControlPointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one point per position, all painted `color`.
    pub fn append(&mut self, positions: &[Point2], color: Color) {
        self.points
            .extend(positions.iter().map(|&p| ControlPoint::new(p, color)));
    }

    pub fn push(&mut self, point: ControlPoint) {
        self.points.push(point);
    }

    pub fn count(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlPoint> {
        self.points.iter()
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(TrackError::IndexOutOfRange {
                index,
                count: self.points.len(),
            })
        }
    }

    pub fn get(&self, index: usize) -> Result<&ControlPoint> {
        self.check(index)?;
        Ok(&self.points[index])
    }

    pub fn position_at(&self, index: usize) -> Result<Point2> {
        self.get(index).map(|p| p.position)
    }

    pub fn color_at(&self, index: usize) -> Result<Color> {
        self.get(index).map(|p| p.color)
    }

    pub fn set_position_at(&mut self, index: usize, position: Point2) -> Result<()> {
        self.check(index)?;
        self.points[index].position = position;
        Ok(())
    }

    pub fn set_color_at(&mut self, index: usize, color: Color) -> Result<()> {
        self.check(index)?;
        self.points[index].color = color;
        Ok(())
    }

    /// The four positions of Bezier segment `segment`.
    pub fn segment_positions(&self, segment: usize) -> Result<[Point2; 4]> {
        let first = anchor_control_index(segment);
        Ok([
            self.position_at(first)?,
            self.position_at(first + 1)?,
            self.position_at(first + 2)?,
            self.position_at(first + 3)?,
        ])
    }

    /// The four colors of Bezier segment `segment`.
    pub fn segment_colors(&self, segment: usize) -> Result<[Color; 4]> {
        let first = anchor_control_index(segment);
        Ok([
            self.color_at(first)?,
            self.color_at(first + 1)?,
            self.color_at(first + 2)?,
            self.color_at(first + 3)?,
        ])
    }

    /// Paint every point `color`.
    pub fn fill_color(&mut self, color: Color) {
        for p in &mut self.points {
            p.color = color;
        }
    }

    /// Copy the first point's color onto the last two, so a closed track's
    /// color wraps around without a seam.
    pub fn close_colors(&mut self) {
        let n = self.points.len();
        if n < 2 {
            return;
        }
        let first = self.points[0].color;
        self.points[n - 1].color = first;
        if n >= 3 {
            self.points[n - 2].color = first;
        }
    }

    /// Whether the last position returns to the first.
    pub fn is_closed_loop(&self, tolerance: Tolerance) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) if self.points.len() > 1 => {
                tolerance.is_zero(first.position.distance(last.position))
            }
            _ => false,
        }
    }
}

impl Validate for ControlPointSequence {
    /// Checks that the points form a whole number of chained Bezier segments.
    fn validate(&self) -> Result<()> {
        let n = self.points.len();
        if n < 4 {
            return Err(TrackError::DegenerateCurve(format!(
                "{n} control points, a Bezier segment needs 4"
            )));
        }
        if (n - 1) % 3 != 0 {
            return Err(TrackError::DegenerateCurve(format!(
                "{n} control points leave {} dangling after the last full segment",
                (n - 1) % 3
            )));
        }
        for (i, p) in self.points.iter().enumerate() {
            if !p.position.is_finite() {
                return Err(TrackError::DegenerateCurve(format!(
                    "control point {i} has non-finite position {}",
                    p.position
                )));
            }
        }
        Ok(())
    }
}
