//! trackline curves: control points, segment evaluation, progress mapping.

pub mod control;
pub mod progress;
pub mod segment;
pub mod spline;
pub mod tessellate;

pub use control::{ControlPoint, ControlPointSequence};
pub use progress::{BezierSample, LinearSample};
pub use spline::{Evaluation, Spline};
pub use tessellate::{tessellate, CurveVertex};
