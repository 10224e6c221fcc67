use serde::{Deserialize, Serialize};
use track_math::{DVec2, DVec3, Point2, Transform2D, Vector2};

/// Placement of an agent: where it is, which way its nose points, how big it is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Point2,
    /// Rotation in radians applied to a sprite whose nose points along +Y.
    pub heading: f64,
    pub scale: f64,
}

impl Pose {
    pub fn new(position: Point2, heading: f64, scale: f64) -> Self {
        Self {
            position,
            heading,
            scale,
        }
    }

    /// `Translate(position) · Rotate(heading) · Scale(scale)`.
    pub fn matrix(&self) -> Transform2D {
        Transform2D::from_translation(self.position)
            .compose(&Transform2D::from_rotation(self.heading))
            .compose(&Transform2D::from_uniform_scale(self.scale))
    }

    pub fn transform_point(&self, p: Point2) -> Point2 {
        self.matrix().transform_point(p)
    }

    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.matrix().apply(v)
    }

    /// Unit vector the nose points along.
    pub fn forward(&self) -> Vector2 {
        DVec2::from_angle(self.heading).rotate(DVec2::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_matrix_order() {
        let pose = Pose::new(DVec2::new(2.0, 3.0), FRAC_PI_2, 0.5);
        // (1, 0) scaled to (0.5, 0), rotated to (0, 0.5), translated.
        let p = pose.apply(DVec3::new(1.0, 0.0, 1.0));
        assert_abs_diff_eq!(p.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_forward() {
        let pose = Pose::new(DVec2::ZERO, -FRAC_PI_2, 1.0);
        let f = pose.forward();
        assert_abs_diff_eq!(f.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(f.y, 0.0, epsilon = 1e-12);
    }
}
