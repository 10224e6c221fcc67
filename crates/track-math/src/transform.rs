use crate::{DMat3, DVec2, DVec3, Point2, Vector2};
use serde::{Deserialize, Serialize};

/// 2D homogeneous transform stored as a column-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    pub matrix: [f64; 9],
}

impl Transform2D {
    pub fn identity() -> Self {
        Self::from_mat3(DMat3::IDENTITY)
    }

    pub fn from_translation(t: Vector2) -> Self {
        Self::from_mat3(DMat3::from_translation(t))
    }

    /// Counter-clockwise rotation by `radians`.
    pub fn from_rotation(radians: f64) -> Self {
        Self::from_mat3(DMat3::from_angle(radians))
    }

    pub fn from_scale(sx: f64, sy: f64) -> Self {
        Self::from_mat3(DMat3::from_scale(DVec2::new(sx, sy)))
    }

    pub fn from_uniform_scale(s: f64) -> Self {
        Self::from_scale(s, s)
    }

    pub fn from_mat3(m: DMat3) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat3(&self) -> DMat3 {
        DMat3::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point2) -> Point2 {
        self.to_mat3().transform_point2(p)
    }

    pub fn transform_vector(&self, v: Vector2) -> Vector2 {
        self.to_mat3().transform_vector2(v)
    }

    /// Multiply a raw homogeneous column `(x, y, w)`.
    pub fn apply(&self, v: DVec3) -> DVec3 {
        self.to_mat3() * v
    }

    /// `self · other`: `other` is applied first.
    pub fn compose(&self, other: &Transform2D) -> Transform2D {
        Self::from_mat3(self.to_mat3() * other.to_mat3())
    }

    pub fn inverse(&self) -> Option<Transform2D> {
        let m = self.to_mat3();
        if m.determinant().abs() < 1e-15 {
            None
        } else {
            Some(Self::from_mat3(m.inverse()))
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}
