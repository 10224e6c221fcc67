pub mod color;
pub mod transform;

pub use glam::{DMat3, DVec2, DVec3, DVec4};
pub use color::{rgb, rgba, Color};
pub use transform::Transform2D;

pub type Point2 = DVec2;
pub type Vector2 = DVec2;
