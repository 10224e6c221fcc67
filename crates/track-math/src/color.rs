use glam::DVec4;

/// RGBA color with channels in `[0, 1]`, stored as `(r, g, b, a)`.
///
/// Colors are interpolated channel-wise with the same formulas as positions.
pub type Color = DVec4;

pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Color {
    DVec4::new(r, g, b, a)
}

/// Opaque color.
pub fn rgb(r: f64, g: f64, b: f64) -> Color {
    DVec4::new(r, g, b, 1.0)
}

pub const BLACK: Color = DVec4::new(0.0, 0.0, 0.0, 1.0);
