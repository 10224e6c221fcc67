use super::ControlValue;

/// `start·(1-α) + end·α`. Exact at both ends.
pub fn lerp<P: ControlValue>(start: P, end: P, alpha: f64) -> P {
    start * (1.0 - alpha) + end * alpha
}

/// Direction of travel along a straight segment. Not normalized.
pub fn linear_tangent<P: ControlValue>(start: P, end: P) -> P {
    end - start
}
