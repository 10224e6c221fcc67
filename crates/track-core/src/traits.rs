use crate::error::Result;

/// Check the structural layout of a curve or one of its parts.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
