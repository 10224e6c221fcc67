pub mod config;
pub mod error;
pub mod policy;
pub mod tolerance;
pub mod traits;

pub use config::{AgentConfig, SplineConfig};
pub use error::{Result, TrackError};
pub use policy::{DriveMode, InterpolationPolicy};
pub use tolerance::Tolerance;
