use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    #[error("Index out of range: {index} (count {count})")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("Degenerate curve: {0}")]
    DegenerateCurve(String),

    #[error("Numeric evaluation failure: {0}")]
    NumericEvaluation(String),

    #[error("Unknown interpolation policy: {0}")]
    UnknownPolicy(String),

    #[error("Unknown drive mode: {0}")]
    UnknownDriveMode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, TrackError>;
