// File: crates/linegraph-core/src/error.rs
// Summary: Typed errors raised by scaling, mapping, and configuration checks.

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    /// A series was empty where an extremum or a scale is required.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Axis, padding, or style settings outside their allowed range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid viewport {width}x{height}: both dimensions must be positive and finite")]
    InvalidViewport { width: f32, height: f32 },

    #[error("failed to parse plot config: {0}")]
    Parse(String),

    #[error("failed to read plot config: {0}")]
    Io(String),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for ChartError {
    fn from(err: std::io::Error) -> Self {
        ChartError::Io(err.to_string())
    }
}
