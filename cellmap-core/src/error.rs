//! Error types for geometry decoding and combination.

use thiserror::Error;

/// Geometry pipeline errors.
#[derive(Error, Debug)]
pub enum GeomError {
    /// Malformed ring input (too few distinct vertices, bad coordinates).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Edge set failed to close into loops after XOR merge.
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// An operation was given fewer regions than it needs.
    #[error("operation requires at least {required} regions, got {actual}")]
    InsufficientOperands { required: usize, actual: usize },
}

impl GeomError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        GeomError::InvalidGeometry(msg.into())
    }

    pub fn degenerate(msg: impl Into<String>) -> Self {
        GeomError::DegenerateGeometry(msg.into())
    }
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeomError>;
