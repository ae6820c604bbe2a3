//! Collector error types

use thiserror::Error;

/// Errors raised during window collection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid construction or call argument
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A record or batch payload does not match the shape fixed at construction
    #[error("shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch { expected: Vec<usize>, got: Vec<usize> },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, Error>;
