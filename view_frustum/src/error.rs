//! Error types for the view frustum crate
//!
//! Only precondition violations are reported as errors. Degenerate
//! matrices are tolerated by the frustum and never surface here.

use std::fmt;

/// Result type for view frustum operations
pub type Result<T> = std::result::Result<T, Error>;

/// View frustum errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Arguments from which no bounding box can be derived
    InvalidArgument(String),

    /// Raw matrix input that does not hold exactly 16 scalars
    InvalidMatrix(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            Error::InvalidMatrix(msg) => write!(f, "Invalid matrix: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
