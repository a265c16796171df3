//! Error types for tabulation
//!
//! Provides a unified error type for all tabula crates.

use thiserror::Error;

/// Core error type for counting operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pre-sized container or a paired sequence has the wrong length or shape
    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(_operation: &str) -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a length mismatch between two sequences or a table and its domain
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::DimensionMismatch(format!(
            "{context}: expected length {expected}, got {actual}"
        ))
    }

    /// Create an error for a two-dimensional shape mismatch
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize), context: &str) -> Self {
        Self::DimensionMismatch(format!(
            "{context}: expected shape {}x{}, got {}x{}",
            expected.0, expected.1, actual.0, actual.1
        ))
    }

    /// Whether this error reports a dimension mismatch
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(self, Self::DimensionMismatch(_))
    }
}

/// Check that a paired sequence has the expected length
///
/// Shared by every weighted and joint entry point so the check happens before
/// any table is touched.
pub fn check_len(expected: usize, actual: usize, context: &str) -> Result<()> {
    if expected != actual {
        return Err(Error::size_mismatch(expected, actual, context));
    }
    Ok(())
}
