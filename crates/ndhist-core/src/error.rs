//! Error types for histogram construction and lookup
//!
//! Provides a unified error type for all ndhist crates.

use thiserror::Error;

/// Core error type for histogram operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The filter was asked to run before it was fully configured
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A bin index component lies outside the grid
    #[error("Bin index {index} out of range for dimension {dimension} (size {size})")]
    OutOfRange {
        dimension: usize,
        index: usize,
        size: usize,
    },

    /// A linear index lies outside the grid
    #[error("Linear index {index} out of range (histogram has {len} bins)")]
    LinearIndexOutOfRange { index: usize, len: usize },

    /// A measurement vector or index tuple has the wrong number of components
    #[error("Dimension mismatch: expected {expected} components, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// A measurement component cannot be placed in any bin
    #[error("Non-finite value: {0}")]
    NonFinite(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a component count mismatch
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch { expected, actual }
    }

    /// Create an error for a NaN component
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(format!("{context} contains NaN"))
    }

    /// Create an error for a probability outside [0, 1]
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in [0, 1]"))
    }

    /// Fail unless `actual` matches `expected`
    pub fn check_dimension(expected: usize, actual: usize) -> Result<()> {
        if expected != actual {
            return Err(Self::dimension_mismatch(expected, actual));
        }
        Ok(())
    }
}
