//! Error types for the fallible edges of the lane API
//!
//! The arithmetic core never fails at runtime. These errors come from checked
//! lane access, slice loading/storing and backend lookups.

use thiserror::Error;

/// Core error type for vectorized operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Lane index outside `[0, width)`
    #[error("Lane index {index} out of range for width {width}")]
    LaneOutOfRange { index: usize, width: usize },

    /// Slice or buffer length does not match what the operation needs
    #[error("Size mismatch in {context}: expected {expected}, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: &'static str,
    },

    /// Feature not available in this build
    #[error("Feature not available: {0}")]
    FeatureNotAvailable(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a lane index past the width
    pub fn lane_out_of_range(index: usize, width: usize) -> Self {
        Self::LaneOutOfRange { index, width }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &'static str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context,
        }
    }
}
