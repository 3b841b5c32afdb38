//! Index error types
//!
//! Error codes:
//! - WORDLEN_INVALID_RANGE
//! - WORDLEN_CONFIG_INVALID

use thiserror::Error;

/// Result type for index operations
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors raised by the length index and its query path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    /// Lower bound of a range query exceeds its upper bound
    #[error("invalid length range: min {min} exceeds max {max}")]
    InvalidRange { min: usize, max: usize },

    /// Index configuration could not be loaded or failed validation
    #[error("invalid index configuration: {0}")]
    InvalidConfig(String),
}

impl IndexError {
    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            IndexError::InvalidRange { .. } => "WORDLEN_INVALID_RANGE",
            IndexError::InvalidConfig(_) => "WORDLEN_CONFIG_INVALID",
        }
    }
}
