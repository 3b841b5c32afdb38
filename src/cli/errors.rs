//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::io;

use thiserror::Error;

use crate::index::IndexError;
use crate::view::AcquisitionError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad configuration or query arguments
    #[error(transparent)]
    Index(#[from] IndexError),

    /// Word list could not be read
    #[error(transparent)]
    Acquisition(#[from] AcquisitionError),

    /// stdout/stderr or runtime failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Output could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            CliError::Index(e) => e.code(),
            CliError::Acquisition(e) => e.code(),
            CliError::Io(_) => "WORDLEN_CLI_IO_ERROR",
            CliError::Json(_) => "WORDLEN_CLI_JSON_ERROR",
        }
    }
}
