//! # Acquisition Errors
//!
//! Failures surfaced through a view's readiness signal.

use std::error::Error as StdError;
use std::sync::Arc;

use thiserror::Error;

/// Boxed error returned by word sources and producers
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result type for acquisition
pub type AcquisitionResult<T> = Result<T, AcquisitionError>;

/// Errors delivered by `WordLengthView::ready`.
///
/// Cloneable so every holder of the readiness signal sees the same failure.
#[derive(Debug, Clone, Error)]
pub enum AcquisitionError {
    /// The deferred word list or the producer failed
    #[error("word source failed: {0}")]
    Source(Arc<dyn StdError + Send + Sync + 'static>),

    /// The population task panicked or was cancelled
    #[error("population aborted: {0}")]
    Aborted(String),
}

impl AcquisitionError {
    /// Wrap a word source failure
    pub fn source_failed(error: impl Into<BoxError>) -> Self {
        AcquisitionError::Source(Arc::from(error.into()))
    }

    /// The error the word source returned, if that is what failed.
    ///
    /// Use `downcast_ref` to recover the concrete type.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            AcquisitionError::Source(err) => Some(err.as_ref()),
            AcquisitionError::Aborted(_) => None,
        }
    }

    /// Returns the stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AcquisitionError::Source(_) => "WORDLEN_SOURCE_FAILED",
            AcquisitionError::Aborted(_) => "WORDLEN_POPULATION_ABORTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_cause_preserves_original() {
        let err = AcquisitionError::source_failed(io::Error::new(
            io::ErrorKind::NotFound,
            "words.txt missing",
        ));

        let cause = err.cause().unwrap();
        let io_err = cause.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("words.txt missing"));
    }

    #[test]
    fn test_clone_shares_cause() {
        let err = AcquisitionError::source_failed("network down");
        let cloned = err.clone();
        assert_eq!(cloned.to_string(), err.to_string());
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AcquisitionError::source_failed("x").code(),
            "WORDLEN_SOURCE_FAILED"
        );
        let aborted = AcquisitionError::Aborted("panic".into());
        assert_eq!(aborted.code(), "WORDLEN_POPULATION_ABORTED");
        assert!(aborted.cause().is_none());
    }
}
