//! Inclusive length ranges
//!
//! Every query form (all, one length, min..=max) resolves to a `LengthRange`
//! before touching the index.

use super::errors::{IndexError, IndexResult};

/// Upper bound meaning "no limit"
pub const UNBOUNDED: usize = usize::MAX;

/// An inclusive `[min, max]` range of word lengths.
///
/// Always satisfies `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// The full range, `[1, UNBOUNDED]`
    pub fn all() -> Self {
        Self {
            min: 1,
            max: UNBOUNDED,
        }
    }

    /// A single length, `[length, length]`
    pub fn exact(length: usize) -> Self {
        Self {
            min: length,
            max: length,
        }
    }

    /// A validated range `[min, max]`.
    ///
    /// Returns `InvalidRange` when `min > max`.
    pub fn between(min: usize, max: usize) -> IndexResult<Self> {
        if min > max {
            return Err(IndexError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound (inclusive)
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound (inclusive), `UNBOUNDED` when open
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if the upper bound is open
    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }
}

impl Default for LengthRange {
    fn default() -> Self {
        Self::all()
    }
}
