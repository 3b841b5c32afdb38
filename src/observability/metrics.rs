//! Metrics registry for a word-length view
//!
//! - Counters only
//! - Monotonic increase
//! - Thread-safe but lock-free

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

/// Counters for one view.
///
/// Shared between the view and its population task. Uses Relaxed ordering;
/// counters are independent of each other.
#[derive(Debug, Default)]
pub struct MetricsRegistry {
    /// Words stored in the index
    words_inserted: AtomicU64,
    /// Zero-length words turned away by the index
    words_rejected: AtomicU64,
    /// Words a transform mapped to nothing
    words_dropped: AtomicU64,
    /// Queries answered
    queries_executed: AtomicU64,
    /// Queries rejected by range validation
    queries_rejected: AtomicU64,
}

impl MetricsRegistry {
    /// Create a new metrics registry with all counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment words inserted
    pub fn increment_words_inserted(&self) {
        self.words_inserted.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment words rejected
    pub fn increment_words_rejected(&self) {
        self.words_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment words dropped by a transform
    pub fn increment_words_dropped(&self) {
        self.words_dropped.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment queries executed
    pub fn increment_queries_executed(&self) {
        self.queries_executed.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment queries rejected
    pub fn increment_queries_rejected(&self) {
        self.queries_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get all metrics as a snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            words_inserted: self.words_inserted.load(Ordering::Relaxed),
            words_rejected: self.words_rejected.load(Ordering::Relaxed),
            words_dropped: self.words_dropped.load(Ordering::Relaxed),
            queries_executed: self.queries_executed.load(Ordering::Relaxed),
            queries_rejected: self.queries_rejected.load(Ordering::Relaxed),
        }
    }
}

/// A point-in-time snapshot of all metrics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub words_inserted: u64,
    pub words_rejected: u64,
    pub words_dropped: u64,
    pub queries_executed: u64,
    pub queries_rejected: u64,
}
