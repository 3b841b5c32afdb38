//! BTreeMap-based length buckets
//!
//! The index maps a word length to the words of that length in insertion
//! order. Keys iterate ascending, so snapshots need no extra sort.

use std::collections::BTreeMap;

use super::config::{IndexConfig, LengthUnit};
use super::range::LengthRange;
use super::snapshot::LengthSnapshot;
use super::stats::LengthStats;

/// Words grouped by length.
///
/// Every word stored under key `L` measures exactly `L` in the configured
/// `LengthUnit`. Zero-length words are never stored.
#[derive(Debug, Default)]
pub struct LengthIndex {
    /// Maps length to words of that length
    buckets: BTreeMap<usize, Vec<String>>,
    config: IndexConfig,
    /// Zero-length words turned away by `insert`
    rejected: usize,
}

impl LengthIndex {
    /// Creates a new empty index with the default configuration
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    /// Creates a new empty index
    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            buckets: BTreeMap::new(),
            config,
            rejected: 0,
        }
    }

    /// Append a word to the bucket for its length.
    ///
    /// Duplicates are kept. Returns false if the word was empty and therefore
    /// rejected.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        let word = word.into();
        let length = self.config.length_unit.measure(&word);
        if length == 0 {
            self.rejected += 1;
            return false;
        }

        self.buckets.entry(length).or_default().push(word);
        true
    }

    /// Copy out the buckets whose length falls in `range`.
    ///
    /// Buckets are sorted in the copy when `sort_words` is set; the index
    /// itself always keeps insertion order.
    pub fn snapshot(&self, range: LengthRange) -> LengthSnapshot {
        let buckets = self
            .buckets
            .range(range.min()..=range.max())
            .map(|(length, words)| {
                let mut words = words.clone();
                if self.config.sort_words {
                    words.sort();
                }
                (*length, words)
            })
            .collect();

        LengthSnapshot::from_buckets(buckets)
    }

    /// Statistics over the whole index
    pub fn statistics(&self) -> LengthStats {
        LengthStats::from_counts(self.buckets.iter().map(|(len, words)| (*len, words.len())))
    }

    /// Unit used to measure words
    pub fn length_unit(&self) -> LengthUnit {
        self.config.length_unit
    }

    /// Returns the number of distinct lengths
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the total number of stored words
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns the number of rejected zero-length words
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Returns true if nothing has been stored
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
