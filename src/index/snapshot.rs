//! Immutable, point-in-time copies of length buckets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::stats::LengthStats;

/// An owned copy of the buckets that fell inside a query range.
///
/// Lengths iterate ascending. Nothing can mutate a snapshot once built; later
/// inserts into the index are not reflected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LengthSnapshot {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl LengthSnapshot {
    pub(crate) fn from_buckets(buckets: BTreeMap<usize, Vec<String>>) -> Self {
        Self { buckets }
    }

    /// Words of the given length, empty if none
    pub fn get(&self, length: usize) -> &[String] {
        self.buckets.get(&length).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Iterate `(length, words)` in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[String])> + '_ {
        self.buckets.iter().map(|(len, words)| (*len, words.as_slice()))
    }

    /// Lengths present, ascending
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.keys().copied()
    }

    /// All words, grouped by ascending length
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.buckets.values().flatten().map(String::as_str)
    }

    /// Number of non-empty buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of words
    pub fn word_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns true if no words fell in range
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Statistics over this snapshot only
    pub fn statistics(&self) -> LengthStats {
        LengthStats::from_counts(self.buckets.iter().map(|(len, words)| (*len, words.len())))
    }
}

/// A filtered snapshot together with statistics scoped to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthQueryResult {
    /// Words in range, by length
    pub words: LengthSnapshot,
    /// Statistics over `words`, not over the whole index
    pub stats: LengthStats,
}

impl From<LengthSnapshot> for LengthQueryResult {
    fn from(words: LengthSnapshot) -> Self {
        let stats = words.statistics();
        Self { words, stats }
    }
}
