//! Aggregate statistics over length buckets

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Word counts derived from an index or a snapshot.
///
/// `shortest_word_length` and `longest_word_length` are 0 when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthStats {
    /// Total number of words across all buckets
    pub total_words: usize,
    /// Smallest length present
    pub shortest_word_length: usize,
    /// Largest length present
    pub longest_word_length: usize,
    /// Number of words per length
    pub counts_by_length: BTreeMap<usize, usize>,
}

impl LengthStats {
    /// Aggregate `(length, word count)` pairs.
    ///
    /// Pairs with a zero count are skipped so an empty bucket never
    /// contributes a shortest/longest length.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut stats = LengthStats::default();
        let mut shortest = None;

        for (length, count) in counts {
            if count == 0 {
                continue;
            }
            *stats.counts_by_length.entry(length).or_insert(0) += count;
            stats.total_words += count;
            shortest = Some(shortest.map_or(length, |s: usize| s.min(length)));
            stats.longest_word_length = stats.longest_word_length.max(length);
        }

        stats.shortest_word_length = shortest.unwrap_or(0);
        stats
    }

    /// Returns true if no words were counted
    pub fn is_empty(&self) -> bool {
        self.total_words == 0
    }

    /// Number of words of the given length
    pub fn count_for(&self, length: usize) -> usize {
        self.counts_by_length.get(&length).copied().unwrap_or(0)
    }
}
