//! Query Invariant Tests
//!
//! Tests for length query invariants:
//! - Every word lives in exactly one bucket, its own length
//! - Range results are subsets of the full result
//! - Statistics are scoped to the query that produced them
//! - Repeated queries return equal results

use std::collections::BTreeSet;

use wordlen::index::{IndexConfig, IndexError, LengthRange, LengthUnit};
use wordlen::view::{WordLengthView, WordSource};
use wordlen::LengthQueryResult;

// =============================================================================
// Helper Functions
// =============================================================================

const WORDS: &[&str] = &[
    "a", "in", "on", "the", "cat", "dog", "bird", "fish", "horse", "zebra", "giraffe", "dog",
];

fn sample_view() -> WordLengthView {
    WordLengthView::from_words(WORDS.iter().copied())
}

fn pairs(result: &LengthQueryResult) -> BTreeSet<(usize, String)> {
    result
        .words
        .iter()
        .flat_map(|(len, words)| words.iter().map(move |w| (len, w.clone())))
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

/// Whole-index statistics for a three word list.
#[test]
fn test_stats_over_whole_index() {
    let view = WordLengthView::from_words(["a", "bb", "ccc"]);
    let stats = view.stats();

    assert_eq!(stats.total_words, 3);
    assert_eq!(stats.shortest_word_length, 1);
    assert_eq!(stats.longest_word_length, 3);
    assert_eq!(
        stats.counts_by_length.into_iter().collect::<Vec<_>>(),
        vec![(1, 1), (2, 1), (3, 1)]
    );
}

/// Range query statistics cover only the range.
#[test]
fn test_range_stats_scoped_to_result() {
    let view = WordLengthView::from_words(["a", "bb", "ccc"]);
    let result = view.get_by_range(2, 3).unwrap();

    assert_eq!(result.words.get(2), ["bb"]);
    assert_eq!(result.words.get(3), ["ccc"]);
    assert!(result.words.get(1).is_empty());
    assert_eq!(result.stats.total_words, 2);
    assert_eq!(result.stats.shortest_word_length, 2);
    assert_eq!(result.stats.longest_word_length, 3);

    // Whole-index stats are unaffected by the scoped query
    assert_eq!(view.stats().total_words, 3);
}

// =============================================================================
// Bucket Membership
// =============================================================================

/// Counts add up to the number of words supplied.
#[test]
fn test_counts_sum_to_input_size() {
    let view = sample_view();
    let stats = view.stats();

    assert_eq!(stats.counts_by_length.values().sum::<usize>(), WORDS.len());
    assert_eq!(stats.total_words, WORDS.len());
}

/// Each word is found under its own length and nowhere else.
#[test]
fn test_word_in_exactly_one_bucket() {
    let view = sample_view();
    let all = view.get_all();

    for word in WORDS {
        let len = word.chars().count();
        assert!(view.get_by_length(len).words.get(len).contains(&word.to_string()));

        for (other_len, words) in all.words.iter() {
            if other_len != len {
                assert!(!words.contains(&word.to_string()));
            }
        }
    }
}

/// Duplicate words are kept.
#[test]
fn test_duplicates_kept() {
    let view = sample_view();
    assert_eq!(view.get_by_length(3).words.get(3), ["the", "cat", "dog", "dog"]);
}

/// Lengths come back ascending regardless of insertion order.
#[test]
fn test_lengths_ascending() {
    let view = WordLengthView::from_words(["seven77", "a", "four", "bb"]);
    let lengths: Vec<usize> = view.get_all().words.lengths().collect();
    assert_eq!(lengths, vec![1, 2, 4, 7]);
}

// =============================================================================
// Range Semantics
// =============================================================================

/// Range results are a subset of the full result.
#[test]
fn test_range_subset_of_all() {
    let view = sample_view();
    let all = pairs(&view.get_all());

    for min in 0..9 {
        for max in min..9 {
            let range = pairs(&view.get_by_range(min, max).unwrap());
            assert!(range.is_subset(&all), "range [{}, {}] not a subset", min, max);
        }
    }
}

/// A single-length range equals the single-length query.
#[test]
fn test_exact_range_equals_length_query() {
    let view = sample_view();
    for len in 0..10 {
        assert_eq!(view.get_by_range(len, len).unwrap(), view.get_by_length(len));
    }
}

/// The explicit full range equals the no-argument query.
#[test]
fn test_full_range_equals_all() {
    let view = sample_view();
    assert_eq!(view.query(LengthRange::all()), view.get_all());
    assert_eq!(view.get_by_range(1, usize::MAX).unwrap(), view.get_all());
}

/// A length with no words returns an empty result.
#[test]
fn test_missing_length_empty() {
    let view = sample_view();
    let result = view.get_by_length(42);

    assert!(result.words.is_empty());
    assert_eq!(result.stats.total_words, 0);
    assert_eq!(result.stats.shortest_word_length, 0);
    assert_eq!(result.stats.longest_word_length, 0);
}

/// Inverted ranges are rejected, not swapped.
#[test]
fn test_inverted_range_rejected() {
    let view = sample_view();
    assert_eq!(
        view.get_by_range(5, 2),
        Err(IndexError::InvalidRange { min: 5, max: 2 })
    );
}

// =============================================================================
// Determinism
// =============================================================================

/// Repeated queries return equal results.
#[test]
fn test_queries_idempotent() {
    let view = sample_view();
    let first = view.get_all();
    for _ in 0..50 {
        assert_eq!(view.get_all(), first);
    }
    assert_eq!(view.metrics().queries_executed, 51);
}

/// Statistics invariant holds for every range.
#[test]
fn test_stats_bounds_invariant() {
    let view = sample_view();
    for min in 0..9 {
        for max in min..9 {
            let stats = view.get_by_range(min, max).unwrap().stats;
            if stats.total_words > 0 {
                assert!(stats.shortest_word_length <= stats.longest_word_length);
            } else {
                assert_eq!(stats.shortest_word_length, 0);
                assert_eq!(stats.longest_word_length, 0);
            }
        }
    }
}

// =============================================================================
// Policies
// =============================================================================

/// Empty words are rejected and counted.
#[test]
fn test_empty_words_rejected() {
    let view = WordLengthView::from_words(["", "a", ""]);

    assert_eq!(view.stats().total_words, 1);
    assert!(view.get_by_length(0).words.is_empty());
    assert_eq!(view.metrics().words_rejected, 2);
    assert_eq!(view.metrics().words_inserted, 1);
}

/// Sorting is applied to query results when configured.
#[test]
fn test_sorted_buckets_when_configured() {
    let config = IndexConfig::new(LengthUnit::Chars, true);
    let view = WordLengthView::with_config(WordSource::words(WORDS.iter().copied()), config);
    assert_eq!(view.get_by_length(3).words.get(3), ["cat", "dog", "dog", "the"]);
}

/// Lengths count characters by default, bytes when configured.
#[test]
fn test_length_unit_consistent() {
    let chars = WordLengthView::from_words(["café"]);
    assert_eq!(chars.get_by_length(4).stats.total_words, 1);

    let bytes = WordLengthView::with_config(
        WordSource::words(["café"]),
        IndexConfig::new(LengthUnit::Bytes, false),
    );
    assert_eq!(bytes.get_by_length(5).stats.total_words, 1);
    assert!(bytes.get_by_length(4).words.is_empty());
}
