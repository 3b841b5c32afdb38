//! wordlen - index a word list by length
//!
//! Exact-length and inclusive-range lookups with statistics scoped to each
//! query. A view can be populated from a list, a future, or a push-style
//! producer.
//!
//! ```ignore
//! use wordlen::WordLengthView;
//!
//! let view = WordLengthView::from_words(["a", "bb", "ccc"]);
//! let result = view.get_by_range(2, 3)?;
//! assert_eq!(result.stats.total_words, 2);
//! ```

pub mod cli;
pub mod index;
pub mod observability;
pub mod view;

pub use index::{IndexConfig, LengthQueryResult, LengthRange, LengthSnapshot, LengthStats};
pub use view::{AcquisitionError, Readiness, WordLengthView, WordSink, WordSource};
