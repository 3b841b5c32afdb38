//! Length index subsystem for wordlen
//!
//! Words are grouped into buckets keyed by length. The index is in-memory
//! only and is written during population, then read through snapshots.
//!
//! # Design Principles
//!
//! - Owned state: only `LengthIndex` methods mutate the buckets
//! - Deterministic: BTreeMap iteration order, lengths ascending
//! - Snapshot per query: every read returns an owned copy
//!
//! # Invariants
//!
//! - A word under key `L` measures exactly `L` in the configured unit
//! - Zero-length words are rejected, never stored under key 0
//! - Statistics report 0 for shortest/longest when empty

mod buckets;
mod config;
mod errors;
mod range;
mod snapshot;
mod stats;

pub use buckets::LengthIndex;
pub use config::{IndexConfig, LengthUnit};
pub use errors::{IndexError, IndexResult};
pub use range::{LengthRange, UNBOUNDED};
pub use snapshot::{LengthQueryResult, LengthSnapshot};
pub use stats::LengthStats;
