//! Index configuration
//!
//! Loaded from a JSON file or built in code, immutable once a view is
//! constructed. Every field has a default, so `{}` is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::errors::{IndexError, IndexResult};

/// Unit used to measure a word's length.
///
/// The same unit is used for insertion and for every query on a given index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Unicode scalar values
    #[default]
    Chars,
    /// UTF-8 code units
    Bytes,
}

impl LengthUnit {
    /// Measure `word` in this unit
    pub fn measure(&self, word: &str) -> usize {
        match self {
            LengthUnit::Chars => word.chars().count(),
            LengthUnit::Bytes => word.len(),
        }
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Chars => "chars",
            LengthUnit::Bytes => "bytes",
        }
    }
}

/// Configuration for a length index
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexConfig {
    /// How word length is counted (default: chars)
    #[serde(default)]
    pub length_unit: LengthUnit,

    /// Sort each bucket when a snapshot is derived (default: false).
    ///
    /// When false, words keep their insertion order.
    #[serde(default)]
    pub sort_words: bool,
}

impl IndexConfig {
    /// Create a configuration
    pub fn new(length_unit: LengthUnit, sort_words: bool) -> Self {
        Self {
            length_unit,
            sort_words,
        }
    }

    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> IndexResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            IndexError::InvalidConfig(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Parse configuration from a JSON string
    pub fn from_json(content: &str) -> IndexResult<Self> {
        let config: IndexConfig = serde_json::from_str(content)
            .map_err(|e| IndexError::InvalidConfig(format!("invalid config JSON: {}", e)))?;
        Ok(config)
    }
}
