//! Runtime configuration for building a visited-state cache.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rules::Rules;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether card suits are treated as symmetric when building signatures.
///
/// Switching away from `Auto` changes cache semantics: positions that hashed
/// distinct may intentionally collapse to one signature, or the reverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuitSymmetry {
    /// Symmetric iff the variant has a hole pile.
    #[default]
    Auto,
    /// Always symmetric.
    Forced,
    /// Never symmetric.
    Disabled,
}

impl SuitSymmetry {
    #[inline]
    pub fn is_symmetric(self, rules: &Rules) -> bool {
        match self {
            SuitSymmetry::Auto => rules.hole,
            SuitSymmetry::Forced => true,
            SuitSymmetry::Disabled => false,
        }
    }
}

/// Which cache container to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CacheKind {
    #[default]
    Unlimited,
    Lru { max_items: usize },
    /// LRU whose capacity is derived from an approximate memory budget.
    LruBudget { mib: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CacheConfig {
    pub kind: CacheKind,
    pub suit_symmetry: SuitSymmetry,
}

impl CacheConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&data)
    }
}
