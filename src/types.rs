//! Core types for the selection store.

use crate::error::{Result, SelectionError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How `select_only_these_items` treats several input items sharing a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeyPolicy {
    /// Keep every item in the given order. The key set still holds each key
    /// once, so `selected` may be longer than the key set.
    #[default]
    Retain,
    /// Keep only the first item for each key.
    Collapse,
}

impl fmt::Display for DuplicateKeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateKeyPolicy::Retain => write!(f, "retain"),
            DuplicateKeyPolicy::Collapse => write!(f, "collapse"),
        }
    }
}

/// Selection store configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Duplicate-key handling for bulk replacement.
    /// Default: `Retain`
    pub duplicate_keys: DuplicateKeyPolicy,
}

impl SelectionConfig {
    /// Parse a config document. Missing fields take their defaults.
    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| SelectionError::InvalidConfig(e.to_string()))
    }

    /// Encode as JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
