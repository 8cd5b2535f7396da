//! Core data models for the catalog lookup pipeline.
//!
//! These types are both the storage shape and the wire shape: the HTTP
//! boundary serializes them directly, so field names here are the JSON
//! field names clients see.

use serde::{Deserialize, Serialize};

/// A textile quality master record.
///
/// `code` is the short unique identifier (case-insensitive for matching,
/// case-preserving for display). `aliases` is an ordered list of
/// human-entered synonyms; an absent list in the source data is the same
/// as an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRecord {
    pub code: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// A color variant scoped to exactly one quality.
///
/// `color_label` is the primary match target; `color_code` is a secondary
/// identifier (hex or catalog code) that is returned but never matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub quality_code: String,
    pub color_label: String,
    pub color_code: String,
}
