//! Normalization and matching predicates shared by the lookup services
//! and the in-memory catalog.
//!
//! Matching is pure case-insensitive substring containment. No token
//! prefixing, no edit distance, no locale-aware folding.

use crate::models::QualityRecord;

/// Case-insensitive containment test. Both sides are lowercased before
/// comparison.
pub fn matches_substring(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// True if the quality's code contains the needle, or any of its aliases
/// does. An empty alias list can only match through the code.
pub fn matches_alias(record: &QualityRecord, needle: &str) -> bool {
    matches_substring(&record.code, needle)
        || record.aliases.iter().any(|a| matches_substring(a, needle))
}
