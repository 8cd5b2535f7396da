//! Catalog abstraction for quality/color master data.
//!
//! The [`Catalog`] trait is the read-only repository the lookup services
//! are constructed with. It carries exactly the two bounded reads the
//! services need, enabling pluggable backends (SQLite, in-memory for
//! tests). The lookup path never writes; imports go through the pool
//! directly (see `import`).
//!
//! Implementations must be `Send + Sync` to work with async runtimes.

pub mod memory;
pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{ColorRecord, QualityRecord};

/// Read-only access to the quality/color catalog.
///
/// # Operations
///
/// | Method | Purpose |
/// |--------|---------|
/// | [`colors_matching`](Catalog::colors_matching) | Colors whose label contains a fragment, optionally scoped to one quality |
/// | [`qualities_window`](Catalog::qualities_window) | Bounded window of quality records for in-process alias filtering |
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Colors whose `color_label` case-insensitively contains
    /// `label_fragment`. If `quality_code` is given, only colors of that
    /// exact quality (case-sensitive equality, not substring) are
    /// considered. Returns at most `limit` rows.
    async fn colors_matching(
        &self,
        label_fragment: &str,
        quality_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ColorRecord>>;

    /// Up to `limit` quality records (code + aliases), unfiltered. Alias
    /// matching happens in the lookup service, not here: aliases are a
    /// free-form collection and cannot be pushed down as an indexed
    /// predicate.
    async fn qualities_window(&self, limit: i64) -> Result<Vec<QualityRecord>>;
}
