//! The two lookup services behind the autocomplete endpoints.
//!
//! Both are constructed with a [`Catalog`] handle and their result cap,
//! and are stateless across calls: every lookup re-reads the catalog.
//! Minimum-length gating is the HTTP boundary's job, not theirs — a
//! one-character query handed to these services is looked up as given.
//!
//! Catalog errors are propagated unchanged; the boundary is the single
//! place that turns them into an error envelope.

use std::sync::Arc;

use anyhow::Result;

use crate::catalog::Catalog;
use crate::matching::matches_alias;
use crate::models::{ColorRecord, QualityRecord};

/// Resolves color suggestions by label substring, optionally scoped to a
/// single quality code.
///
/// The substring filter is pushed down to the catalog read together with
/// the result cap, so the store never returns rows the caller will drop.
#[derive(Clone)]
pub struct ColorLookupService {
    catalog: Arc<dyn Catalog>,
    max_results: i64,
}

impl ColorLookupService {
    pub fn new(catalog: Arc<dyn Catalog>, max_results: i64) -> Self {
        Self {
            catalog,
            max_results,
        }
    }

    /// Colors whose label contains `text`, restricted to `scope` if given
    /// (exact quality-code equality). At most `max_results` rows.
    pub async fn lookup(&self, text: &str, scope: Option<&str>) -> Result<Vec<ColorRecord>> {
        self.catalog
            .colors_matching(text, scope, self.max_results)
            .await
    }
}

/// Resolves quality suggestions by code or alias.
///
/// Alias matching cannot be expressed as an indexed store predicate, so
/// the service over-fetches a bounded candidate window and filters
/// in-process. Matches past the window are unreachable; the window size
/// bounds worst-case work per request.
#[derive(Clone)]
pub struct QualityLookupService {
    catalog: Arc<dyn Catalog>,
    candidate_window: i64,
    max_results: i64,
}

impl QualityLookupService {
    pub fn new(catalog: Arc<dyn Catalog>, candidate_window: i64, max_results: i64) -> Self {
        Self {
            catalog,
            candidate_window,
            max_results,
        }
    }

    /// Qualities whose code or any alias contains `text`, in window read
    /// order, capped at `max_results`.
    pub async fn lookup(&self, text: &str) -> Result<Vec<QualityRecord>> {
        let candidates = self.catalog.qualities_window(self.candidate_window).await?;
        Ok(candidates
            .into_iter()
            .filter(|q| matches_alias(q, text))
            .take(self.max_results as usize)
            .collect())
    }
}
