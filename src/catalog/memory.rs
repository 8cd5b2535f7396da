//! In-memory [`Catalog`] implementation for testing.
//!
//! Uses `Vec`s behind `std::sync::RwLock` for thread safety and the same
//! `matching` predicates as the lookup services, so test fixtures and the
//! SQLite backend agree on what counts as a match.

use std::sync::RwLock;

use anyhow::Result;
use async_trait::async_trait;

use crate::matching::matches_substring;
use crate::models::{ColorRecord, QualityRecord};

use super::Catalog;

/// In-memory catalog for tests and fixtures.
#[derive(Default)]
pub struct InMemoryCatalog {
    qualities: RwLock<Vec<QualityRecord>>,
    colors: RwLock<Vec<ColorRecord>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_quality(&self, record: QualityRecord) {
        self.qualities.write().unwrap().push(record);
    }

    pub fn insert_color(&self, record: ColorRecord) {
        self.colors.write().unwrap().push(record);
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn colors_matching(
        &self,
        label_fragment: &str,
        quality_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ColorRecord>> {
        let colors = self.colors.read().unwrap();
        let mut matched: Vec<ColorRecord> = colors
            .iter()
            .filter(|c| match quality_code {
                Some(code) => c.quality_code == code,
                None => true,
            })
            .filter(|c| matches_substring(&c.color_label, label_fragment))
            .cloned()
            .collect();
        matched.sort_by(|a, b| a.color_label.cmp(&b.color_label));
        matched.truncate(limit as usize);
        Ok(matched)
    }

    async fn qualities_window(&self, limit: i64) -> Result<Vec<QualityRecord>> {
        let qualities = self.qualities.read().unwrap();
        let mut window: Vec<QualityRecord> = qualities.iter().cloned().collect();
        window.sort_by(|a, b| a.code.cmp(&b.code));
        window.truncate(limit as usize);
        Ok(window)
    }
}
