//! SQLite-backed [`Catalog`] over the `qualities` and `quality_colors`
//! tables.
//!
//! Only exact predicates (the quality-code scope) are pushed down to
//! SQL. Label and alias matching happen in-process through `matching`,
//! the same Unicode case folding the in-memory backend uses — SQLite's
//! `lower()`/`LIKE` fold ASCII only and would miss labels like "Écru".
//! Aliases are stored as a JSON array in a TEXT column.

use anyhow::{Context, Result};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool};

use crate::matching::matches_substring;
use crate::models::{ColorRecord, QualityRecord};

use super::Catalog;

/// Catalog reads backed by a shared SQLite pool.
pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Catalog for SqliteCatalog {
    async fn colors_matching(
        &self,
        label_fragment: &str,
        quality_code: Option<&str>,
        limit: i64,
    ) -> Result<Vec<ColorRecord>> {
        let rows = match quality_code {
            Some(code) => {
                sqlx::query(
                    r#"
                    SELECT quality_code, color_label, color_code
                    FROM quality_colors
                    WHERE quality_code = ?
                    ORDER BY color_label
                    "#,
                )
                .bind(code)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT quality_code, color_label, color_code
                    FROM quality_colors
                    ORDER BY color_label
                    "#,
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        let records = rows
            .iter()
            .map(|row| ColorRecord {
                quality_code: row.get("quality_code"),
                color_label: row.get("color_label"),
                color_code: row.get("color_code"),
            })
            .filter(|c| matches_substring(&c.color_label, label_fragment))
            .take(limit as usize)
            .collect();

        Ok(records)
    }

    async fn qualities_window(&self, limit: i64) -> Result<Vec<QualityRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT code, aliases
            FROM qualities
            ORDER BY code
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            let code: String = row.get("code");
            let aliases_json: String = row.get("aliases");
            let aliases: Vec<String> = serde_json::from_str(&aliases_json)
                .with_context(|| format!("Malformed aliases column for quality '{}'", code))?;
            records.push(QualityRecord { code, aliases });
        }

        Ok(records)
    }
}
