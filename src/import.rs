//! Catalog master-data import.
//!
//! Loads a JSON file of the form
//! `{"qualities": [{"code", "aliases"}], "colors": [{"quality_code",
//! "color_label", "color_code"}]}` and upserts it into SQLite on the
//! natural keys. This is the only write path in the crate; the lookup
//! services stay behind the read-only [`Catalog`](crate::catalog::Catalog)
//! trait.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use sqlx::SqlitePool;
use std::path::Path;

use crate::config::Config;
use crate::db;
use crate::models::{ColorRecord, QualityRecord};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    qualities: Vec<QualityRecord>,
    #[serde(default)]
    colors: Vec<ColorRecord>,
}

pub async fn run_import(config: &Config, file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read catalog file: {}", file.display()))?;
    let catalog: CatalogFile =
        serde_json::from_str(&content).with_context(|| "Failed to parse catalog file")?;

    for q in &catalog.qualities {
        if q.code.trim().is_empty() {
            bail!("Quality with empty code in {}", file.display());
        }
    }
    for c in &catalog.colors {
        if c.quality_code.trim().is_empty() || c.color_label.trim().is_empty() {
            bail!("Color with empty quality_code or color_label in {}", file.display());
        }
    }

    let pool = db::connect(&config.db.path).await?;

    let mut qualities_upserted = 0u64;
    let mut colors_upserted = 0u64;

    for q in &catalog.qualities {
        upsert_quality(&pool, q).await?;
        qualities_upserted += 1;
    }
    for c in &catalog.colors {
        upsert_color(&pool, c).await?;
        colors_upserted += 1;
    }

    pool.close().await;

    println!("import {}", file.display());
    println!("  upserted qualities: {}", qualities_upserted);
    println!("  upserted colors: {}", colors_upserted);
    println!("  ok");

    Ok(())
}

async fn upsert_quality(pool: &SqlitePool, record: &QualityRecord) -> Result<()> {
    let aliases_json = serde_json::to_string(&record.aliases)?;
    sqlx::query(
        r#"
        INSERT INTO qualities (code, aliases)
        VALUES (?, ?)
        ON CONFLICT(code) DO UPDATE SET aliases = excluded.aliases
        "#,
    )
    .bind(&record.code)
    .bind(&aliases_json)
    .execute(pool)
    .await?;
    Ok(())
}

async fn upsert_color(pool: &SqlitePool, record: &ColorRecord) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO quality_colors (quality_code, color_label, color_code)
        VALUES (?, ?, ?)
        ON CONFLICT(quality_code, color_label) DO UPDATE SET color_code = excluded.color_code
        "#,
    )
    .bind(&record.quality_code)
    .bind(&record.color_label)
    .bind(&record.color_code)
    .execute(pool)
    .await?;
    Ok(())
}
