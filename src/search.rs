//! CLI front door to the lookup services.
//!
//! Applies the same minimum-length gate as the HTTP boundary and prints
//! matches in a terminal-friendly layout.

use std::sync::Arc;

use anyhow::{bail, Result};

use crate::catalog::sqlite::SqliteCatalog;
use crate::config::Config;
use crate::db;
use crate::lookup::{ColorLookupService, QualityLookupService};

pub async fn run_search(
    config: &Config,
    entity: &str,
    query: &str,
    quality: Option<String>,
) -> Result<()> {
    let query = query.trim();
    if query.chars().count() < config.lookup.min_query_len {
        println!(
            "Query too short (minimum {} characters).",
            config.lookup.min_query_len
        );
        return Ok(());
    }

    let pool = db::connect(&config.db.path).await?;
    let catalog = Arc::new(SqliteCatalog::new(pool.clone()));

    match entity {
        "colors" => {
            let service = ColorLookupService::new(catalog, config.lookup.max_results);
            let results = service.lookup(query, quality.as_deref()).await?;
            if results.is_empty() {
                println!("No results.");
            }
            for (i, c) in results.iter().enumerate() {
                println!("{}. {} / {} ({})", i + 1, c.quality_code, c.color_label, c.color_code);
            }
        }
        "qualities" => {
            if quality.is_some() {
                bail!("--quality only applies to color search");
            }
            let service = QualityLookupService::new(
                catalog,
                config.lookup.candidate_window,
                config.lookup.max_results,
            );
            let results = service.lookup(query).await?;
            if results.is_empty() {
                println!("No results.");
            }
            for (i, q) in results.iter().enumerate() {
                if q.aliases.is_empty() {
                    println!("{}. {}", i + 1, q.code);
                } else {
                    println!("{}. {} ({})", i + 1, q.code, q.aliases.join(", "));
                }
            }
        }
        other => bail!("Unknown entity: '{}'. Use colors or qualities.", other),
    }

    pool.close().await;
    Ok(())
}
