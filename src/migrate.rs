use anyhow::Result;

use crate::config::Config;
use crate::db;

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(&config.db.path).await?;

    // Quality master records; aliases is a JSON array of strings.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS qualities (
            code TEXT PRIMARY KEY,
            aliases TEXT NOT NULL DEFAULT '[]'
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Color variants, scoped to a quality. (quality_code, color_label)
    // is unique in the master data; the lookup path does not rely on it.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS quality_colors (
            quality_code TEXT NOT NULL,
            color_label TEXT NOT NULL,
            color_code TEXT NOT NULL,
            UNIQUE(quality_code, color_label),
            FOREIGN KEY (quality_code) REFERENCES qualities(code)
        )
        "#,
    )
    .execute(&pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_quality_colors_quality ON quality_colors(quality_code)",
    )
    .execute(&pool)
    .await?;

    pool.close().await;
    Ok(())
}
