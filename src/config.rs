use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub db: DbConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DbConfig {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    /// Queries shorter than this are answered with an empty list without
    /// touching the catalog.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Hard cap on returned suggestions.
    #[serde(default = "default_max_results")]
    pub max_results: i64,
    /// How many quality rows are read before alias filtering. Matches
    /// beyond this window are unreachable.
    #[serde(default = "default_candidate_window")]
    pub candidate_window: i64,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            max_results: default_max_results(),
            candidate_window: default_candidate_window(),
        }
    }
}

fn default_min_query_len() -> usize {
    3
}
fn default_max_results() -> i64 {
    10
}
fn default_candidate_window() -> i64 {
    50
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub bind: String,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.lookup.min_query_len == 0 {
        anyhow::bail!("lookup.min_query_len must be >= 1");
    }

    if config.lookup.max_results < 1 {
        anyhow::bail!("lookup.max_results must be >= 1");
    }

    if config.lookup.candidate_window < config.lookup.max_results {
        anyhow::bail!("lookup.candidate_window must be >= lookup.max_results");
    }

    Ok(config)
}
