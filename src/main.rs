//! # Loomdex CLI
//!
//! The `loomdex` binary manages the catalog database and runs the
//! autocomplete server.
//!
//! ## Usage
//!
//! ```bash
//! loomdex --config ./config/loomdex.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `loomdex init` | Create the SQLite database and run schema migrations |
//! | `loomdex import <file>` | Load catalog master data from a JSON file |
//! | `loomdex search <entity> "<query>"` | Resolve suggestions from the terminal |
//! | `loomdex serve` | Start the autocomplete HTTP server |

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use loomdex::{config, import, migrate, search, server};

/// Loomdex — autocomplete lookup service for a textile quality/color
/// catalog.
#[derive(Parser)]
#[command(
    name = "loomdex",
    about = "Autocomplete lookup service for a textile quality/color catalog",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    #[arg(long, global = true, default_value = "./config/loomdex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Initialize the database schema.
    ///
    /// Creates the SQLite database file and the `qualities` and
    /// `quality_colors` tables. Idempotent — running it multiple times
    /// is safe.
    Init,

    /// Load catalog master data from a JSON file.
    ///
    /// The file holds `qualities` (code + aliases) and `colors`
    /// (quality_code, color_label, color_code); rows are upserted on
    /// their natural keys.
    Import {
        /// Path to the catalog JSON file.
        file: PathBuf,
    },

    /// Resolve autocomplete suggestions from the terminal.
    Search {
        /// Entity to search: `colors` or `qualities`.
        entity: String,
        /// Partial text to match (minimum length applies).
        query: String,
        /// Restrict color results to one quality code (exact match).
        #[arg(long)]
        quality: Option<String>,
    },

    /// Start the autocomplete HTTP server.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Init => {
            migrate::run_migrations(&config).await?;
            println!("Database initialized at {}", config.db.path.display());
        }
        Commands::Import { file } => {
            import::run_import(&config, &file).await?;
        }
        Commands::Search {
            entity,
            query,
            quality,
        } => {
            search::run_search(&config, &entity, &query, quality).await?;
        }
        Commands::Serve => {
            server::run_server(&config).await?;
        }
    }

    Ok(())
}
