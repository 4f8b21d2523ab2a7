mod config;
mod database;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;

use crate::config::AppConfig;
use crate::database::DefectStore;
use crate::database::seed::SeedReport;
use crate::logging::init_logging;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "defect-db",
    version,
    about = "Create and seed the smartphone defect tracking database"
)]
pub struct Cli {
    /// Path to the SQLite database file
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// TOML config file (defaults to ./defect-db.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error,warn,info,debug,trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Create the schema without inserting seed rows
    #[arg(long, action = ArgAction::SetTrue)]
    schema_only: bool,
}

/// What one run did to the store.
#[derive(Debug)]
struct RunOutcome {
    db_path: PathBuf,
    seeded: Option<SeedReport>,
    counts: Vec<(&'static str, u64)>,
}

impl RunOutcome {
    fn confirmation(&self) -> String {
        match self.seeded {
            Some(_) => format!(
                "Database {} created and populated with sample data.",
                self.db_path.display()
            ),
            None => format!("Database {} schema initialized.", self.db_path.display()),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = AppConfig::from_cli(cli)?;
    init_logging(&cfg.log_level, cfg.log_file.as_deref())?;
    info!(?cfg, "app config");

    let outcome = run(&cfg).await?;
    info!(tables = outcome.counts.len(), "run complete");
    println!("{}", outcome.confirmation());
    Ok(())
}

/// Opens the store, creates the schema, seeds it and closes the connection.
async fn run(cfg: &AppConfig) -> Result<RunOutcome> {
    let store = DefectStore::open(&cfg.db_path, cfg.connect_timeout())
        .await
        .with_context(|| format!("open database: {}", cfg.db_path.display()))?;

    store
        .initialize_schema()
        .await
        .context("initialize schema")?;

    let seeded = if cfg.schema_only {
        info!("schema_only set, skipping seed data");
        None
    } else {
        Some(store.seed().await.context("seed database")?)
    };

    let counts = store.table_counts().await.context("count table rows")?;
    for (table, rows) in &counts {
        info!(table, rows, "table ready");
    }

    let db_path = store.db_path().to_path_buf();
    store.close().await.context("close database")?;

    Ok(RunOutcome {
        db_path,
        seeded,
        counts,
    })
}
