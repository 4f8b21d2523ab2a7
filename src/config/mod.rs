use crate::database::connection::DEFAULT_DB_FILE;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Config file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "defect-db.toml";

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 8_000;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: String,
    // Log to this file instead of stderr
    pub log_file: Option<PathBuf>,
    pub schema_only: bool,
    pub connect_timeout_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE),
            log_level: "info".to_string(),
            log_file: None,
            schema_only: false,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FileConfig {
    pub db_path: Option<PathBuf>,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub schema_only: Option<bool>,
    pub connect_timeout_ms: Option<u64>,
}

impl AppConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn from_cli(cli: crate::Cli) -> Result<Self> {
        let file_cfg = match &cli.config {
            Some(path) => load_file_config(path)?,
            None => {
                let cwd = std::env::current_dir().context("resolve current dir")?;
                load_project_config(&cwd)?
            }
        };
        Ok(Self::merge(cli, file_cfg))
    }

    /// CLI flags win over the config file, which wins over defaults.
    pub fn merge(cli: crate::Cli, file_cfg: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            db_path: cli
                .db_path
                .or(file_cfg.db_path)
                .unwrap_or(defaults.db_path),
            log_level: cli
                .log_level
                .or(file_cfg.log_level)
                .unwrap_or(defaults.log_level),
            log_file: file_cfg.log_file,
            schema_only: cli.schema_only || file_cfg.schema_only.unwrap_or(defaults.schema_only),
            connect_timeout_ms: file_cfg
                .connect_timeout_ms
                .unwrap_or(defaults.connect_timeout_ms),
        }
    }
}

/// Reads a config file named explicitly on the command line.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("read config file: {}", path.display()))?;
    toml::from_str::<FileConfig>(&s)
        .with_context(|| format!("parse config file: {}", path.display()))
}

/// Loads `defect-db.toml` from `dir` if it exists.
pub fn load_project_config(dir: &Path) -> Result<FileConfig> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        load_file_config(&path)
    } else {
        Ok(FileConfig::default())
    }
}

#[cfg(test)]
mod tests;
