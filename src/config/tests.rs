use crate::Cli;
use crate::config::{AppConfig, FileConfig, load_file_config, load_project_config};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_load_project_config() {
    let temp_dir = TempDir::new().unwrap();
    let project_root = temp_dir.path();

    let config_content = r#"
db_path = "data/defects.db"
log_level = "debug"
schema_only = true
connect_timeout_ms = 2000
"#;

    fs::write(project_root.join("defect-db.toml"), config_content).unwrap();

    let project_cfg = load_project_config(project_root).unwrap();

    assert_eq!(project_cfg.db_path, Some(PathBuf::from("data/defects.db")));
    assert_eq!(project_cfg.log_level, Some("debug".to_string()));
    assert_eq!(project_cfg.schema_only, Some(true));
    assert_eq!(project_cfg.connect_timeout_ms, Some(2000));
    assert_eq!(project_cfg.log_file, None);
}

#[test]
fn test_load_project_config_not_exists() {
    let temp_dir = TempDir::new().unwrap();

    let project_cfg = load_project_config(temp_dir.path()).unwrap();

    assert_eq!(project_cfg, FileConfig::default());
}

#[test]
fn test_load_file_config_rejects_invalid_toml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.toml");
    fs::write(&path, "db_path = [unterminated").unwrap();

    assert!(load_file_config(&path).is_err());
    assert!(load_file_config(&temp_dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_no_arguments_uses_defaults() {
    let cli = Cli::parse_from(["defect-db"]);
    let cfg = AppConfig::merge(cli, FileConfig::default());

    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.db_path, PathBuf::from("smartphone_defects.db"));
    assert!(!cfg.schema_only);
}

#[test]
fn test_cli_overrides_file_config() {
    let cli = Cli::parse_from(["defect-db", "--db-path", "cli.db", "--log-level", "warn"]);
    let file_cfg = FileConfig {
        db_path: Some(PathBuf::from("file.db")),
        log_level: Some("debug".to_string()),
        log_file: Some(PathBuf::from("defect-db.log")),
        schema_only: Some(true),
        connect_timeout_ms: Some(1500),
    };

    let cfg = AppConfig::merge(cli, file_cfg);

    assert_eq!(cfg.db_path, PathBuf::from("cli.db"));
    assert_eq!(cfg.log_level, "warn");
    assert_eq!(cfg.log_file, Some(PathBuf::from("defect-db.log")));
    assert!(cfg.schema_only);
    assert_eq!(cfg.connect_timeout().as_millis(), 1500);
}
