use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// File name used when no database path is configured.
pub const DEFAULT_DB_FILE: &str = "smartphone_defects.db";

/// Opens (or creates) the SQLite database with a single pooled connection.
///
/// # Arguments
/// * `db_path` - Path to the SQLite database file.
/// * `connect_timeout` - How long to wait for the connection to open.
///
/// # Returns
/// * `Result<DatabaseConnection, DbErr>` - The database connection or an error.
pub async fn connect_database(
    db_path: &Path,
    connect_timeout: Duration,
) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to SQLite database at: {}", db_path.display());

    let mut opt = ConnectOptions::new(sqlite_url(db_path));
    opt.max_connections(1)
        .min_connections(1)
        .connect_timeout(connect_timeout)
        .acquire_timeout(connect_timeout)
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Database::connect(opt).await
}

/// Builds the connection URL. `mode=rwc`: read, write, create.
pub fn sqlite_url(db_path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", db_path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_sqlite_url() {
        assert_eq!(
            sqlite_url(Path::new("data/defects.db")),
            "sqlite://data/defects.db?mode=rwc"
        );
    }

    #[tokio::test]
    async fn test_connect_creates_file() {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = tmp_dir.path().join("fresh.db");
        let db = connect_database(&db_path, Duration::from_secs(5))
            .await
            .expect("Failed to connect to test database");
        assert!(db_path.exists());
        db.close().await.expect("Failed to close connection");
    }

    #[tokio::test]
    async fn test_connect_fails_for_missing_directory() {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = tmp_dir.path().join("missing").join("defects.db");
        assert!(
            connect_database(&db_path, Duration::from_secs(1))
                .await
                .is_err()
        );
    }
}
