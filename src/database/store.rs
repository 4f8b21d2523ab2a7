use crate::database::connection::connect_database;
use crate::database::entities::{
    DefectEntity, DefectImageEntity, DefectLocationEntity, DefectTypeEntity, DeviceEntity,
    DiagnosisEntity, ManufacturerEntity, RepairEntity, SeverityLevelEntity,
    SmartphoneModelEntity, TechnicianEntity,
};
use crate::database::error::StoreError;
use crate::database::schema::initialize_schema;
use crate::database::seed::{SeedLoader, SeedReport};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Owns the single connection to the defect database for one run.
pub struct DefectStore {
    db_path: PathBuf,
    db_conn: DatabaseConnection,
}

impl DefectStore {
    /// Opens the database file, creating it and its parent directory if needed.
    pub async fn open(db_path: &Path, connect_timeout: Duration) -> Result<Self, StoreError> {
        if let Some(parent_dir) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent_dir).map_err(StoreError::CreateDir)?;
        }

        let db_conn = connect_database(db_path, connect_timeout).await?;

        Ok(Self {
            db_path: db_path.to_path_buf(),
            db_conn,
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    pub async fn initialize_schema(&self) -> Result<(), StoreError> {
        initialize_schema(&self.db_conn).await?;
        Ok(())
    }

    pub async fn seed(&self) -> Result<SeedReport, StoreError> {
        SeedLoader::seed(&self.db_conn).await
    }

    /// Row count of every table, parents before children.
    pub async fn table_counts(&self) -> Result<Vec<(&'static str, u64)>, StoreError> {
        let conn = &self.db_conn;
        let counts = vec![
            ("manufacturer", ManufacturerEntity::find().count(conn).await?),
            ("defect_type", DefectTypeEntity::find().count(conn).await?),
            ("defect_location", DefectLocationEntity::find().count(conn).await?),
            ("severity_level", SeverityLevelEntity::find().count(conn).await?),
            ("technician", TechnicianEntity::find().count(conn).await?),
            ("smartphone_model", SmartphoneModelEntity::find().count(conn).await?),
            ("device", DeviceEntity::find().count(conn).await?),
            ("defect", DefectEntity::find().count(conn).await?),
            ("defect_image", DefectImageEntity::find().count(conn).await?),
            ("diagnosis", DiagnosisEntity::find().count(conn).await?),
            ("repair", RepairEntity::find().count(conn).await?),
        ];
        debug!(?counts, "table counts");
        Ok(counts)
    }

    /// Releases the connection.
    pub async fn close(self) -> Result<(), StoreError> {
        self.db_conn.close().await?;
        info!("Closed database {}", self.db_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::schema::TABLE_NAMES;
    use sea_orm::{ConnectionTrait, DbErr, SqlErr};
    use tempfile::TempDir;

    async fn setup_seeded_store() -> (TempDir, DefectStore) {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = DefectStore::open(&tmp_dir.path().join("test.db"), Duration::from_secs(5))
            .await
            .expect("Failed to open store");
        store
            .initialize_schema()
            .await
            .expect("Failed to init schema");
        store.seed().await.expect("Failed to seed");
        (tmp_dir, store)
    }

    async fn execute(store: &DefectStore, sql: &str) -> Result<(), DbErr> {
        store.db_conn.execute_unprepared(sql).await.map(|_| ())
    }

    fn assert_check_violation(result: Result<(), DbErr>) {
        let err = result.expect_err("insert should violate a CHECK constraint");
        assert!(
            err.to_string().contains("CHECK constraint failed"),
            "unexpected error: {err}"
        );
    }

    #[tokio::test]
    async fn test_open_creates_parent_directory() {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = tmp_dir.path().join("nested").join("dir").join("defects.db");
        let store = DefectStore::open(&db_path, Duration::from_secs(5))
            .await
            .expect("Failed to open store");
        assert_eq!(store.db_path(), db_path.as_path());
        assert!(db_path.exists());
        store.close().await.expect("Failed to close store");
    }

    #[tokio::test]
    async fn test_table_counts_after_seed() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        let counts = store.table_counts().await.expect("Failed to count");

        let names: Vec<&str> = counts.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, TABLE_NAMES.to_vec());

        let expected: [(&str, u64); 11] = [
            ("manufacturer", 5),
            ("defect_type", 5),
            ("defect_location", 6),
            ("severity_level", 5),
            ("technician", 3),
            ("smartphone_model", 7),
            ("device", 4),
            ("defect", 5),
            ("defect_image", 5),
            ("diagnosis", 4),
            ("repair", 3),
        ];
        assert_eq!(counts, expected.to_vec());
    }

    #[tokio::test]
    async fn test_rejects_unknown_screen_type() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        assert_check_violation(
            execute(
                &store,
                "INSERT INTO smartphone_model \
                 (manufacturer_id, model_name, release_year, screen_type, screen_size) \
                 VALUES (1, 'Nokia 3310', 2000, 'TFT', 1.5)",
            )
            .await,
        );
    }

    #[tokio::test]
    async fn test_rejects_unknown_repair_status() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        assert_check_violation(
            execute(
                &store,
                "INSERT INTO repair (defect_id, technician_id, repair_type, cost, status) \
                 VALUES (1, 1, 'Полировка', 100.0, 'unknown')",
            )
            .await,
        );
    }

    #[tokio::test]
    async fn test_rejects_out_of_range_severity_score() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        assert_check_violation(
            execute(
                &store,
                "INSERT INTO severity_level (level_name, score) VALUES ('Катастрофический', 6)",
            )
            .await,
        );
    }

    #[tokio::test]
    async fn test_rejects_duplicate_manufacturer() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        let err = execute(
            &store,
            "INSERT INTO manufacturer (name, country) VALUES ('Apple', 'USA')",
        )
        .await
        .expect_err("duplicate manufacturer should fail");
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_rejects_duplicate_model_per_manufacturer() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        let err = execute(
            &store,
            "INSERT INTO smartphone_model (manufacturer_id, model_name) VALUES (1, 'iPhone 13')",
        )
        .await
        .expect_err("duplicate model should fail");
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));

        // Same name under another manufacturer is allowed.
        execute(
            &store,
            "INSERT INTO smartphone_model (manufacturer_id, model_name) VALUES (2, 'iPhone 13')",
        )
        .await
        .expect("model name may repeat across manufacturers");
    }

    #[tokio::test]
    async fn test_rejects_dangling_foreign_key() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        let err = execute(
            &store,
            "INSERT INTO defect (device_id, defect_type_id, location_id, severity_id) \
             VALUES (999, 1, 1, 1)",
        )
        .await
        .expect_err("unknown device should fail");
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::ForeignKeyConstraintViolation(_))
        ));
    }

    #[tokio::test]
    async fn test_allows_repeated_null_imei() {
        let (_tmp_dir, store) = setup_seeded_store().await;
        for _ in 0..2 {
            execute(&store, "INSERT INTO device (model_id, imei) VALUES (2, NULL)")
                .await
                .expect("IMEI is only unique when present");
        }
        let err = execute(
            &store,
            "INSERT INTO device (model_id, imei) VALUES (2, '354678901234567')",
        )
        .await
        .expect_err("duplicate IMEI should fail");
        assert!(matches!(
            err.sql_err(),
            Some(SqlErr::UniqueConstraintViolation(_))
        ));
    }
}
