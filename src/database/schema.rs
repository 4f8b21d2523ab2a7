//! Table definitions for the defect tracking store.
//!
//! Every statement is guarded with `IF NOT EXISTS`, so running the initializer
//! against an existing store leaves its structure untouched.
use crate::database::entities::enums::{RepairStatus, ScreenType, allowed_values};
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use tracing::{debug, info};

/// All tables, parents before children.
pub const TABLE_NAMES: [&str; 11] = [
    "manufacturer",
    "defect_type",
    "defect_location",
    "severity_level",
    "technician",
    "smartphone_model",
    "device",
    "defect",
    "defect_image",
    "diagnosis",
    "repair",
];

#[derive(DeriveIden)]
enum Manufacturer {
    Table,
    Id,
    Name,
    Country,
}

#[derive(DeriveIden)]
enum SmartphoneModel {
    Table,
    Id,
    ManufacturerId,
    ModelName,
    ReleaseYear,
    ScreenType,
    ScreenSize,
}

#[derive(DeriveIden)]
enum DefectType {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum DefectLocation {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum SeverityLevel {
    Table,
    Id,
    LevelName,
    Score,
}

#[derive(DeriveIden)]
enum Device {
    Table,
    Id,
    ModelId,
    Imei,
    ProductionDate,
}

#[derive(DeriveIden)]
enum Defect {
    Table,
    Id,
    DeviceId,
    DefectTypeId,
    LocationId,
    SeverityId,
    DetectionDate,
    LengthMm,
    WidthMm,
    Description,
    IsRepaired,
    RepairDate,
}

#[derive(DeriveIden)]
enum DefectImage {
    Table,
    Id,
    DefectId,
    ImagePath,
    CaptureDate,
    IsVerified,
    VerificationDate,
}

#[derive(DeriveIden)]
enum Technician {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Specialization,
    HireDate,
}

#[derive(DeriveIden)]
enum Diagnosis {
    Table,
    Id,
    DefectId,
    TechnicianId,
    DiagnosisDate,
    Conclusion,
    RecommendedAction,
}

#[derive(DeriveIden)]
enum Repair {
    Table,
    Id,
    DefectId,
    TechnicianId,
    StartDate,
    EndDate,
    RepairType,
    Cost,
    Status,
    WarrantyUntil,
}

/// Creates every table that does not exist yet.
///
/// # Arguments
/// * `db_conn` - The database connection.
///
/// # Returns
/// * `Result<(), DbErr>` - Ok if successful, Err otherwise.
pub async fn initialize_schema(db_conn: &DatabaseConnection) -> Result<(), DbErr> {
    let manager = SchemaManager::new(db_conn);

    create_lookup_tables(&manager).await?;
    create_device_tables(&manager).await?;
    create_defect_tables(&manager).await?;
    create_service_tables(&manager).await?;

    info!("Schema initialized ({} tables)", TABLE_NAMES.len());
    Ok(())
}

async fn create_lookup_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Manufacturer::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Manufacturer::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(Manufacturer::Name)
                        .text()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(Manufacturer::Country).text())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(DefectType::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(DefectType::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(DefectType::Name)
                        .text()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(DefectType::Description).text())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(DefectLocation::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(DefectLocation::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(DefectLocation::Name)
                        .text()
                        .not_null()
                        .unique_key(),
                )
                .col(ColumnDef::new(DefectLocation::Description).text())
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(SeverityLevel::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(SeverityLevel::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(SeverityLevel::LevelName)
                        .text()
                        .not_null()
                        .unique_key(),
                )
                .col(
                    ColumnDef::new(SeverityLevel::Score)
                        .integer()
                        .not_null()
                        .unique_key()
                        .check(Expr::col(SeverityLevel::Score).between(1, 5)),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(Technician::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Technician::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Technician::Name).text().not_null())
                .col(ColumnDef::new(Technician::Email).text().unique_key())
                .col(ColumnDef::new(Technician::Phone).text())
                .col(ColumnDef::new(Technician::Specialization).text())
                .col(ColumnDef::new(Technician::HireDate).custom(Alias::new("DATE")))
                .to_owned(),
        )
        .await?;

    debug!("Lookup tables ready");
    Ok(())
}

async fn create_device_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(SmartphoneModel::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(SmartphoneModel::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(
                    ColumnDef::new(SmartphoneModel::ManufacturerId)
                        .integer()
                        .not_null(),
                )
                .col(ColumnDef::new(SmartphoneModel::ModelName).text().not_null())
                .col(ColumnDef::new(SmartphoneModel::ReleaseYear).integer())
                .col(
                    ColumnDef::new(SmartphoneModel::ScreenType)
                        .text()
                        .check(
                            Expr::col(SmartphoneModel::ScreenType)
                                .is_in(allowed_values::<ScreenType>()),
                        ),
                )
                .col(ColumnDef::new(SmartphoneModel::ScreenSize).custom(Alias::new("REAL")))
                .foreign_key(
                    ForeignKey::create()
                        .from(SmartphoneModel::Table, SmartphoneModel::ManufacturerId)
                        .to(Manufacturer::Table, Manufacturer::Id),
                )
                .to_owned(),
        )
        .await?;

    // A model name may repeat across manufacturers, never within one.
    manager
        .create_index(
            Index::create()
                .if_not_exists()
                .name("idx_smartphone_model_manufacturer_model")
                .table(SmartphoneModel::Table)
                .col(SmartphoneModel::ManufacturerId)
                .col(SmartphoneModel::ModelName)
                .unique()
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(Device::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Device::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Device::ModelId).integer().not_null())
                .col(ColumnDef::new(Device::Imei).text().unique_key())
                .col(ColumnDef::new(Device::ProductionDate).custom(Alias::new("DATE")))
                .foreign_key(
                    ForeignKey::create()
                        .from(Device::Table, Device::ModelId)
                        .to(SmartphoneModel::Table, SmartphoneModel::Id),
                )
                .to_owned(),
        )
        .await?;

    debug!("Device tables ready");
    Ok(())
}

async fn create_defect_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Defect::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Defect::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Defect::DeviceId).integer().not_null())
                .col(ColumnDef::new(Defect::DefectTypeId).integer().not_null())
                .col(ColumnDef::new(Defect::LocationId).integer().not_null())
                .col(ColumnDef::new(Defect::SeverityId).integer().not_null())
                .col(
                    ColumnDef::new(Defect::DetectionDate)
                        .custom(Alias::new("DATETIME"))
                        .default(Expr::current_timestamp()),
                )
                .col(ColumnDef::new(Defect::LengthMm).custom(Alias::new("REAL")))
                .col(ColumnDef::new(Defect::WidthMm).custom(Alias::new("REAL")))
                .col(ColumnDef::new(Defect::Description).text())
                .col(
                    ColumnDef::new(Defect::IsRepaired)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(ColumnDef::new(Defect::RepairDate).custom(Alias::new("DATETIME")))
                .foreign_key(
                    ForeignKey::create()
                        .from(Defect::Table, Defect::DeviceId)
                        .to(Device::Table, Device::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Defect::Table, Defect::DefectTypeId)
                        .to(DefectType::Table, DefectType::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Defect::Table, Defect::LocationId)
                        .to(DefectLocation::Table, DefectLocation::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Defect::Table, Defect::SeverityId)
                        .to(SeverityLevel::Table, SeverityLevel::Id),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(DefectImage::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(DefectImage::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(DefectImage::DefectId).integer().not_null())
                .col(ColumnDef::new(DefectImage::ImagePath).text().not_null())
                .col(
                    ColumnDef::new(DefectImage::CaptureDate)
                        .custom(Alias::new("DATETIME"))
                        .default(Expr::current_timestamp()),
                )
                .col(
                    ColumnDef::new(DefectImage::IsVerified)
                        .boolean()
                        .not_null()
                        .default(false),
                )
                .col(
                    ColumnDef::new(DefectImage::VerificationDate).custom(Alias::new("DATETIME")),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(DefectImage::Table, DefectImage::DefectId)
                        .to(Defect::Table, Defect::Id),
                )
                .to_owned(),
        )
        .await?;

    debug!("Defect tables ready");
    Ok(())
}

async fn create_service_tables(manager: &SchemaManager<'_>) -> Result<(), DbErr> {
    manager
        .create_table(
            Table::create()
                .table(Diagnosis::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Diagnosis::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Diagnosis::DefectId).integer().not_null())
                .col(ColumnDef::new(Diagnosis::TechnicianId).integer().not_null())
                .col(
                    ColumnDef::new(Diagnosis::DiagnosisDate)
                        .custom(Alias::new("DATETIME"))
                        .default(Expr::current_timestamp()),
                )
                .col(ColumnDef::new(Diagnosis::Conclusion).text())
                .col(ColumnDef::new(Diagnosis::RecommendedAction).text())
                .foreign_key(
                    ForeignKey::create()
                        .from(Diagnosis::Table, Diagnosis::DefectId)
                        .to(Defect::Table, Defect::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Diagnosis::Table, Diagnosis::TechnicianId)
                        .to(Technician::Table, Technician::Id),
                )
                .to_owned(),
        )
        .await?;

    manager
        .create_table(
            Table::create()
                .table(Repair::Table)
                .if_not_exists()
                .col(
                    ColumnDef::new(Repair::Id)
                        .integer()
                        .not_null()
                        .auto_increment()
                        .primary_key(),
                )
                .col(ColumnDef::new(Repair::DefectId).integer().not_null())
                .col(ColumnDef::new(Repair::TechnicianId).integer().not_null())
                .col(
                    ColumnDef::new(Repair::StartDate)
                        .custom(Alias::new("DATETIME"))
                        .default(Expr::current_timestamp()),
                )
                .col(ColumnDef::new(Repair::EndDate).custom(Alias::new("DATETIME")))
                .col(ColumnDef::new(Repair::RepairType).text())
                .col(ColumnDef::new(Repair::Cost).custom(Alias::new("REAL")))
                .col(
                    ColumnDef::new(Repair::Status)
                        .text()
                        .check(Expr::col(Repair::Status).is_in(allowed_values::<RepairStatus>())),
                )
                .col(ColumnDef::new(Repair::WarrantyUntil).custom(Alias::new("DATE")))
                .foreign_key(
                    ForeignKey::create()
                        .from(Repair::Table, Repair::DefectId)
                        .to(Defect::Table, Defect::Id),
                )
                .foreign_key(
                    ForeignKey::create()
                        .from(Repair::Table, Repair::TechnicianId)
                        .to(Technician::Table, Technician::Id),
                )
                .to_owned(),
        )
        .await?;

    debug!("Service tables ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, Database, DbBackend, Statement};
    use tempfile::TempDir;

    async fn setup_test_db() -> (TempDir, DatabaseConnection) {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = tmp_dir.path().join("test.db");
        let db_url = format!("sqlite://{}?mode=rwc", db_path.to_string_lossy());
        let db = Database::connect(&db_url)
            .await
            .expect("Failed to connect to test database");
        (tmp_dir, db)
    }

    /// Name and DDL of every user table and index, sorted by name.
    async fn schema_snapshot(db: &DatabaseConnection) -> Vec<(String, String)> {
        let rows = db
            .query_all(Statement::from_string(
                DbBackend::Sqlite,
                "SELECT name, sql FROM sqlite_master \
                 WHERE type IN ('table', 'index') AND name NOT LIKE 'sqlite_%' \
                 ORDER BY name",
            ))
            .await
            .expect("Failed to read sqlite_master");
        rows.iter()
            .map(|row| {
                (
                    row.try_get::<String>("", "name").unwrap(),
                    row.try_get::<Option<String>>("", "sql")
                        .unwrap()
                        .unwrap_or_default(),
                )
            })
            .collect()
    }

    #[tokio::test]
    async fn test_initialize_creates_all_tables() {
        let (_tmp_dir, db) = setup_test_db().await;
        initialize_schema(&db).await.expect("Failed to init schema");

        let snapshot = schema_snapshot(&db).await;
        for table in TABLE_NAMES {
            assert!(
                snapshot.iter().any(|(name, _)| name == table),
                "missing table {table}"
            );
        }
        assert!(
            snapshot
                .iter()
                .any(|(name, _)| name == "idx_smartphone_model_manufacturer_model")
        );
    }

    #[tokio::test]
    async fn test_initialize_is_idempotent() {
        let (_tmp_dir, db) = setup_test_db().await;
        initialize_schema(&db).await.expect("Failed to init schema");
        let first = schema_snapshot(&db).await;

        initialize_schema(&db)
            .await
            .expect("Second initialization should succeed");
        let second = schema_snapshot(&db).await;

        assert_eq!(first, second);
        // 11 tables plus the composite unique index.
        assert_eq!(first.len(), TABLE_NAMES.len() + 1);
    }

    #[tokio::test]
    async fn test_check_constraints_use_enum_values() {
        let (_tmp_dir, db) = setup_test_db().await;
        initialize_schema(&db).await.expect("Failed to init schema");
        let snapshot = schema_snapshot(&db).await;

        let ddl = |table: &str| {
            snapshot
                .iter()
                .find(|(name, _)| name == table)
                .map(|(_, sql)| sql.clone())
                .unwrap()
        };
        let model_ddl = ddl("smartphone_model");
        for value in ["'OLED'", "'LCD'", "'AMOLED'", "'IPS'"] {
            assert!(model_ddl.contains(value), "{model_ddl}");
        }
        let repair_ddl = ddl("repair");
        for value in ["'pending'", "'in_progress'", "'completed'", "'cancelled'"] {
            assert!(repair_ddl.contains(value), "{repair_ddl}");
        }
        assert!(ddl("defect").contains("CURRENT_TIMESTAMP"));
    }

    #[tokio::test]
    async fn test_columns_declare_sqlite_types() {
        let (_tmp_dir, db) = setup_test_db().await;
        initialize_schema(&db).await.expect("Failed to init schema");

        let declared = [
            ("technician", "hire_date", "DATE"),
            ("smartphone_model", "screen_size", "REAL"),
            ("device", "production_date", "DATE"),
            ("defect", "detection_date", "DATETIME"),
            ("defect", "length_mm", "REAL"),
            ("defect", "repair_date", "DATETIME"),
            ("defect_image", "capture_date", "DATETIME"),
            ("defect_image", "verification_date", "DATETIME"),
            ("diagnosis", "diagnosis_date", "DATETIME"),
            ("repair", "start_date", "DATETIME"),
            ("repair", "cost", "REAL"),
            ("repair", "warranty_until", "DATE"),
        ];
        for (table, column, expected) in declared {
            let row = db
                .query_one(Statement::from_string(
                    DbBackend::Sqlite,
                    format!(
                        "SELECT type FROM pragma_table_info('{table}') WHERE name = '{column}'"
                    ),
                ))
                .await
                .expect("Failed to read table_info")
                .unwrap_or_else(|| panic!("missing column {table}.{column}"));
            let declared_type: String = row.try_get("", "type").unwrap();
            assert_eq!(declared_type, expected, "{table}.{column}");
        }
    }
}
