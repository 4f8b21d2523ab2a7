//! One-shot loader for the illustrative seed batch.
pub mod data;

use crate::database::entities::{
    defect, defect_image, defect_location, defect_type, device, diagnosis, manufacturer, repair,
    severity_level, smartphone_model, technician,
};
use crate::database::error::StoreError;
use chrono::{NaiveDate, NaiveDateTime};
use data::{
    DefectSeed, DeviceSeed, DiagnosisSeed, ImageSeed, ManufacturerSeed, ModelSeed, NamedSeed,
    RepairSeed, SeveritySeed, TechnicianSeed,
};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DatabaseConnection, Set, TransactionTrait};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::{debug, info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Rows inserted per table, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub tables: Vec<(&'static str, usize)>,
}

impl SeedReport {
    fn record(&mut self, table: &'static str, rows: usize) {
        debug!("Seeded {} rows into {}", rows, table);
        self.tables.push((table, rows));
    }

    pub fn total(&self) -> usize {
        self.tables.iter().map(|(_, rows)| rows).sum()
    }
}

/// Identifiers assigned to the rows of one parent table, keyed by natural key.
///
/// A key maps to exactly one row; recording it twice is an error.
#[derive(Debug)]
struct ParentIds {
    parent: &'static str,
    ids: HashMap<String, i32>,
}

impl ParentIds {
    fn new(parent: &'static str) -> Self {
        Self {
            parent,
            ids: HashMap::new(),
        }
    }

    fn insert(&mut self, key: impl ToString, id: i32) -> Result<(), StoreError> {
        match self.ids.entry(key.to_string()) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateKey {
                parent: self.parent,
                key: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(id);
                Ok(())
            }
        }
    }

    fn resolve(&self, table: &'static str, key: impl ToString) -> Result<i32, StoreError> {
        let key = key.to_string();
        self.ids
            .get(&key)
            .copied()
            .ok_or(StoreError::MissingParent {
                table,
                parent: self.parent,
                key,
            })
    }

    fn len(&self) -> usize {
        self.ids.len()
    }
}

/// Inserts the seed batch.
pub struct SeedLoader;

impl SeedLoader {
    /// Inserts every seed row inside a single transaction.
    ///
    /// There is no existence check: seeding a store that already holds the
    /// batch fails on the first unique column (`manufacturer.name`) and the
    /// transaction is rolled back, leaving the store unchanged.
    ///
    /// # Arguments
    /// * `conn` - The database connection.
    ///
    /// # Returns
    /// * `Result<SeedReport, StoreError>` - Rows inserted per table.
    pub async fn seed(conn: &DatabaseConnection) -> Result<SeedReport, StoreError> {
        info!("Seeding database");

        let txn = conn.begin().await?;
        match Self::insert_batch(&txn).await {
            Ok(report) => {
                txn.commit().await?;
                info!("Seed data committed: {} rows", report.total());
                Ok(report)
            }
            Err(e) => {
                warn!(error = %e, "seeding failed, rolling back");
                if let Err(rollback_err) = txn.rollback().await {
                    warn!(error = %rollback_err, "rollback failed");
                }
                Err(e)
            }
        }
    }

    async fn insert_batch<C>(conn: &C) -> Result<SeedReport, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut report = SeedReport::default();

        let manufacturers = Self::insert_manufacturers(conn, data::MANUFACTURERS).await?;
        report.record("manufacturer", manufacturers.len());
        let defect_types = Self::insert_defect_types(conn, data::DEFECT_TYPES).await?;
        report.record("defect_type", defect_types.len());
        let locations = Self::insert_locations(conn, data::DEFECT_LOCATIONS).await?;
        report.record("defect_location", locations.len());
        let severities = Self::insert_severity_levels(conn, data::SEVERITY_LEVELS).await?;
        report.record("severity_level", severities.len());
        let technicians = Self::insert_technicians(conn, data::TECHNICIANS).await?;
        report.record("technician", technicians.len());

        let models = Self::insert_models(conn, data::MODELS, &manufacturers).await?;
        report.record("smartphone_model", models.len());
        let devices = Self::insert_devices(conn, data::DEVICES, &models).await?;
        report.record("device", devices.len());

        let parents = DefectParents {
            devices: &devices,
            defect_types: &defect_types,
            locations: &locations,
            severities: &severities,
        };
        let defects = Self::insert_defects(conn, data::DEFECTS, &parents).await?;
        report.record("defect", defects.len());

        let images = Self::insert_images(conn, data::IMAGES, &defects).await?;
        report.record("defect_image", images);
        let diagnoses =
            Self::insert_diagnoses(conn, data::DIAGNOSES, &defects, &technicians).await?;
        report.record("diagnosis", diagnoses);
        let repairs = Self::insert_repairs(conn, data::REPAIRS, &defects, &technicians).await?;
        report.record("repair", repairs);

        Ok(report)
    }

    async fn insert_manufacturers<C>(
        conn: &C,
        seeds: &[ManufacturerSeed],
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("manufacturer");
        for seed in seeds {
            let row = manufacturer::ActiveModel {
                name: Set(seed.name.to_string()),
                country: Set(Some(seed.country.to_string())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.name, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_defect_types<C>(conn: &C, seeds: &[NamedSeed]) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("defect_type");
        for seed in seeds {
            let row = defect_type::ActiveModel {
                name: Set(seed.name.to_string()),
                description: Set(Some(seed.description.to_string())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.name, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_locations<C>(conn: &C, seeds: &[NamedSeed]) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("defect_location");
        for seed in seeds {
            let row = defect_location::ActiveModel {
                name: Set(seed.name.to_string()),
                description: Set(Some(seed.description.to_string())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.name, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_severity_levels<C>(
        conn: &C,
        seeds: &[SeveritySeed],
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("severity_level");
        for seed in seeds {
            let row = severity_level::ActiveModel {
                level_name: Set(seed.level_name.to_string()),
                score: Set(seed.score),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.score, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_technicians<C>(
        conn: &C,
        seeds: &[TechnicianSeed],
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("technician");
        for seed in seeds {
            let row = technician::ActiveModel {
                name: Set(seed.name.to_string()),
                email: Set(Some(seed.email.to_string())),
                phone: Set(Some(seed.phone.to_string())),
                specialization: Set(Some(seed.specialization.to_string())),
                hire_date: Set(Some(parse_date(seed.hire_date)?)),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.email, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_models<C>(
        conn: &C,
        seeds: &[ModelSeed],
        manufacturers: &ParentIds,
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("smartphone_model");
        for seed in seeds {
            let manufacturer_id = manufacturers.resolve("smartphone_model", seed.manufacturer)?;
            let row = smartphone_model::ActiveModel {
                manufacturer_id: Set(manufacturer_id),
                model_name: Set(seed.model_name.to_string()),
                release_year: Set(Some(seed.release_year)),
                screen_type: Set(Some(seed.screen_type)),
                screen_size: Set(Some(seed.screen_size)),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(model_key(seed.manufacturer, seed.model_name), row.id)?;
        }
        Ok(ids)
    }

    async fn insert_devices<C>(
        conn: &C,
        seeds: &[DeviceSeed],
        models: &ParentIds,
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("device");
        for seed in seeds {
            let model_id = models.resolve("device", model_key(seed.manufacturer, seed.model))?;
            let row = device::ActiveModel {
                model_id: Set(model_id),
                imei: Set(Some(seed.imei.to_string())),
                production_date: Set(Some(parse_date(seed.production_date)?)),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.imei, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_defects<C>(
        conn: &C,
        seeds: &[DefectSeed],
        parents: &DefectParents<'_>,
    ) -> Result<ParentIds, StoreError>
    where
        C: ConnectionTrait,
    {
        let mut ids = ParentIds::new("defect");
        for seed in seeds {
            let row = defect::ActiveModel {
                device_id: Set(parents.devices.resolve("defect", seed.device_imei)?),
                defect_type_id: Set(parents.defect_types.resolve("defect", seed.defect_type)?),
                location_id: Set(parents.locations.resolve("defect", seed.location)?),
                severity_id: Set(parents.severities.resolve("defect", seed.severity_score)?),
                detection_date: Set(Some(parse_datetime(seed.detection_date)?)),
                length_mm: Set(seed.length_mm),
                width_mm: Set(seed.width_mm),
                description: Set(Some(seed.description.to_string())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            ids.insert(seed.tag, row.id)?;
        }
        Ok(ids)
    }

    async fn insert_images<C>(
        conn: &C,
        seeds: &[ImageSeed],
        defects: &ParentIds,
    ) -> Result<usize, StoreError>
    where
        C: ConnectionTrait,
    {
        for seed in seeds {
            let verification_date = seed.verification_date.map(parse_datetime).transpose()?;
            defect_image::ActiveModel {
                defect_id: Set(defects.resolve("defect_image", seed.defect)?),
                image_path: Set(seed.image_path.to_string()),
                capture_date: Set(Some(parse_datetime(seed.capture_date)?)),
                is_verified: Set(verification_date.is_some()),
                verification_date: Set(verification_date),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
        Ok(seeds.len())
    }

    async fn insert_diagnoses<C>(
        conn: &C,
        seeds: &[DiagnosisSeed],
        defects: &ParentIds,
        technicians: &ParentIds,
    ) -> Result<usize, StoreError>
    where
        C: ConnectionTrait,
    {
        for seed in seeds {
            diagnosis::ActiveModel {
                defect_id: Set(defects.resolve("diagnosis", seed.defect)?),
                technician_id: Set(technicians.resolve("diagnosis", seed.technician_email)?),
                diagnosis_date: Set(Some(parse_datetime(seed.diagnosis_date)?)),
                conclusion: Set(Some(seed.conclusion.to_string())),
                recommended_action: Set(Some(seed.recommended_action.to_string())),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
        Ok(seeds.len())
    }

    async fn insert_repairs<C>(
        conn: &C,
        seeds: &[RepairSeed],
        defects: &ParentIds,
        technicians: &ParentIds,
    ) -> Result<usize, StoreError>
    where
        C: ConnectionTrait,
    {
        for seed in seeds {
            repair::ActiveModel {
                defect_id: Set(defects.resolve("repair", seed.defect)?),
                technician_id: Set(technicians.resolve("repair", seed.technician_email)?),
                start_date: Set(Some(parse_datetime(seed.start_date)?)),
                end_date: Set(seed.end_date.map(parse_datetime).transpose()?),
                repair_type: Set(Some(seed.repair_type.to_string())),
                cost: Set(Some(seed.cost)),
                status: Set(Some(seed.status)),
                warranty_until: Set(seed.warranty_until.map(parse_date).transpose()?),
                ..Default::default()
            }
            .insert(conn)
            .await?;
        }
        Ok(seeds.len())
    }
}

struct DefectParents<'a> {
    devices: &'a ParentIds,
    defect_types: &'a ParentIds,
    locations: &'a ParentIds,
    severities: &'a ParentIds,
}

/// Model names repeat across manufacturers, so models are keyed by both.
fn model_key(manufacturer: &str, model_name: &str) -> String {
    format!("{manufacturer}/{model_name}")
}

fn parse_date(value: &str) -> Result<NaiveDate, StoreError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| StoreError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

fn parse_datetime(value: &str) -> Result<NaiveDateTime, StoreError> {
    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT).map_err(|source| {
        StoreError::InvalidDate {
            value: value.to_string(),
            source,
        }
    })
}
