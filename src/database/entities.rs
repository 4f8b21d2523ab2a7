//! Module to export all database entities.
pub mod defect;
pub mod defect_image;
pub mod defect_location;
pub mod defect_type;
pub mod device;
pub mod diagnosis;
pub mod enums;
pub mod manufacturer;
pub mod repair;
pub mod severity_level;
pub mod smartphone_model;
pub mod technician;

pub use defect::Entity as DefectEntity;
pub use defect_image::Entity as DefectImageEntity;
pub use defect_location::Entity as DefectLocationEntity;
pub use defect_type::Entity as DefectTypeEntity;
pub use device::Entity as DeviceEntity;
pub use diagnosis::Entity as DiagnosisEntity;
pub use manufacturer::Entity as ManufacturerEntity;
pub use repair::Entity as RepairEntity;
pub use severity_level::Entity as SeverityLevelEntity;
pub use smartphone_model::Entity as SmartphoneModelEntity;
pub use technician::Entity as TechnicianEntity;
