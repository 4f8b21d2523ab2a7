//! A recorded physical flaw on a specific device.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "defect")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub device_id: i32,
    pub defect_type_id: i32,
    pub location_id: i32,
    pub severity_id: i32,
    /// Filled by the store with `CURRENT_TIMESTAMP` when not supplied.
    #[sea_orm(nullable)]
    pub detection_date: Option<DateTime>,
    #[sea_orm(column_type = "Double", nullable)]
    pub length_mm: Option<f64>,
    #[sea_orm(column_type = "Double", nullable)]
    pub width_mm: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub is_repaired: bool,
    #[sea_orm(nullable)]
    pub repair_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::device::Entity",
        from = "Column::DeviceId",
        to = "super::device::Column::Id"
    )]
    Device,
    #[sea_orm(
        belongs_to = "super::defect_type::Entity",
        from = "Column::DefectTypeId",
        to = "super::defect_type::Column::Id"
    )]
    DefectType,
    #[sea_orm(
        belongs_to = "super::defect_location::Entity",
        from = "Column::LocationId",
        to = "super::defect_location::Column::Id"
    )]
    DefectLocation,
    #[sea_orm(
        belongs_to = "super::severity_level::Entity",
        from = "Column::SeverityId",
        to = "super::severity_level::Column::Id"
    )]
    SeverityLevel,
    #[sea_orm(has_many = "super::defect_image::Entity")]
    DefectImage,
    #[sea_orm(has_many = "super::diagnosis::Entity")]
    Diagnosis,
    #[sea_orm(has_many = "super::repair::Entity")]
    Repair,
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl Related<super::defect_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefectType.def()
    }
}

impl Related<super::defect_location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefectLocation.def()
    }
}

impl Related<super::severity_level::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SeverityLevel.def()
    }
}

impl Related<super::defect_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DefectImage.def()
    }
}

impl Related<super::diagnosis::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Diagnosis.def()
    }
}

impl Related<super::repair::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Repair.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
