//! Repair work order for a defect.
use super::enums::RepairStatus;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "repair")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub defect_id: i32,
    pub technician_id: i32,
    #[sea_orm(nullable)]
    pub start_date: Option<DateTime>,
    #[sea_orm(nullable)]
    pub end_date: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub repair_type: Option<String>,
    #[sea_orm(column_type = "Double", nullable)]
    pub cost: Option<f64>,
    #[sea_orm(nullable)]
    pub status: Option<RepairStatus>,
    #[sea_orm(nullable)]
    pub warranty_until: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::defect::Entity",
        from = "Column::DefectId",
        to = "super::defect::Column::Id"
    )]
    Defect,
    #[sea_orm(
        belongs_to = "super::technician::Entity",
        from = "Column::TechnicianId",
        to = "super::technician::Column::Id"
    )]
    Technician,
}

impl Related<super::defect::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Defect.def()
    }
}

impl Related<super::technician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
