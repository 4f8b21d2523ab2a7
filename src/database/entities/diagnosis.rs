//! A technician's conclusion and recommended action for a defect.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "diagnosis")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub defect_id: i32,
    pub technician_id: i32,
    #[sea_orm(nullable)]
    pub diagnosis_date: Option<DateTime>,
    #[sea_orm(column_type = "Text", nullable)]
    pub conclusion: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub recommended_action: Option<String>,
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
