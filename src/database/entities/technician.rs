//! Service technician entity.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "technician")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub name: String,
    #[sea_orm(column_type = "Text", unique, nullable)]
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub specialization: Option<String>,
    #[sea_orm(nullable)]
    pub hire_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::diagnosis::Entity")]
    Diagnosis,
    #[sea_orm(has_many = "super::repair::Entity")]
    Repair,
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
