//! Screen region where a defect was found.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "defect_location")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::defect::Entity")]
    Defect,
}

impl Related<super::defect::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Defect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
