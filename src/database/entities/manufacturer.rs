//! Phone manufacturer entity.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "manufacturer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", unique)]
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub country: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::smartphone_model::Entity")]
    SmartphoneModel,
}

impl Related<super::smartphone_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmartphoneModel.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
