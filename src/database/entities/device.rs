//! Physical device entity, identified by IMEI when known.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "device")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub model_id: i32,
    #[sea_orm(column_type = "Text", unique, nullable)]
    pub imei: Option<String>,
    #[sea_orm(nullable)]
    pub production_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::smartphone_model::Entity",
        from = "Column::ModelId",
        to = "super::smartphone_model::Column::Id"
    )]
    SmartphoneModel,
    #[sea_orm(has_many = "super::defect::Entity")]
    Defect,
}

impl Related<super::smartphone_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SmartphoneModel.def()
    }
}

impl Related<super::defect::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Defect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
