//! Smartphone model entity, unique per manufacturer and model name.
use super::enums::ScreenType;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "smartphone_model")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub manufacturer_id: i32,
    #[sea_orm(column_type = "Text")]
    pub model_name: String,
    #[sea_orm(nullable)]
    pub release_year: Option<i32>,
    #[sea_orm(nullable)]
    pub screen_type: Option<ScreenType>,
    #[sea_orm(column_type = "Double", nullable)]
    pub screen_size: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::manufacturer::Entity",
        from = "Column::ManufacturerId",
        to = "super::manufacturer::Column::Id"
    )]
    Manufacturer,
    #[sea_orm(has_many = "super::device::Entity")]
    Device,
}

impl Related<super::manufacturer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Manufacturer.def()
    }
}

impl Related<super::device::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Device.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
