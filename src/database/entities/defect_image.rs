//! Photo of a defect. Image bytes live in an external store; only the path is kept.
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "defect_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub defect_id: i32,
    #[sea_orm(column_type = "Text")]
    pub image_path: String,
    #[sea_orm(nullable)]
    pub capture_date: Option<DateTime>,
    pub is_verified: bool,
    /// Only meaningful when `is_verified` is set.
    #[sea_orm(nullable)]
    pub verification_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::defect::Entity",
        from = "Column::DefectId",
        to = "super::defect::Column::Id"
    )]
    Defect,
}

impl Related<super::defect::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Defect.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
