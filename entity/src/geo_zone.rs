use sea_orm::entity::prelude::*;

/// A Qatari address zone as assigned by the national addressing system.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_zone")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub zone_number: String,
    pub name_en: String,
    pub name_ar: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::geo_street::Entity")]
    GeoStreet,
}

impl Related<super::geo_street::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoStreet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
