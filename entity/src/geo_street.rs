use sea_orm::entity::prelude::*;

/// A street within a zone. `street_key` is the composite
/// `"{zone_number}-{street_number}"` identity used for upserts.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_street")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub street_key: String,
    pub zone_id: i32,
    pub zone_number: String,
    pub street_number: String,
    pub name_en: String,
    pub name_ar: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::geo_zone::Entity",
        from = "Column::ZoneId",
        to = "super::geo_zone::Column::Id"
    )]
    GeoZone,
    #[sea_orm(has_many = "super::geo_building::Entity")]
    GeoBuilding,
}

impl Related<super::geo_zone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoZone.def()
    }
}

impl Related<super::geo_building::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoBuilding.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
