use sea_orm::entity::prelude::*;

/// A building within a street. `building_key` is the composite
/// `"{zone_number}-{street_number}-{building_number}"` identity.
/// Latitude and longitude are populated together or not at all; a
/// building with only one of the pair is treated as unresolved.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "geo_building")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub building_key: String,
    pub street_id: i32,
    pub zone_number: String,
    pub street_number: String,
    pub building_number: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::geo_street::Entity",
        from = "Column::StreetId",
        to = "super::geo_street::Column::Id"
    )]
    GeoStreet,
}

impl Related<super::geo_street::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeoStreet.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
