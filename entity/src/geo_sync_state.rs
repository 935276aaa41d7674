use sea_orm::entity::prelude::*;

/// Singleton row tracking geo sync progress and totals.
///
/// `last_synced_street_index` is the resume position of the
/// buildings-only sync: an index into the street list ordered by
/// `street_key`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "geo_sync_state")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub last_synced: Option<DateTime>,
    pub last_synced_street_index: i32,
    pub synced_buildings: i32,
    pub total_zones: i32,
    pub total_streets: i32,
    pub total_buildings: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
