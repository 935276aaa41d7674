pub use sea_orm_migration::prelude::*;

mod m20260304_000001_geo_zone;
mod m20260304_000002_geo_street;
mod m20260304_000003_geo_building;
mod m20260304_000004_geo_sync_state;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260304_000001_geo_zone::Migration),
            Box::new(m20260304_000002_geo_street::Migration),
            Box::new(m20260304_000003_geo_building::Migration),
            Box::new(m20260304_000004_geo_sync_state::Migration),
        ]
    }
}
