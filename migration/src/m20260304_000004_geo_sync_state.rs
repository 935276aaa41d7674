use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoSyncState::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoSyncState::Id))
                    .col(timestamp_null(GeoSyncState::LastSynced))
                    .col(integer(GeoSyncState::LastSyncedStreetIndex))
                    .col(integer(GeoSyncState::SyncedBuildings))
                    .col(integer(GeoSyncState::TotalZones))
                    .col(integer(GeoSyncState::TotalStreets))
                    .col(integer(GeoSyncState::TotalBuildings))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeoSyncState::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoSyncState {
    Table,
    Id,
    LastSynced,
    LastSyncedStreetIndex,
    SyncedBuildings,
    TotalZones,
    TotalStreets,
    TotalBuildings,
}
