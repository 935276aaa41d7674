use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260304_000002_geo_street::GeoStreet;

static IDX_GEO_BUILDING_ZONE_STREET: &str = "idx-geo_building-zone_street";
static FK_GEO_BUILDING_STREET_ID: &str = "fk-geo_building-street_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoBuilding::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoBuilding::Id))
                    .col(string_uniq(GeoBuilding::BuildingKey))
                    .col(integer(GeoBuilding::StreetId))
                    .col(string(GeoBuilding::ZoneNumber))
                    .col(string(GeoBuilding::StreetNumber))
                    .col(string(GeoBuilding::BuildingNumber))
                    .col(double_null(GeoBuilding::Latitude))
                    .col(double_null(GeoBuilding::Longitude))
                    .col(timestamp(GeoBuilding::CreatedAt))
                    .col(timestamp(GeoBuilding::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GEO_BUILDING_ZONE_STREET)
                    .table(GeoBuilding::Table)
                    .col(GeoBuilding::ZoneNumber)
                    .col(GeoBuilding::StreetNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GEO_BUILDING_STREET_ID)
                    .from_tbl(GeoBuilding::Table)
                    .from_col(GeoBuilding::StreetId)
                    .to_tbl(GeoStreet::Table)
                    .to_col(GeoStreet::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GEO_BUILDING_STREET_ID)
                    .table(GeoBuilding::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GEO_BUILDING_ZONE_STREET)
                    .table(GeoBuilding::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeoBuilding::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoBuilding {
    Table,
    Id,
    BuildingKey,
    StreetId,
    ZoneNumber,
    StreetNumber,
    BuildingNumber,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}
