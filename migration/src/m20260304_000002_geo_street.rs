use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260304_000001_geo_zone::GeoZone;

static IDX_GEO_STREET_ZONE_NUMBER: &str = "idx-geo_street-zone_number";
static FK_GEO_STREET_ZONE_ID: &str = "fk-geo_street-zone_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoStreet::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoStreet::Id))
                    .col(string_uniq(GeoStreet::StreetKey))
                    .col(integer(GeoStreet::ZoneId))
                    .col(string(GeoStreet::ZoneNumber))
                    .col(string(GeoStreet::StreetNumber))
                    .col(string(GeoStreet::NameEn))
                    .col(string(GeoStreet::NameAr))
                    .col(timestamp(GeoStreet::CreatedAt))
                    .col(timestamp(GeoStreet::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GEO_STREET_ZONE_NUMBER)
                    .table(GeoStreet::Table)
                    .col(GeoStreet::ZoneNumber)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_GEO_STREET_ZONE_ID)
                    .from_tbl(GeoStreet::Table)
                    .from_col(GeoStreet::ZoneId)
                    .to_tbl(GeoZone::Table)
                    .to_col(GeoZone::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_GEO_STREET_ZONE_ID)
                    .table(GeoStreet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_GEO_STREET_ZONE_NUMBER)
                    .table(GeoStreet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GeoStreet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoStreet {
    Table,
    Id,
    StreetKey,
    ZoneId,
    ZoneNumber,
    StreetNumber,
    NameEn,
    NameAr,
    CreatedAt,
    UpdatedAt,
}
