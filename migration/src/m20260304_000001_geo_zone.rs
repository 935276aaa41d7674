use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeoZone::Table)
                    .if_not_exists()
                    .col(pk_auto(GeoZone::Id))
                    .col(string_uniq(GeoZone::ZoneNumber))
                    .col(string(GeoZone::NameEn))
                    .col(string(GeoZone::NameAr))
                    .col(timestamp(GeoZone::CreatedAt))
                    .col(timestamp(GeoZone::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeoZone::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum GeoZone {
    Table,
    Id,
    ZoneNumber,
    NameEn,
    NameAr,
    CreatedAt,
    UpdatedAt,
}
