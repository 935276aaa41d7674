use chrono::Utc;
use migration::OnConflict;
use qnas::model::ZoneRecord;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

pub struct ZoneRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ZoneRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert zones fetched from QNAS, overwriting the names of zones
    /// that already exist. One record per zone number.
    pub async fn upsert_many(
        &self,
        zones: Vec<ZoneRecord>,
    ) -> Result<Vec<entity::geo_zone::Model>, DbErr> {
        if zones.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let zones = zones.into_iter().map(|z| entity::geo_zone::ActiveModel {
            zone_number: ActiveValue::Set(z.zone_number),
            name_en: ActiveValue::Set(z.zone_name_en),
            name_ar: ActiveValue::Set(z.zone_name_ar),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::GeoZone::insert_many(zones)
            .on_conflict(
                OnConflict::column(entity::geo_zone::Column::ZoneNumber)
                    .update_columns([
                        entity::geo_zone::Column::NameEn,
                        entity::geo_zone::Column::NameAr,
                        entity::geo_zone::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_zone_number(
        &self,
        zone_number: &str,
    ) -> Result<Option<entity::geo_zone::Model>, DbErr> {
        entity::prelude::GeoZone::find()
            .filter(entity::geo_zone::Column::ZoneNumber.eq(zone_number))
            .one(self.db)
            .await
    }

    /// Get a zone or create a nameless placeholder for it.
    ///
    /// Used by the resolver's lazy persist path, which may learn about a
    /// building before the zone list was ever synced. A concurrent
    /// create of the same zone is absorbed by the unique key conflict.
    pub async fn get_or_create(
        &self,
        zone_number: &str,
    ) -> Result<entity::geo_zone::Model, DbErr> {
        if let Some(zone) = self.get_by_zone_number(zone_number).await? {
            return Ok(zone);
        }

        let now = Utc::now().naive_utc();
        let zone = entity::geo_zone::ActiveModel {
            zone_number: ActiveValue::Set(zone_number.to_string()),
            name_en: ActiveValue::Set(String::new()),
            name_ar: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::GeoZone::insert(zone)
            .on_conflict(
                OnConflict::column(entity::geo_zone::Column::ZoneNumber)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_zone_number(zone_number)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("zone {zone_number} after insert")))
    }

    pub async fn list_all(&self) -> Result<Vec<entity::geo_zone::Model>, DbErr> {
        entity::prelude::GeoZone::find()
            .order_by_asc(entity::geo_zone::Column::ZoneNumber)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GeoZone::find().count(self.db).await
    }
}
