use chrono::Utc;
use migration::OnConflict;
use qnas::model::StreetRecord;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Composite street identity, e.g. `"12-5"` for street 5 of zone 12.
pub fn street_key(zone_number: &str, street_number: &str) -> String {
    format!("{zone_number}-{street_number}")
}

pub struct StreetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StreetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert streets fetched from QNAS for one zone, overwriting the
    /// names of streets that already exist.
    pub async fn upsert_many(
        &self,
        zone: &entity::geo_zone::Model,
        streets: Vec<StreetRecord>,
    ) -> Result<Vec<entity::geo_street::Model>, DbErr> {
        if streets.is_empty() {
            return Ok(Vec::new());
        }

        let now = Utc::now().naive_utc();
        let streets = streets.into_iter().map(|s| entity::geo_street::ActiveModel {
            street_key: ActiveValue::Set(street_key(&zone.zone_number, &s.street_number)),
            zone_id: ActiveValue::Set(zone.id),
            zone_number: ActiveValue::Set(zone.zone_number.clone()),
            street_number: ActiveValue::Set(s.street_number),
            name_en: ActiveValue::Set(s.street_name_en),
            name_ar: ActiveValue::Set(s.street_name_ar),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        entity::prelude::GeoStreet::insert_many(streets)
            .on_conflict(
                OnConflict::column(entity::geo_street::Column::StreetKey)
                    .update_columns([
                        entity::geo_street::Column::NameEn,
                        entity::geo_street::Column::NameAr,
                        entity::geo_street::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    pub async fn get_by_street_key(
        &self,
        key: &str,
    ) -> Result<Option<entity::geo_street::Model>, DbErr> {
        entity::prelude::GeoStreet::find()
            .filter(entity::geo_street::Column::StreetKey.eq(key))
            .one(self.db)
            .await
    }

    /// Get a street or create a nameless placeholder under the given
    /// zone. Concurrent creates of the same street are absorbed by the
    /// unique key conflict.
    pub async fn get_or_create(
        &self,
        zone: &entity::geo_zone::Model,
        street_number: &str,
    ) -> Result<entity::geo_street::Model, DbErr> {
        let key = street_key(&zone.zone_number, street_number);

        if let Some(street) = self.get_by_street_key(&key).await? {
            return Ok(street);
        }

        let now = Utc::now().naive_utc();
        let street = entity::geo_street::ActiveModel {
            street_key: ActiveValue::Set(key.clone()),
            zone_id: ActiveValue::Set(zone.id),
            zone_number: ActiveValue::Set(zone.zone_number.clone()),
            street_number: ActiveValue::Set(street_number.to_string()),
            name_en: ActiveValue::Set(String::new()),
            name_ar: ActiveValue::Set(String::new()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::GeoStreet::insert(street)
            .on_conflict(
                OnConflict::column(entity::geo_street::Column::StreetKey)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        self.get_by_street_key(&key)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("street {key} after insert")))
    }

    pub async fn list_by_zone(
        &self,
        zone_number: &str,
    ) -> Result<Vec<entity::geo_street::Model>, DbErr> {
        entity::prelude::GeoStreet::find()
            .filter(entity::geo_street::Column::ZoneNumber.eq(zone_number))
            .order_by_asc(entity::geo_street::Column::StreetKey)
            .all(self.db)
            .await
    }

    /// All streets ordered by `street_key`. The buildings sync
    /// checkpoint indexes into this ordering, so it must be stable
    /// across runs.
    pub async fn list_all(&self) -> Result<Vec<entity::geo_street::Model>, DbErr> {
        entity::prelude::GeoStreet::find()
            .order_by_asc(entity::geo_street::Column::StreetKey)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GeoStreet::find().count(self.db).await
    }
}
