use chrono::Utc;
use migration::OnConflict;
use qnas::model::BuildingRecord;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

/// Composite building identity, e.g. `"12-5-3"` for building 3 on
/// street 5 of zone 12.
pub fn building_key(zone_number: &str, street_number: &str, building_number: &str) -> String {
    format!("{zone_number}-{street_number}-{building_number}")
}

pub struct BuildingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Insert buildings fetched from QNAS for one street, overwriting
    /// the coordinates of buildings that already exist. Used by the
    /// sync engine, which treats the provider as the source of truth.
    pub async fn upsert_many(
        &self,
        street: &entity::geo_street::Model,
        buildings: Vec<BuildingRecord>,
    ) -> Result<Vec<entity::geo_building::Model>, DbErr> {
        if buildings.is_empty() {
            return Ok(Vec::new());
        }

        let models = self.active_models(street, buildings);

        entity::prelude::GeoBuilding::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::geo_building::Column::BuildingKey)
                    .update_columns([
                        entity::geo_building::Column::Latitude,
                        entity::geo_building::Column::Longitude,
                        entity::geo_building::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await
    }

    /// Insert buildings that are not yet cached, leaving existing
    /// records untouched. Used by the resolver's lazy persist path,
    /// where stored data wins over a later ad-hoc fetch.
    pub async fn insert_missing(
        &self,
        street: &entity::geo_street::Model,
        buildings: &[BuildingRecord],
    ) -> Result<(), DbErr> {
        if buildings.is_empty() {
            return Ok(());
        }

        let models = self.active_models(street, buildings.to_vec());

        entity::prelude::GeoBuilding::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::geo_building::Column::BuildingKey)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Insert a single resolved building if it is not cached yet.
    pub async fn create_if_absent(
        &self,
        street: &entity::geo_street::Model,
        building_number: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), DbErr> {
        let record = BuildingRecord {
            building_number: building_number.to_string(),
            x: Some(latitude),
            y: Some(longitude),
        };

        self.insert_missing(street, &[record]).await
    }

    pub async fn get_by_building_key(
        &self,
        key: &str,
    ) -> Result<Option<entity::geo_building::Model>, DbErr> {
        entity::prelude::GeoBuilding::find()
            .filter(entity::geo_building::Column::BuildingKey.eq(key))
            .one(self.db)
            .await
    }

    pub async fn list_by_street(
        &self,
        zone_number: &str,
        street_number: &str,
    ) -> Result<Vec<entity::geo_building::Model>, DbErr> {
        entity::prelude::GeoBuilding::find()
            .filter(entity::geo_building::Column::ZoneNumber.eq(zone_number))
            .filter(entity::geo_building::Column::StreetNumber.eq(street_number))
            .order_by_asc(entity::geo_building::Column::BuildingKey)
            .all(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::GeoBuilding::find().count(self.db).await
    }

    fn active_models(
        &self,
        street: &entity::geo_street::Model,
        buildings: Vec<BuildingRecord>,
    ) -> Vec<entity::geo_building::ActiveModel> {
        let now = Utc::now().naive_utc();

        buildings
            .into_iter()
            .map(|b| entity::geo_building::ActiveModel {
                building_key: ActiveValue::Set(building_key(
                    &street.zone_number,
                    &street.street_number,
                    &b.building_number,
                )),
                street_id: ActiveValue::Set(street.id),
                zone_number: ActiveValue::Set(street.zone_number.clone()),
                street_number: ActiveValue::Set(street.street_number.clone()),
                building_number: ActiveValue::Set(b.building_number),
                latitude: ActiveValue::Set(b.x),
                longitude: ActiveValue::Set(b.y),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .collect()
    }
}
