use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

/// Repository for the singleton sync-state row.
///
/// The row is created lazily on first access; every mutation re-reads it
/// so two sync jobs racing on the field (prevented upstream by job
/// uniqueness, but not by this layer) cannot resurrect stale values.
pub struct SyncStateRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SyncStateRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_or_init(&self) -> Result<entity::geo_sync_state::Model, DbErr> {
        if let Some(state) = entity::prelude::GeoSyncState::find().one(self.db).await? {
            return Ok(state);
        }

        let state = entity::geo_sync_state::ActiveModel {
            last_synced: ActiveValue::Set(None),
            last_synced_street_index: ActiveValue::Set(0),
            synced_buildings: ActiveValue::Set(0),
            total_zones: ActiveValue::Set(0),
            total_streets: ActiveValue::Set(0),
            total_buildings: ActiveValue::Set(0),
            ..Default::default()
        };

        state.insert(self.db).await
    }

    /// Reset the buildings-sync resume position. Called at the start of
    /// a full sync.
    pub async fn reset_checkpoint(&self) -> Result<entity::geo_sync_state::Model, DbErr> {
        let mut state: entity::geo_sync_state::ActiveModel = self.get_or_init().await?.into();
        state.last_synced_street_index = ActiveValue::Set(0);
        state.synced_buildings = ActiveValue::Set(0);
        state.update(self.db).await
    }

    /// Persist the buildings-sync resume position.
    pub async fn set_checkpoint(
        &self,
        street_index: i32,
        synced_buildings: i32,
    ) -> Result<entity::geo_sync_state::Model, DbErr> {
        let mut state: entity::geo_sync_state::ActiveModel = self.get_or_init().await?.into();
        state.last_synced_street_index = ActiveValue::Set(street_index);
        state.synced_buildings = ActiveValue::Set(synced_buildings);
        state.update(self.db).await
    }

    /// Record the totals and timestamp of a completed full sync.
    pub async fn record_full_sync(
        &self,
        total_zones: i32,
        total_streets: i32,
        total_buildings: i32,
    ) -> Result<entity::geo_sync_state::Model, DbErr> {
        let mut state: entity::geo_sync_state::ActiveModel = self.get_or_init().await?.into();
        state.last_synced = ActiveValue::Set(Some(Utc::now().naive_utc()));
        state.total_zones = ActiveValue::Set(total_zones);
        state.total_streets = ActiveValue::Set(total_streets);
        state.total_buildings = ActiveValue::Set(total_buildings);
        state.update(self.db).await
    }

    /// Record a completed buildings-only sync, marking every street as
    /// processed.
    pub async fn record_buildings_sync(
        &self,
        total_streets: i32,
        total_buildings: i32,
        synced_buildings: i32,
    ) -> Result<entity::geo_sync_state::Model, DbErr> {
        let mut state: entity::geo_sync_state::ActiveModel = self.get_or_init().await?.into();
        state.last_synced = ActiveValue::Set(Some(Utc::now().naive_utc()));
        state.last_synced_street_index = ActiveValue::Set(total_streets);
        state.total_buildings = ActiveValue::Set(total_buildings);
        state.synced_buildings = ActiveValue::Set(synced_buildings);
        state.update(self.db).await
    }
}
