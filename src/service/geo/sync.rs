use std::time::Duration;

use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;
use tokio_util::sync::CancellationToken;

use crate::{
    data::geo::{
        building::BuildingRepository, street::StreetRepository, sync_state::SyncStateRepository,
        zone::ZoneRepository,
    },
    error::Error,
};

/// Delay between QNAS calls; the public API rate-limits aggressively.
const RATE_LIMIT_DELAY: Duration = Duration::from_millis(500);
/// Streets processed between checkpoint writes. Work since the last
/// checkpoint is redone after a crash, which the idempotent upserts
/// tolerate.
const CHECKPOINT_INTERVAL: usize = 10;

/// A progress notification published while a sync runs.
///
/// Mirrors the payload shape the coordinator dashboard listens for:
/// a human-readable message plus terminal `complete`/`error` flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncProgress {
    pub message: String,
    #[serde(default)]
    pub complete: bool,
    #[serde(default)]
    pub error: bool,
}

impl SyncProgress {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn complete(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            complete: true,
            error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            complete: false,
            error: true,
        }
    }
}

/// Background synchronization of the QNAS address hierarchy into the
/// local geo cache.
///
/// The engine is a plain unit of work: the caller decides where it runs
/// (spawned task, job queue worker) and observes it only through the
/// injected progress channel and the persisted sync state. Per-street
/// provider failures are logged and skipped; the checkpoint keeps the
/// failing street so the next resume retries it. Only one sync should
/// run at a time, enforced by the caller's job uniqueness.
pub struct SyncEngine {
    db: DatabaseConnection,
    client: qnas::Client,
    progress: UnboundedSender<SyncProgress>,
    cancel: CancellationToken,
    rate_limit: Duration,
}

impl SyncEngine {
    pub fn new(
        db: DatabaseConnection,
        client: qnas::Client,
        progress: UnboundedSender<SyncProgress>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            db,
            client,
            progress,
            cancel,
            rate_limit: RATE_LIMIT_DELAY,
        }
    }

    /// Override the delay between QNAS calls.
    pub fn with_rate_limit(mut self, rate_limit: Duration) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Sync the complete address hierarchy: all zones, their streets,
    /// and every street's buildings. Resets the buildings-sync resume
    /// position first.
    pub async fn run_full_sync(&self) {
        if let Err(err) = self.full_sync().await {
            tracing::error!("QNAS sync error: {err}");
            self.notify(SyncProgress::error(format!("Error: {err}")));
        }
    }

    /// Sync buildings only, resuming from the persisted street index.
    pub async fn run_buildings_sync(&self) {
        if let Err(err) = self.buildings_sync().await {
            tracing::error!("Building sync error: {err}");
            self.notify(SyncProgress::error(format!("Error: {err}")));
        }
    }

    async fn full_sync(&self) -> Result<(), Error> {
        let sync_state_repo = SyncStateRepository::new(&self.db);
        sync_state_repo.reset_checkpoint().await?;

        self.notify(SyncProgress::message("Fetching zones..."));

        let zones = self.client.fetch_zones().await?;
        let zones = ZoneRepository::new(&self.db).upsert_many(zones).await?;
        let zone_count = zones.len();

        self.notify(SyncProgress::message(format!(
            "Synced {zone_count} zones. Fetching streets..."
        )));

        let mut street_count = 0;
        for zone in &zones {
            if self.cancel.is_cancelled() {
                self.notify(SyncProgress::message("Sync cancelled."));
                return Ok(());
            }

            self.throttle().await;

            match self.client.fetch_streets(&zone.zone_number).await {
                Ok(streets) => {
                    street_count += StreetRepository::new(&self.db)
                        .upsert_many(zone, streets)
                        .await?
                        .len();
                    self.notify(SyncProgress::message(format!(
                        "Synced {street_count} streets..."
                    )));
                }
                Err(err) => {
                    tracing::error!("Error syncing streets for zone {}: {err}", zone.zone_number);
                }
            }
        }

        self.notify(SyncProgress::message(format!(
            "Synced {street_count} streets. Fetching buildings..."
        )));

        // Re-read from the store rather than the fetch results above so
        // streets persisted by an earlier interrupted run are included.
        let streets = StreetRepository::new(&self.db).list_all().await?;
        let total_streets = streets.len();

        let mut building_count = 0;
        for (idx, street) in streets.iter().enumerate() {
            if self.cancel.is_cancelled() {
                self.notify(SyncProgress::message("Sync cancelled."));
                return Ok(());
            }

            self.throttle().await;

            match self
                .client
                .fetch_buildings(&street.zone_number, &street.street_number)
                .await
            {
                Ok(buildings) => {
                    building_count += BuildingRepository::new(&self.db)
                        .upsert_many(street, buildings)
                        .await?
                        .len();

                    if idx % CHECKPOINT_INTERVAL == 0 {
                        self.notify(SyncProgress::message(format!(
                            "Synced {building_count} buildings ({}/{total_streets} streets)...",
                            idx + 1
                        )));
                    }
                }
                Err(err) => {
                    tracing::error!(
                        "Error syncing buildings for street {}: {err}",
                        street.street_key
                    );
                }
            }
        }

        let total_zones = ZoneRepository::new(&self.db).count().await?;
        let total_streets = StreetRepository::new(&self.db).count().await?;
        let total_buildings = BuildingRepository::new(&self.db).count().await?;
        sync_state_repo
            .record_full_sync(total_zones as i32, total_streets as i32, total_buildings as i32)
            .await?;

        self.notify(SyncProgress::complete(format!(
            "Sync complete! {zone_count} zones, {street_count} streets, {building_count} buildings."
        )));

        Ok(())
    }

    async fn buildings_sync(&self) -> Result<(), Error> {
        let sync_state_repo = SyncStateRepository::new(&self.db);
        let state = sync_state_repo.get_or_init().await?;
        let start_index = state.last_synced_street_index.max(0) as usize;

        let streets = StreetRepository::new(&self.db).list_all().await?;
        let total_streets = streets.len();

        if start_index >= total_streets {
            self.notify(SyncProgress::complete(
                "All streets already synced. Reset index to sync again.",
            ));
            return Ok(());
        }

        self.notify(SyncProgress::message(format!(
            "Resuming from street {}/{total_streets}...",
            start_index + 1
        )));

        let mut building_count = 0;

        for (idx, street) in streets.iter().enumerate().skip(start_index) {
            if self.cancel.is_cancelled() {
                sync_state_repo
                    .set_checkpoint(idx as i32, building_count as i32)
                    .await?;
                self.notify(SyncProgress::message(format!(
                    "Sync cancelled at street {idx}/{total_streets}."
                )));
                return Ok(());
            }

            self.throttle().await;

            match self
                .client
                .fetch_buildings(&street.zone_number, &street.street_number)
                .await
            {
                Ok(buildings) => {
                    building_count += BuildingRepository::new(&self.db)
                        .upsert_many(street, buildings)
                        .await?
                        .len();

                    if idx % CHECKPOINT_INTERVAL == 0 {
                        sync_state_repo
                            .set_checkpoint((idx + 1) as i32, building_count as i32)
                            .await?;
                        self.notify(SyncProgress::message(format!(
                            "Synced {building_count} buildings ({}/{total_streets} streets)...",
                            idx + 1
                        )));
                    }
                }
                Err(err) => {
                    tracing::error!(
                        "Error syncing buildings for street {}: {err}",
                        street.street_key
                    );
                    // Keep the failing index so the next resume retries
                    // this street instead of skipping it.
                    sync_state_repo
                        .set_checkpoint(idx as i32, building_count as i32)
                        .await?;
                }
            }
        }

        let total_buildings = BuildingRepository::new(&self.db).count().await?;
        sync_state_repo
            .record_buildings_sync(
                total_streets as i32,
                total_buildings as i32,
                building_count as i32,
            )
            .await?;

        self.notify(SyncProgress::complete(format!(
            "Building sync complete! {building_count} buildings synced."
        )));

        Ok(())
    }

    fn notify(&self, progress: SyncProgress) {
        // Fire and forget; a dropped dashboard listener must not abort
        // the sync.
        let _ = self.progress.send(progress);
    }

    async fn throttle(&self) {
        if !self.rate_limit.is_zero() {
            tokio::time::sleep(self.rate_limit).await;
        }
    }
}
