use sea_orm::DatabaseConnection;

use crate::{
    data::geo::{
        building::{building_key, BuildingRepository},
        street::StreetRepository,
        sync_state::SyncStateRepository,
        zone::ZoneRepository,
    },
    error::Error,
    model::{BuildingOption, Coordinate, LookupOption},
};

/// Warmth of the local geo cache.
///
/// `Cold` means the zone table is empty and every lookup goes straight
/// to QNAS. `Warming` means a sync has started populating the cache but
/// never finished; `Warm` means a full sync completed. Lookups read the
/// cache whenever it is not `Cold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    Cold,
    Warming,
    Warm,
}

/// Cache-first, remote-fallback address lookups.
///
/// Every operation follows the same two-phase policy: answer from the
/// local geo cache when it has anything to say, otherwise ask QNAS and
/// lazily persist what came back (buildings only — zone and street
/// listings are cheap enough to re-fetch). QNAS failures are logged and
/// reported as empty results; address lookup is a convenience for the
/// order form, not a correctness-critical path.
pub struct ResolverService<'a> {
    db: &'a DatabaseConnection,
    client: &'a qnas::Client,
    remote_enabled: bool,
}

impl<'a> ResolverService<'a> {
    pub fn new(db: &'a DatabaseConnection, client: &'a qnas::Client) -> Self {
        Self {
            db,
            client,
            remote_enabled: true,
        }
    }

    /// Disable the QNAS fallback, serving lookups from the cache only.
    pub fn with_remote_enabled(mut self, remote_enabled: bool) -> Self {
        self.remote_enabled = remote_enabled;
        self
    }

    pub async fn cache_state(&self) -> Result<CacheState, Error> {
        let zones = ZoneRepository::new(self.db).count().await?;
        if zones == 0 {
            return Ok(CacheState::Cold);
        }

        let state = SyncStateRepository::new(self.db).get_or_init().await?;
        Ok(if state.last_synced.is_some() {
            CacheState::Warm
        } else {
            CacheState::Warming
        })
    }

    /// List all zones as dropdown options.
    pub async fn get_zones(&self) -> Result<Vec<LookupOption>, Error> {
        if self.cache_state().await? != CacheState::Cold {
            let zones = ZoneRepository::new(self.db).list_all().await?;
            if !zones.is_empty() {
                let mut options: Vec<LookupOption> = zones
                    .into_iter()
                    .map(|z| LookupOption {
                        label: format_label(&z.zone_number, &z.name_en, &z.name_ar),
                        value: z.zone_number,
                    })
                    .collect();
                sort_by_numeric_value(&mut options);
                return Ok(options);
            }
        }

        if !self.remote_enabled {
            return Ok(Vec::new());
        }

        let zones = match self.client.fetch_zones().await {
            Ok(zones) => zones,
            Err(err) => {
                tracing::warn!("Error fetching zones: {err}");
                return Ok(Vec::new());
            }
        };

        let mut options: Vec<LookupOption> = zones
            .into_iter()
            .map(|z| LookupOption {
                label: format_label(&z.zone_number, &z.zone_name_en, &z.zone_name_ar),
                value: z.zone_number,
            })
            .collect();
        sort_by_numeric_value(&mut options);
        Ok(options)
    }

    /// List the streets of a zone as dropdown options.
    pub async fn get_streets(&self, zone_number: &str) -> Result<Vec<LookupOption>, Error> {
        if self.cache_state().await? != CacheState::Cold {
            let streets = StreetRepository::new(self.db).list_by_zone(zone_number).await?;
            if !streets.is_empty() {
                let mut options: Vec<LookupOption> = streets
                    .into_iter()
                    .map(|s| LookupOption {
                        label: format_label(&s.street_number, &s.name_en, &s.name_ar),
                        value: s.street_number,
                    })
                    .collect();
                sort_by_numeric_value(&mut options);
                return Ok(options);
            }
        }

        if !self.remote_enabled {
            return Ok(Vec::new());
        }

        let streets = match self.client.fetch_streets(zone_number).await {
            Ok(streets) => streets,
            Err(err) => {
                tracing::warn!("Error fetching streets: {err}");
                return Ok(Vec::new());
            }
        };

        let mut options: Vec<LookupOption> = streets
            .into_iter()
            .map(|s| LookupOption {
                label: format_label(&s.street_number, &s.street_name_en, &s.street_name_ar),
                value: s.street_number,
            })
            .collect();
        sort_by_numeric_value(&mut options);
        Ok(options)
    }

    /// List the buildings of a street, with raw coordinates attached.
    ///
    /// A remote fallback also persists the street (created if absent)
    /// and every fetched building, so the next lookup for this street is
    /// served locally.
    pub async fn get_buildings(
        &self,
        zone_number: &str,
        street_number: &str,
    ) -> Result<Vec<BuildingOption>, Error> {
        if self.cache_state().await? != CacheState::Cold {
            let buildings = BuildingRepository::new(self.db)
                .list_by_street(zone_number, street_number)
                .await?;
            if !buildings.is_empty() {
                let mut options: Vec<BuildingOption> = buildings
                    .into_iter()
                    .map(|b| BuildingOption {
                        label: b.building_number.clone(),
                        value: b.building_number,
                        x: b.latitude,
                        y: b.longitude,
                    })
                    .collect();
                sort_buildings_by_numeric_value(&mut options);
                return Ok(options);
            }
        }

        if !self.remote_enabled {
            return Ok(Vec::new());
        }

        let buildings = match self.client.fetch_buildings(zone_number, street_number).await {
            Ok(buildings) => buildings,
            Err(err) => {
                tracing::warn!("Error fetching buildings: {err}");
                return Ok(Vec::new());
            }
        };

        if !buildings.is_empty() {
            self.persist_fetched_street(zone_number, street_number, &buildings)
                .await?;
        }

        let mut options: Vec<BuildingOption> = buildings
            .into_iter()
            .map(|b| BuildingOption {
                label: b.building_number.clone(),
                value: b.building_number,
                x: b.x,
                y: b.y,
            })
            .collect();
        sort_buildings_by_numeric_value(&mut options);
        Ok(options)
    }

    /// Resolve a single building to coordinates.
    ///
    /// Checks the local cache first; on a miss, fetches the street's
    /// buildings from QNAS, scans for the requested number, and caches
    /// the one match before returning. `Ok(None)` means "unknown
    /// location" — callers must not treat it as a failure.
    pub async fn get_location(
        &self,
        zone_number: &str,
        street_number: &str,
        building_number: &str,
    ) -> Result<Option<Coordinate>, Error> {
        let key = building_key(zone_number, street_number, building_number);

        if let Some(building) = BuildingRepository::new(self.db).get_by_building_key(&key).await? {
            if let Some(coordinate) = resolved_coordinate(building.latitude, building.longitude) {
                return Ok(Some(coordinate));
            }
        }

        if !self.remote_enabled {
            return Ok(None);
        }

        let buildings = match self.client.fetch_buildings(zone_number, street_number).await {
            Ok(buildings) => buildings,
            Err(err) => {
                tracing::warn!("Error fetching location: {err}");
                return Ok(None);
            }
        };

        for building in buildings {
            if building.building_number == building_number {
                let Some((latitude, longitude)) = building.coordinate() else {
                    break;
                };

                self.persist_single_building(zone_number, street_number, building_number, latitude, longitude)
                    .await?;

                return Ok(Some(Coordinate {
                    latitude,
                    longitude,
                }));
            }
        }

        Ok(None)
    }

    /// The `"lat,lng"` string stored on an order record, refreshed from
    /// the building cache whenever the order's address changes.
    pub async fn order_coordinate(
        &self,
        zone_number: &str,
        street_number: &str,
        building_number: &str,
    ) -> Result<Option<String>, Error> {
        if zone_number.is_empty() || street_number.is_empty() || building_number.is_empty() {
            return Ok(None);
        }

        let location = self
            .get_location(zone_number, street_number, building_number)
            .await?;

        Ok(location.map(|c| format!("{},{}", c.latitude, c.longitude)))
    }

    async fn persist_fetched_street(
        &self,
        zone_number: &str,
        street_number: &str,
        buildings: &[qnas::model::BuildingRecord],
    ) -> Result<(), Error> {
        let street = self.ensure_street(zone_number, street_number).await?;
        BuildingRepository::new(self.db)
            .insert_missing(&street, buildings)
            .await?;

        Ok(())
    }

    async fn persist_single_building(
        &self,
        zone_number: &str,
        street_number: &str,
        building_number: &str,
        latitude: f64,
        longitude: f64,
    ) -> Result<(), Error> {
        let street = self.ensure_street(zone_number, street_number).await?;
        BuildingRepository::new(self.db)
            .create_if_absent(&street, building_number, latitude, longitude)
            .await?;

        Ok(())
    }

    /// Materialize the zone → street reference chain for a lazy persist,
    /// creating placeholders where needed. A street attached to a stale
    /// zone record (possible only when the cache was mutated externally)
    /// is reported rather than silently adopted.
    async fn ensure_street(
        &self,
        zone_number: &str,
        street_number: &str,
    ) -> Result<entity::geo_street::Model, Error> {
        let zone = ZoneRepository::new(self.db).get_or_create(zone_number).await?;
        let street = StreetRepository::new(self.db)
            .get_or_create(&zone, street_number)
            .await?;

        if street.zone_id != zone.id {
            return Err(Error::CacheInconsistent(format!(
                "street {} references zone record {} but zone {} is record {}",
                street.street_key, street.zone_id, zone.zone_number, zone.id
            )));
        }

        Ok(street)
    }
}

fn format_label(number: &str, name_en: &str, name_ar: &str) -> String {
    format!("{number} - {name_en} ({name_ar})")
}

fn resolved_coordinate(latitude: Option<f64>, longitude: Option<f64>) -> Option<Coordinate> {
    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) if latitude != 0.0 && longitude != 0.0 => {
            Some(Coordinate {
                latitude,
                longitude,
            })
        }
        _ => None,
    }
}

/// Zone/street/building numbers sort numerically; anything unparseable
/// goes last in its textual order.
fn numeric_rank(value: &str) -> i64 {
    value.trim().parse().unwrap_or(i64::MAX)
}

fn sort_by_numeric_value(options: &mut [LookupOption]) {
    options.sort_by(|a, b| {
        numeric_rank(&a.value)
            .cmp(&numeric_rank(&b.value))
            .then_with(|| a.value.cmp(&b.value))
    });
}

fn sort_buildings_by_numeric_value(options: &mut [BuildingOption]) {
    options.sort_by(|a, b| {
        numeric_rank(&a.value)
            .cmp(&numeric_rank(&b.value))
            .then_with(|| a.value.cmp(&b.value))
    });
}
