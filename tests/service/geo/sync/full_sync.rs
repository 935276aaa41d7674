//! Tests for SyncEngine::run_full_sync.
//!
//! Drives the complete zones → streets → buildings walk against mocked
//! QNAS endpoints with the rate limit zeroed out.

use std::time::Duration;

use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio_util::sync::CancellationToken;
use unwan::{
    data::geo::{
        building::BuildingRepository, street::StreetRepository, sync_state::SyncStateRepository,
        zone::ZoneRepository,
    },
    service::geo::sync::{SyncEngine, SyncProgress},
};
use unwan_test_utils::prelude::*;

use super::drain_events;

fn build_engine(test: &TestSetup) -> (SyncEngine, UnboundedReceiver<SyncProgress>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    let engine = SyncEngine::new(
        test.state.db.clone(),
        test.state.qnas_client.clone(),
        sender,
        CancellationToken::new(),
    )
    .with_rate_limit(Duration::ZERO);

    (engine, receiver)
}

/// Tests a full sync over a two-zone hierarchy.
///
/// Expected: every zone, street, and building cached; totals and the
/// last-synced timestamp recorded; a final `complete` event.
#[tokio::test]
async fn syncs_full_hierarchy() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;

    let zones_mock = test.mock_zones_endpoint(
        &[factory::mock_zone_record(12), factory::mock_zone_record(13)],
        1,
    );
    let streets_12 = test.mock_streets_endpoint(
        "12",
        &[factory::mock_street_record(1), factory::mock_street_record(2)],
        1,
    );
    let streets_13 = test.mock_streets_endpoint("13", &[factory::mock_street_record(1)], 1);
    let buildings_12_1 = test.mock_buildings_endpoint(
        "12",
        "1",
        &[factory::mock_building_record(1, Some(25.1), Some(51.2))],
        1,
    );
    let buildings_12_2 = test.mock_buildings_endpoint(
        "12",
        "2",
        &[
            factory::mock_building_record(1, Some(25.2), Some(51.3)),
            factory::mock_building_record(2, None, None),
        ],
        1,
    );
    let buildings_13_1 = test.mock_buildings_endpoint(
        "13",
        "1",
        &[factory::mock_building_record(4, Some(25.3), Some(51.4))],
        1,
    );

    let (engine, mut receiver) = build_engine(&test);
    engine.run_full_sync().await;

    assert_eq!(ZoneRepository::new(&test.state.db).count().await?, 2);
    assert_eq!(StreetRepository::new(&test.state.db).count().await?, 3);
    assert_eq!(BuildingRepository::new(&test.state.db).count().await?, 4);

    let state = SyncStateRepository::new(&test.state.db).get_or_init().await?;
    assert!(state.last_synced.is_some());
    assert_eq!(state.total_zones, 2);
    assert_eq!(state.total_streets, 3);
    assert_eq!(state.total_buildings, 4);
    // The full sync resets the buildings resume position and leaves it
    // for the buildings-only job to advance.
    assert_eq!(state.last_synced_street_index, 0);

    let events = drain_events(&mut receiver);
    assert_eq!(events[0].message, "Fetching zones...");
    let last = events.last().unwrap();
    assert!(last.complete);
    assert!(!last.error);
    assert_eq!(
        last.message,
        "Sync complete! 2 zones, 3 streets, 4 buildings."
    );

    zones_mock.assert();
    streets_12.assert();
    streets_13.assert();
    buildings_12_1.assert();
    buildings_12_2.assert();
    buildings_13_1.assert();

    Ok(())
}

/// Tests a full sync where one zone's streets endpoint is down.
///
/// Expected: the failing zone is skipped, every other zone syncs, and
/// the run still completes.
#[tokio::test]
async fn street_failure_is_skipped() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;

    let _zones_mock = test.mock_zones_endpoint(
        &[factory::mock_zone_record(12), factory::mock_zone_record(13)],
        1,
    );
    let _streets_12 = test.mock_streets_endpoint("12", &[factory::mock_street_record(1)], 1);
    let _streets_13 = test.mock_failure_endpoint("/get_streets/13", 500, 1);
    let _buildings_12_1 = test.mock_buildings_endpoint(
        "12",
        "1",
        &[factory::mock_building_record(1, Some(25.1), Some(51.2))],
        1,
    );

    let (engine, mut receiver) = build_engine(&test);
    engine.run_full_sync().await;

    assert_eq!(ZoneRepository::new(&test.state.db).count().await?, 2);
    assert_eq!(StreetRepository::new(&test.state.db).count().await?, 1);
    assert_eq!(BuildingRepository::new(&test.state.db).count().await?, 1);

    let events = drain_events(&mut receiver);
    let last = events.last().unwrap();
    assert!(last.complete);
    assert!(!last.error);

    Ok(())
}

/// Tests a full sync when the zones endpoint itself is down.
///
/// Expected: nothing cached, the checkpoint reset, and an `error` event
/// published instead of `complete`.
#[tokio::test]
async fn zones_failure_emits_error_event() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let _zones_mock = test.mock_failure_endpoint("/public/get_zones", 500, 1);

    // A stale resume position from an earlier buildings run.
    SyncStateRepository::new(&test.state.db)
        .set_checkpoint(5, 120)
        .await?;

    let (engine, mut receiver) = build_engine(&test);
    engine.run_full_sync().await;

    assert_eq!(ZoneRepository::new(&test.state.db).count().await?, 0);

    let state = SyncStateRepository::new(&test.state.db).get_or_init().await?;
    assert_eq!(state.last_synced_street_index, 0);
    assert!(state.last_synced.is_none());

    let events = drain_events(&mut receiver);
    let last = events.last().unwrap();
    assert!(last.error);
    assert!(!last.complete);

    Ok(())
}
