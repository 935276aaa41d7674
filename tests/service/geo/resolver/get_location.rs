//! Tests for ResolverService::get_location.
//!
//! Verifies the single-building resolution path: local cache first,
//! QNAS linear scan on a miss, lazy persistence of the one match, and
//! `Ok(None)` (never an error) for anything unresolvable.

use unwan::{
    data::geo::{
        building::BuildingRepository, street::StreetRepository, zone::ZoneRepository,
    },
    model::Coordinate,
    service::geo::resolver::ResolverService,
};
use unwan_test_utils::prelude::*;

/// Tests resolving a building that only QNAS knows about.
///
/// Expected: Ok(Some) with the provider coordinates, and the building
/// cached under its composite key afterwards.
#[tokio::test]
async fn resolves_from_provider_and_persists() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint(
        "12",
        "5",
        &[
            factory::mock_building_record(1, Some(25.0), Some(51.0)),
            factory::mock_building_record(3, Some(25.1), Some(51.2)),
        ],
        1,
    );

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        result.unwrap(),
        Some(Coordinate {
            latitude: 25.1,
            longitude: 51.2,
        })
    );

    // Only the matching building was cached, via the create-if-absent
    // street path.
    let building = BuildingRepository::new(&test.state.db)
        .get_by_building_key("12-5-3")
        .await?;
    assert!(building.is_some());
    let sibling = BuildingRepository::new(&test.state.db)
        .get_by_building_key("12-5-1")
        .await?;
    assert!(sibling.is_none());
    let street = StreetRepository::new(&test.state.db).get_by_street_key("12-5").await?;
    assert!(street.is_some());

    mock.assert();

    Ok(())
}

/// Tests resolving a building that is already cached with coordinates.
///
/// Expected: Ok(Some) from the store; QNAS is never called.
#[tokio::test]
async fn resolved_building_served_locally() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint("12", "5", &[], 0);

    let zones = ZoneRepository::new(&test.state.db)
        .upsert_many(vec![factory::mock_zone_record(12)])
        .await?;
    let streets = StreetRepository::new(&test.state.db)
        .upsert_many(&zones[0], vec![factory::mock_street_record(5)])
        .await?;
    BuildingRepository::new(&test.state.db)
        .upsert_many(
            &streets[0],
            vec![factory::mock_building_record(3, Some(25.1), Some(51.2))],
        )
        .await?;

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        result.unwrap(),
        Some(Coordinate {
            latitude: 25.1,
            longitude: 51.2,
        })
    );

    mock.assert();

    Ok(())
}

/// Tests resolving a cached building that has no coordinates yet.
///
/// Expected: the unresolved local record does not satisfy the lookup;
/// QNAS is consulted and its coordinates returned.
#[tokio::test]
async fn unresolved_local_building_falls_back() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint(
        "12",
        "5",
        &[factory::mock_building_record(3, Some(25.1), Some(51.2))],
        1,
    );

    let zones = ZoneRepository::new(&test.state.db)
        .upsert_many(vec![factory::mock_zone_record(12)])
        .await?;
    let streets = StreetRepository::new(&test.state.db)
        .upsert_many(&zones[0], vec![factory::mock_street_record(5)])
        .await?;
    BuildingRepository::new(&test.state.db)
        .upsert_many(
            &streets[0],
            vec![factory::mock_building_record(3, None, None)],
        )
        .await?;

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(
        result.unwrap(),
        Some(Coordinate {
            latitude: 25.1,
            longitude: 51.2,
        })
    );

    mock.assert();

    Ok(())
}

/// Tests resolving a building unknown to both the cache and QNAS.
///
/// Expected: Ok(None) — "unknown location", not a failure.
#[tokio::test]
async fn unknown_building_returns_none() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint(
        "12",
        "5",
        &[factory::mock_building_record(7, Some(25.1), Some(51.2))],
        1,
    );

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    let building = BuildingRepository::new(&test.state.db)
        .get_by_building_key("12-5-3")
        .await?;
    assert!(building.is_none());

    mock.assert();

    Ok(())
}

/// Tests resolving a building whose provider record carries the zero
/// placeholder coordinates.
///
/// Expected: Ok(None), and the placeholder is not cached.
#[tokio::test]
async fn zero_coordinates_are_unresolved() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint(
        "12",
        "5",
        &[factory::mock_building_record(3, Some(0.0), Some(0.0))],
        1,
    );

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    let building = BuildingRepository::new(&test.state.db)
        .get_by_building_key("12-5-3")
        .await?;
    assert!(building.is_none());

    mock.assert();

    Ok(())
}

/// Tests resolving a building while QNAS is down.
///
/// Expected: Ok(None), never an error.
#[tokio::test]
async fn provider_failure_returns_none() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_failure_endpoint("/get_buildings/12/5", 500, 1);

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_location("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    mock.assert();

    Ok(())
}
