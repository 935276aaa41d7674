//! Tests for ResolverService::get_zones.
//!
//! Verifies the two-phase lookup policy at zone level: a warm cache is
//! served locally without touching QNAS, a cold cache falls back to the
//! provider, and provider failures degrade to an empty result instead
//! of an error.

use unwan::{data::geo::zone::ZoneRepository, service::geo::resolver::ResolverService};
use unwan_test_utils::prelude::*;

/// Tests zone lookup against an empty cache.
///
/// Expected: Ok with options fetched from QNAS, ordered by numeric zone
/// number and labeled `"<number> - <name_en> (<name_ar>)"`.
#[tokio::test]
async fn cold_cache_fetches_from_provider() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_zones_endpoint(
        &[
            factory::mock_zone_record(101),
            factory::mock_zone_record(9),
            factory::mock_zone_record(12),
        ],
        1,
    );

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_zones().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let options = result.unwrap();

    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["9", "12", "101"]);
    assert_eq!(options[0].label, "9 - Zone 9 (منطقة 9)");

    mock.assert();

    Ok(())
}

/// Tests zone lookup against a populated cache.
///
/// Expected: Ok with options read from the store; the QNAS endpoint is
/// never called.
#[tokio::test]
async fn warm_cache_skips_provider() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_zones_endpoint(&[], 0);

    ZoneRepository::new(&test.state.db)
        .upsert_many(vec![factory::mock_zone_record(12), factory::mock_zone_record(9)])
        .await?;

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_zones().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let options = result.unwrap();

    let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
    assert_eq!(values, vec!["9", "12"]);
    assert_eq!(options[1].label, "12 - Zone 12 (منطقة 12)");

    mock.assert();

    Ok(())
}

/// Tests zone lookup while QNAS is down.
///
/// Expected: Ok with an empty list, never an error.
#[tokio::test]
async fn provider_failure_returns_empty() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_failure_endpoint("/public/get_zones", 500, 1);

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.get_zones().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    mock.assert();

    Ok(())
}

/// Tests zone lookup with the remote fallback disabled.
///
/// Expected: Ok with an empty list and no QNAS request.
#[tokio::test]
async fn remote_disabled_serves_cache_only() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_zones_endpoint(&[factory::mock_zone_record(12)], 0);

    let resolver =
        ResolverService::new(&test.state.db, &test.state.qnas_client).with_remote_enabled(false);
    let result = resolver.get_zones().await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_empty());

    mock.assert();

    Ok(())
}
