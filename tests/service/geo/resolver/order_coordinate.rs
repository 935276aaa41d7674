//! Tests for ResolverService::order_coordinate, the derived `"lat,lng"`
//! string stored on order records.

use unwan::service::geo::resolver::ResolverService;
use unwan_test_utils::prelude::*;

/// Tests coordinate derivation for a resolvable building.
///
/// Expected: Ok(Some) with the `"lat,lng"` format the driver reports
/// parse back out.
#[tokio::test]
async fn formats_latitude_comma_longitude() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint(
        "12",
        "5",
        &[factory::mock_building_record(3, Some(25.1), Some(51.2))],
        1,
    );

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.order_coordinate("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), Some("25.1,51.2".to_string()));

    mock.assert();

    Ok(())
}

/// Tests coordinate derivation with an incomplete address reference.
///
/// Expected: Ok(None) without any QNAS request.
#[tokio::test]
async fn incomplete_reference_returns_none() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint("12", "5", &[], 0);

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.order_coordinate("12", "5", "").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    mock.assert();

    Ok(())
}

/// Tests coordinate derivation for an unknown building.
///
/// Expected: Ok(None) so the order keeps its empty coordinate field.
#[tokio::test]
async fn unknown_building_returns_none() -> Result<(), TestError> {
    let mut test = test_setup_with_geo_tables!()?;
    let mock = test.mock_buildings_endpoint("12", "5", &[], 1);

    let resolver = ResolverService::new(&test.state.db, &test.state.qnas_client);
    let result = resolver.order_coordinate("12", "5", "3").await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().is_none());

    mock.assert();

    Ok(())
}
