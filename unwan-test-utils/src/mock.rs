//! QNAS HTTP mock endpoint helpers.
//!
//! Each helper registers a mock GET endpoint on the setup's mockito
//! server and verifies it was called exactly `expected_requests` times.

use mockito::Mock;
use qnas::model::{BuildingRecord, StreetRecord, ZoneRecord};

use crate::setup::TestSetup;

impl TestSetup {
    /// Mock the public zones listing endpoint.
    pub fn mock_zones_endpoint(&mut self, zones: &[ZoneRecord], expected_requests: usize) -> Mock {
        self.server
            .mock("GET", "/public/get_zones")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(zones).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock the streets-by-zone endpoint.
    pub fn mock_streets_endpoint(
        &mut self,
        zone_number: &str,
        streets: &[StreetRecord],
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/get_streets/{}", zone_number);

        self.server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(streets).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock the buildings-by-zone-and-street endpoint.
    pub fn mock_buildings_endpoint(
        &mut self,
        zone_number: &str,
        street_number: &str,
        buildings: &[BuildingRecord],
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/get_buildings/{}/{}", zone_number, street_number);

        self.server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(buildings).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Mock a failing endpoint at the given path, e.g. to simulate a
    /// QNAS outage for one street.
    pub fn mock_failure_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
