//! Factories for QNAS record fixtures with default test values.

use qnas::model::{BuildingRecord, StreetRecord, ZoneRecord};

/// Create a mock zone record with generated bilingual names.
pub fn mock_zone_record(zone_number: u32) -> ZoneRecord {
    ZoneRecord {
        zone_number: zone_number.to_string(),
        zone_name_en: format!("Zone {zone_number}"),
        zone_name_ar: format!("منطقة {zone_number}"),
    }
}

/// Create a mock street record with generated bilingual names.
pub fn mock_street_record(street_number: u32) -> StreetRecord {
    StreetRecord {
        street_number: street_number.to_string(),
        street_name_en: format!("Street {street_number}"),
        street_name_ar: format!("شارع {street_number}"),
    }
}

/// Create a mock building record with the given coordinates.
pub fn mock_building_record(
    building_number: u32,
    x: Option<f64>,
    y: Option<f64>,
) -> BuildingRecord {
    BuildingRecord {
        building_number: building_number.to_string(),
        x,
        y,
    }
}
