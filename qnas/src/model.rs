//! QNAS response records.
//!
//! The upstream API is loose about identifier types: the same field may
//! arrive as a JSON number on one endpoint and a string on another, so
//! every identifier is normalized to `String` during deserialization.
//! Name fields are occasionally missing and default to empty.

use serde::{Deserialize, Deserializer, Serialize};

fn number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Number(number) => number.to_string(),
        Raw::Text(text) => text,
    })
}

/// One zone as returned by `GET /public/get_zones`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    #[serde(deserialize_with = "number_or_string")]
    pub zone_number: String,
    #[serde(default)]
    pub zone_name_en: String,
    #[serde(default)]
    pub zone_name_ar: String,
}

/// One street as returned by `GET /get_streets/{zone}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreetRecord {
    #[serde(deserialize_with = "number_or_string")]
    pub street_number: String,
    #[serde(default)]
    pub street_name_en: String,
    #[serde(default)]
    pub street_name_ar: String,
}

/// One building as returned by `GET /get_buildings/{zone}/{street}`.
///
/// `x` and `y` are stored downstream directly as latitude and longitude;
/// QNAS does not document which axis comes first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingRecord {
    #[serde(deserialize_with = "number_or_string")]
    pub building_number: String,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl BuildingRecord {
    /// The building's coordinate pair, when resolved.
    ///
    /// A building counts as resolved only when both values are present
    /// and non-zero; the upstream data uses zero as a placeholder for
    /// unsurveyed buildings.
    pub fn coordinate(&self) -> Option<(f64, f64)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x != 0.0 && y != 0.0 => Some((x, y)),
            _ => None,
        }
    }
}
