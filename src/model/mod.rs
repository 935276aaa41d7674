//! Data transfer types exposed to the consuming application layers.

use serde::{Deserialize, Serialize};

/// A `{value, label}` pair for the cascading address dropdowns on the
/// order form. `value` is the raw zone/street number; `label` is the
/// display form `"<number> - <name_en> (<name_ar>)"`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupOption {
    pub value: String,
    pub label: String,
}

/// A building option, carrying the raw provider coordinates alongside
/// the number so the order form can preview the location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuildingOption {
    pub value: String,
    pub label: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// A resolved building location.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}
