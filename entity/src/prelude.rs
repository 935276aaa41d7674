pub use super::geo_building::Entity as GeoBuilding;
pub use super::geo_street::Entity as GeoStreet;
pub use super::geo_sync_state::Entity as GeoSyncState;
pub use super::geo_zone::Entity as GeoZone;
