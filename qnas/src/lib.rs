//! Client for the QNAS (Qatar National Address System) geocoding API.
//!
//! QNAS exposes the Qatari address hierarchy as three read-only listing
//! endpoints: zones, streets by zone, and buildings by zone and street.
//! This crate wraps them behind a typed [`Client`] with optional
//! `X-Token`/`X-Domain` authentication headers and a two-variant error
//! taxonomy: the service was [unavailable](Error::Unavailable), or it
//! answered with something that is not the expected record shape
//! ([malformed](Error::Malformed)).

pub mod client;
pub mod error;
pub mod model;

pub use client::{Client, ClientBuilder, DEFAULT_BASE_URL};
pub use error::Error;
