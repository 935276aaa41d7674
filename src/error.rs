//! Error types for the unwan core library.
//!
//! A single aggregate [`Error`] wraps the external library errors (QNAS
//! client, database) plus the cache-consistency case so services can
//! propagate everything with `?`. Provider failures are intentionally
//! absorbed at the resolver and sync-engine boundaries — address lookup
//! is a convenience feature and partial data beats a hard failure — so
//! callers of those services mostly see empty results, not
//! `Error::QnasError`.

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    /// The geo cache violates the zone → street → building reference
    /// chain. The create-if-absent persist ordering prevents this in
    /// normal operation; it surfaces only when the cache was mutated
    /// outside this library.
    #[error("Geo cache inconsistent: {0}")]
    CacheInconsistent(String),
    /// QNAS client error (API unavailable, malformed responses).
    #[error(transparent)]
    QnasError(#[from] qnas::Error),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
