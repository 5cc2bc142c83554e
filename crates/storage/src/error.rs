//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, corrupt blob,
//! pool exhaustion) instead of downcasting opaque boxes.

use rentdesk_core::DomainError;
use thiserror::Error;

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Entity expected to be present was not.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Caller provided invalid input (blank session name).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Connection pool checkout failed.
    #[error("connection pool error: {0}")]
    Pool(String),

    /// SQL execution or connection failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Stored blob could not be deserialized into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StorageError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(*self, Self::NotFound { .. })
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err)
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(err: r2d2::Error) -> Self {
        Self::Pool(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}

impl From<DomainError> for StorageError {
    fn from(err: DomainError) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
