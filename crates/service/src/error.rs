//! Typed error enum for the service layer.
//!
//! Unifies storage and loader failures into a single error type so
//! callers can match on specific failure modes.

use rentdesk_core::DomainError;
use rentdesk_storage::StorageError;
use thiserror::Error;

use crate::loader::LoaderError;

/// Service-layer error unifying storage, loader, and input failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (not found, corrupt blob, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Page load failed (network/server error from the loader port).
    #[error("loader: {0}")]
    Loader(#[from] LoaderError),

    /// Domain rule rejected the input.
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    /// Caller provided invalid input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A scan was attempted with no active session selected.
    #[error("no active scan session")]
    NoActiveSession,
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(*self, Self::Storage(ref e) if e.is_not_found())
    }
}
