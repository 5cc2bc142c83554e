use async_trait::async_trait;
use rentdesk_core::{PageData, PageQuery};
use thiserror::Error;

/// Failure from a [`PageLoader`]. Carries a message only; the transport
/// detail stays with the implementation.
#[derive(Debug, Clone, Error)]
#[error("page load failed: {message}")]
pub struct LoaderError {
    pub message: String,
}

impl LoaderError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Loads one page of records for a list view.
///
/// Implemented by whatever fetches the data: an HTTP client against
/// the backend's paginated endpoints, or a local store. A loader must
/// fail with an error on any problem, never return partial data.
#[async_trait]
pub trait PageLoader<T>: Send + Sync {
    async fn load_page(&self, query: &PageQuery) -> Result<PageData<T>, LoaderError>;
}
