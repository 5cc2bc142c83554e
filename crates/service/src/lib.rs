//! Service layer for rentdesk
//!
//! The paged-list controller with stale-response guarding, the
//! scan-session service, and the outbound ports they talk through
//! (page loader, render target, notifier).

mod error;
mod loader;
mod loading;
mod pagination;
mod render;
mod session_service;

pub use error::ServiceError;
pub use loader::{LoaderError, PageLoader};
pub use loading::{LoadingGuard, LoadingTracker};
pub use pagination::{PaginationController, PaginationOptions, ViewState};
pub use render::{NullNotifier, Notifier, PageInfo, RenderTarget, Severity};
pub use session_service::ScanSessionService;
