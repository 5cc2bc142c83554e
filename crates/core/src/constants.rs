//! Shared constants for rentdesk.
//!
//! Centralizes the durable-storage keys and page-size policy used
//! across crates.

/// Namespace prefix for every durable key written by rentdesk.
pub const STORAGE_NAMESPACE: &str = "rentdesk";

/// Key holding the serialized scan-session collection (one JSON blob).
pub const SCAN_SESSIONS_KEY: &str = "rentdesk.scan_sessions";

/// Key holding the active-session pointer.
pub const ACTIVE_SESSION_KEY: &str = "rentdesk.active_scan_session";

/// Prefix for persisted page-size preferences; the list view's storage
/// key is appended (`rentdesk.page_size.<storage_key>`).
pub const PAGE_SIZE_KEY_PREFIX: &str = "rentdesk.page_size";

/// Page sizes selectable in list views.
pub const PAGE_SIZES: [u32; 3] = [20, 50, 100];

/// Default page size when nothing is persisted for a view.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
