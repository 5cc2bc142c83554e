//! Local page loader over a stored scan session's items.

use async_trait::async_trait;
use rentdesk_core::{PageData, PageQuery, ScanItem};
use rentdesk_service::{LoaderError, PageLoader};
use rentdesk_storage::SessionStore;

/// Pages through one session's items, honoring a `q` filter that
/// substring-matches name or barcode (case-insensitive).
pub struct SessionItemsLoader {
    store: SessionStore,
    session_id: String,
}

impl SessionItemsLoader {
    pub fn new(store: SessionStore, session_id: impl Into<String>) -> Self {
        Self { store, session_id: session_id.into() }
    }
}

#[async_trait]
impl PageLoader<ScanItem> for SessionItemsLoader {
    async fn load_page(&self, query: &PageQuery) -> Result<PageData<ScanItem>, LoaderError> {
        let session = self
            .store
            .get_session(&self.session_id)
            .map_err(|e| LoaderError::new(e.to_string()))?
            .ok_or_else(|| LoaderError::new(format!("unknown session {}", self.session_id)))?;

        let needle = query.filters.get("q").map(|q| q.to_lowercase());
        let matching: Vec<ScanItem> = session
            .items
            .into_iter()
            .filter(|item| match needle {
                Some(ref q) => {
                    item.name.to_lowercase().contains(q) || item.barcode.to_lowercase().contains(q)
                },
                None => true,
            })
            .collect();

        let total = matching.len() as u64;
        let start = usize::try_from(query.offset().min(total)).unwrap_or(usize::MAX);
        let end = start.saturating_add(query.size as usize).min(matching.len());
        let items = matching[start..end].to_vec();
        Ok(PageData::paged(items, total, query))
    }
}
