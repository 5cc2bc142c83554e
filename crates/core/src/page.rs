use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Request for one page of a list view. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub size: u32,
    /// Caller-owned filter values (search text, category, date range),
    /// passed through to the loader untouched.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub filters: BTreeMap<String, String>,
}

impl PageQuery {
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self { page: page.max(1), size, filters: BTreeMap::new() }
    }

    #[must_use]
    pub fn with_filters(mut self, filters: BTreeMap<String, String>) -> Self {
        self.filters = filters;
        self
    }

    /// Number of items to skip before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.size)
    }
}

/// One page of results plus paging metadata, as returned by a loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageData<T> {
    pub items: Vec<T>,
    /// Total items across all pages.
    pub total: u64,
    pub page: u32,
    pub size: u32,
    /// Total pages for `total` at `size`; 0 when the result set is empty.
    pub pages: u32,
}

impl<T> PageData<T> {
    /// Build a page from a slice of the full result set, deriving the
    /// page count from `total` and the query size.
    #[must_use]
    pub fn paged(items: Vec<T>, total: u64, query: &PageQuery) -> Self {
        Self {
            items,
            total,
            page: query.page,
            size: query.size,
            pages: total_pages(total, query.size),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn is_first_page(&self) -> bool {
        self.page <= 1
    }

    #[must_use]
    pub fn is_last_page(&self) -> bool {
        self.page >= self.pages
    }
}

/// Total pages for `total` items at `size` per page.
#[must_use]
pub fn total_pages(total: u64, size: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(size))).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_clamps_to_first_page() {
        assert_eq!(PageQuery::new(0, 20).page, 1);
        assert_eq!(PageQuery::new(3, 20).offset(), 40);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(100, 20), 5);
    }

    #[test]
    fn paged_derives_bounds() {
        let query = PageQuery::new(5, 20);
        let page = PageData::paged(vec![1, 2, 3], 83, &query);
        assert_eq!(page.pages, 5);
        assert!(page.is_last_page());
        assert!(!page.is_first_page());
    }
}
