//! Paged-list controller with stale-response guarding.
//!
//! Drives one list view: tracks page and page size, asks the loader
//! port for data, and pushes results at the render target. Overlapping
//! loads are resolved last-request-wins: every load takes a ticket from
//! a monotonic counter, and a resolution is applied only while its
//! ticket is still the newest. A superseded response is dropped
//! silently, whatever order the round-trips complete in.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rentdesk_core::{DEFAULT_PAGE_SIZE, PAGE_SIZES, PageData, PageQuery};
use rentdesk_storage::PageSizePrefs;

use crate::loader::{LoaderError, PageLoader};
use crate::loading::LoadingTracker;
use crate::render::{Notifier, NullNotifier, PageInfo, RenderTarget, Severity};


/// Construction options for a [`PaginationController`].
#[derive(Debug, Clone)]
pub struct PaginationOptions {
    /// Initial page size; must be one of `page_sizes`.
    pub page_size: u32,
    /// Sizes selectable for this view.
    pub page_sizes: Vec<u32>,
    /// Persist size changes under `storage_key`.
    pub persist_page_size: bool,
    /// Durable key identifying this list view. Two controllers sharing
    /// a key share the persisted page size.
    pub storage_key: String,
    /// Whether [`PaginationController::init`] issues the first load.
    pub auto_load_on_init: bool,
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_sizes: PAGE_SIZES.to_vec(),
            persist_page_size: false,
            storage_key: "list".to_owned(),
            auto_load_on_init: true,
        }
    }
}

/// Where the view currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Nothing loaded yet.
    Idle,
    /// A load is in flight.
    Loading,
    /// Showing fresh data from the newest load.
    Rendered,
    /// Newest load failed; showing the cached last-good page.
    RenderedFromCache,
    /// Newest load failed with nothing cached to fall back on.
    Empty,
}

type Observer = Box<dyn Fn(u32) + Send + Sync>;

struct ControllerState<T> {
    current_page: u32,
    page_size: u32,
    total_items: u64,
    total_pages: u32,
    filters: BTreeMap<String, String>,
    /// Last successful page, rendered as a fallback on transient failure.
    last_good: Option<PageData<T>>,
    view: ViewState,
}

/// Controller for one paged list view.
///
/// All methods take `&self`; state lives behind a mutex and the request
/// counter is atomic, so a controller can be shared behind an `Arc` by
/// the page glue that wires UI events to it. Two instances showing the
/// same data (a pager above and below a table) are kept visually in
/// sync by the caller cross-notifying through the observer callbacks;
/// nothing is automatic.
pub struct PaginationController<T> {
    options: PaginationOptions,
    loader: Arc<dyn PageLoader<T>>,
    target: Arc<dyn RenderTarget<T>>,
    notifier: Arc<dyn Notifier>,
    prefs: Option<PageSizePrefs>,
    tracker: Option<LoadingTracker>,
    state: Mutex<ControllerState<T>>,
    request_seq: AtomicU64,
    on_page_change: Option<Observer>,
    on_page_size_change: Option<Observer>,
}

impl<T: Clone + Send + Sync + 'static> PaginationController<T> {
    #[must_use]
    pub fn new(
        options: PaginationOptions,
        loader: Arc<dyn PageLoader<T>>,
        target: Arc<dyn RenderTarget<T>>,
    ) -> Self {
        let page_size = if options.page_sizes.contains(&options.page_size) {
            options.page_size
        } else {
            tracing::warn!(
                size = options.page_size,
                "configured page size not in allowed set, using default"
            );
            options.page_sizes.first().copied().unwrap_or(DEFAULT_PAGE_SIZE)
        };
        Self {
            options,
            loader,
            target,
            notifier: Arc::new(NullNotifier),
            prefs: None,
            tracker: None,
            state: Mutex::new(ControllerState {
                current_page: 1,
                page_size,
                total_items: 0,
                total_pages: 0,
                filters: BTreeMap::new(),
                last_good: None,
                view: ViewState::Idle,
            }),
            request_seq: AtomicU64::new(0),
            on_page_change: None,
            on_page_size_change: None,
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Attach persisted page-size preferences. A valid persisted size
    /// for this view's storage key overrides the configured one.
    #[must_use]
    pub fn with_prefs(mut self, prefs: PageSizePrefs) -> Self {
        if self.options.persist_page_size {
            match prefs.get(&self.options.storage_key) {
                Ok(Some(size)) => {
                    let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
                    state.page_size = size;
                },
                Ok(None) => {},
                Err(err) => {
                    tracing::warn!(error = %err, "could not read persisted page size");
                },
            }
        }
        self.prefs = Some(prefs);
        self
    }

    #[must_use]
    pub fn with_loading_tracker(mut self, tracker: LoadingTracker) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Observe page changes (fired after a fresh page renders).
    #[must_use]
    pub fn on_page_change(mut self, observer: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_change = Some(Box::new(observer));
        self
    }

    /// Observe page-size changes (fired when a new size is accepted).
    #[must_use]
    pub fn on_page_size_change(mut self, observer: impl Fn(u32) + Send + Sync + 'static) -> Self {
        self.on_page_size_change = Some(Box::new(observer));
        self
    }

    /// Run the configured initial load, if any.
    pub async fn init(&self) {
        if self.options.auto_load_on_init {
            self.load_data(None, None).await;
        }
    }

    /// Load a page, defaulting to the current page and size.
    ///
    /// Takes a ticket from the request counter before suspending; at
    /// resolution the result is applied only if the ticket is still the
    /// newest. The UI stays interactive while the load is in flight, so
    /// any further navigation or filter keystroke supersedes this call.
    pub async fn load_data(&self, page: Option<u32>, size: Option<u32>) {
        let (query, ticket) = {
            let mut state = self.lock_state();
            if let Some(page) = page {
                state.current_page = page.max(1);
            }
            if let Some(size) = size {
                state.page_size = size;
            }
            state.view = ViewState::Loading;
            let ticket = self.request_seq.fetch_add(1, Ordering::SeqCst) + 1;
            let query = PageQuery::new(state.current_page, state.page_size)
                .with_filters(state.filters.clone());
            (query, ticket)
        };

        let _guard = self.tracker.as_ref().map(LoadingTracker::guard);
        match self.loader.load_page(&query).await {
            Ok(data) => self.apply_success(ticket, data),
            Err(err) => self.apply_failure(ticket, &err),
        }
    }

    /// Back to page 1 with filters cleared, then reload.
    pub async fn reset(&self) {
        {
            let mut state = self.lock_state();
            state.filters.clear();
        }
        self.load_data(Some(1), None).await;
    }

    /// Replace the filter map and reload from page 1. Debouncing rapid
    /// filter input is the caller's concern; overlapping reloads are
    /// already safe under the ticket check.
    pub async fn set_filters(&self, filters: BTreeMap<String, String>) {
        {
            let mut state = self.lock_state();
            state.filters = filters;
        }
        self.load_data(Some(1), None).await;
    }

    /// No-op at the last page (or before any successful load).
    pub async fn next_page(&self) {
        let next = {
            let state = self.lock_state();
            if state.current_page >= state.total_pages {
                return;
            }
            state.current_page + 1
        };
        self.load_data(Some(next), None).await;
    }

    /// No-op at the first page.
    pub async fn prev_page(&self) {
        let prev = {
            let state = self.lock_state();
            if state.current_page <= 1 {
                return;
            }
            state.current_page - 1
        };
        self.load_data(Some(prev), None).await;
    }

    /// Switch the page size, reset to page 1 and reload.
    ///
    /// A size outside the configured set is ignored with a warning.
    /// The accepted size is persisted when the view is configured for
    /// it, and the size observer fires before the reload.
    pub async fn set_page_size(&self, size: u32) {
        if !self.options.page_sizes.contains(&size) {
            tracing::warn!(size, "ignoring page size outside the configured set");
            return;
        }
        if self.options.persist_page_size
            && let Some(ref prefs) = self.prefs
            && let Err(err) = prefs.set(&self.options.storage_key, size)
        {
            // a failed preference write must not break the view
            tracing::warn!(error = %err, "could not persist page size");
        }
        if let Some(ref observer) = self.on_page_size_change {
            observer(size);
        }
        self.load_data(Some(1), Some(size)).await;
    }

    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.lock_state().current_page
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.lock_state().page_size
    }

    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.lock_state().total_items
    }

    #[must_use]
    pub fn total_pages(&self) -> u32 {
        self.lock_state().total_pages
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.lock_state().view
    }

    /// Paging caption for the last good page, if one exists.
    #[must_use]
    pub fn page_info(&self) -> Option<PageInfo> {
        self.lock_state().last_good.as_ref().map(PageInfo::for_page)
    }

    fn apply_success(&self, ticket: u64, data: PageData<T>) {
        let page = {
            let mut state = self.lock_state();
            if self.request_seq.load(Ordering::SeqCst) != ticket {
                tracing::debug!(ticket, "discarding stale page response");
                return;
            }
            state.current_page = data.page.max(1);
            state.page_size = data.size;
            state.total_items = data.total;
            state.total_pages = data.pages;
            state.last_good = Some(data.clone());
            state.view = ViewState::Rendered;
            state.current_page
        };
        if data.is_empty() {
            self.target.show_empty();
        } else {
            self.target.render_page(&data);
        }
        self.target.set_page_info(&PageInfo::for_page(&data));
        if let Some(ref observer) = self.on_page_change {
            observer(page);
        }
    }

    fn apply_failure(&self, ticket: u64, err: &LoaderError) {
        let cached = {
            let mut state = self.lock_state();
            if self.request_seq.load(Ordering::SeqCst) != ticket {
                tracing::debug!(ticket, "discarding stale page failure");
                return;
            }
            match state.last_good.clone() {
                Some(cache) => {
                    // roll the visible position back to the cached page
                    state.current_page = cache.page;
                    state.page_size = cache.size;
                    state.view = ViewState::RenderedFromCache;
                    Some(cache)
                },
                None => {
                    state.view = ViewState::Empty;
                    None
                },
            }
        };
        tracing::warn!(error = %err, "page load failed");
        match cached {
            Some(cache) => {
                self.target.render_page(&cache);
                self.target.set_page_info(&PageInfo::for_page(&cache));
                self.notifier
                    .notify("Load failed, showing the last loaded page", Severity::Warning);
            },
            None => {
                self.target.show_error("Failed to load data");
                self.notifier.notify("Failed to load data", Severity::Danger);
            },
        }
    }

    fn lock_state(&self) -> MutexGuard<'_, ControllerState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
