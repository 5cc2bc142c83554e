use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Reference-counted loading-indicator state shared by any number of
/// concurrent loads. Replaces the ambient global counter the admin
/// pages kept: injected where needed, queried by whoever draws the
/// spinner.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    active: Arc<AtomicUsize>,
}

impl LoadingTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark one load as started, returning a guard that marks it
    /// finished on drop (including on error and stale-drop paths).
    #[must_use]
    pub fn guard(&self) -> LoadingGuard {
        self.begin();
        LoadingGuard { tracker: self.clone() }
    }

    pub fn begin(&self) {
        self.active.fetch_add(1, Ordering::SeqCst);
    }

    /// Saturating: an unmatched `end` never wraps below zero.
    pub fn end(&self) {
        let _ = self
            .active
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.active_count() > 0
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

/// RAII handle from [`LoadingTracker::guard`].
#[derive(Debug)]
pub struct LoadingGuard {
    tracker: LoadingTracker,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.tracker.end();
    }
}
