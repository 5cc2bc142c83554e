use rentdesk_core::PageData;
use serde::Serialize;

/// The "showing X–Y of Z" numbers for a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub pages: u32,
    pub total: u64,
    /// 1-based index of the first rendered item; 0 when the page is empty.
    pub from: u64,
    /// 1-based index of the last rendered item; 0 when the page is empty.
    pub to: u64,
}

impl PageInfo {
    #[must_use]
    pub fn for_page<T>(data: &PageData<T>) -> Self {
        let offset = u64::from(data.page.saturating_sub(1)) * u64::from(data.size);
        let count = data.items.len() as u64;
        Self {
            page: data.page,
            pages: data.pages,
            total: data.total,
            from: if count == 0 { 0 } else { offset + 1 },
            to: offset + count,
        }
    }
}

/// Narrow render capabilities a list view exposes to the controller.
///
/// Keeps the controller decoupled from concrete UI elements: a target
/// renders rows, updates the pager caption, and shows empty/error
/// states, nothing more.
pub trait RenderTarget<T>: Send + Sync {
    fn render_page(&self, data: &PageData<T>);
    fn set_page_info(&self, info: &PageInfo);
    fn show_empty(&self);
    fn show_error(&self, message: &str);
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// Fire-and-forget user notification port (toasts in the admin UI).
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Notifier that drops everything; for tests and quiet callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _message: &str, _severity: Severity) {}
}
