//! Terminal render target and notifier.

use rentdesk_core::{PageData, ScanItem};
use rentdesk_service::{Notifier, PageInfo, RenderTarget, Severity};

/// Renders a page of scan items as an aligned table on stdout.
#[derive(Debug, Default)]
pub struct TableTarget;

impl RenderTarget<ScanItem> for TableTarget {
    fn render_page(&self, data: &PageData<ScanItem>) {
        println!("{:<8} {:<28} {:<12} {:<14} {:>4}", "ID", "NAME", "BARCODE", "SERIAL", "QTY");
        for item in &data.items {
            println!(
                "{:<8} {:<28} {:<12} {:<14} {:>4}",
                item.equipment_id,
                item.name,
                item.barcode,
                item.serial_number.as_deref().unwrap_or("-"),
                item.quantity,
            );
        }
    }

    fn set_page_info(&self, info: &PageInfo) {
        println!(
            "showing {}-{} of {} (page {}/{})",
            info.from, info.to, info.total, info.page, info.pages
        );
    }

    fn show_empty(&self) {
        println!("(empty)");
    }

    fn show_error(&self, message: &str) {
        eprintln!("error: {message}");
    }
}

/// Prints notifications to stderr with their severity tag.
#[derive(Debug, Default)]
pub struct TermNotifier;

impl Notifier for TermNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let tag = match severity {
            Severity::Info => "info",
            Severity::Success => "ok",
            Severity::Warning => "warn",
            Severity::Danger => "error",
        };
        eprintln!("[{tag}] {message}");
    }
}
