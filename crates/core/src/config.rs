//! Environment-driven defaults with warn-level logging for bad values.

use crate::constants::{DEFAULT_PAGE_SIZE, PAGE_SIZES};

/// Read a page size from an environment variable.
///
/// - Variable unset: returns the default silently (expected case).
/// - Set but unparseable, or not one of the allowed sizes: logs a
///   warning and returns the default instead of erroring.
#[must_use]
pub fn page_size_from_env(var: &str) -> u32 {
    let Ok(raw) = std::env::var(var) else {
        return DEFAULT_PAGE_SIZE;
    };
    match raw.parse::<u32>() {
        Ok(size) if PAGE_SIZES.contains(&size) => size,
        Ok(size) => {
            tracing::warn!(var, size, "page size not in allowed set, using default");
            DEFAULT_PAGE_SIZE
        },
        Err(_) => {
            tracing::warn!(var, value = %raw, "invalid page size value, using default");
            DEFAULT_PAGE_SIZE
        },
    }
}
