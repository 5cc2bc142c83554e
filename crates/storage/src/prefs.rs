use std::sync::Arc;

use rentdesk_core::{PAGE_SIZE_KEY_PREFIX, PAGE_SIZES};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Persisted page-size preference, one value per list-view storage key.
///
/// Paired controllers configured with the same storage key share the
/// persisted size. Unparseable or disallowed stored values fall back to
/// "nothing persisted" with a warning rather than erroring.
#[derive(Clone)]
pub struct PageSizePrefs {
    kv: Arc<dyn KeyValueStore>,
}

impl PageSizePrefs {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// The persisted page size for `storage_key`, if a valid one exists.
    pub fn get(&self, storage_key: &str) -> Result<Option<u32>, StorageError> {
        let Some(raw) = self.kv.get(&pref_key(storage_key))? else {
            return Ok(None);
        };
        match raw.parse::<u32>() {
            Ok(size) if PAGE_SIZES.contains(&size) => Ok(Some(size)),
            Ok(size) => {
                tracing::warn!(storage_key, size, "persisted page size not in allowed set");
                Ok(None)
            },
            Err(_) => {
                tracing::warn!(storage_key, value = %raw, "unparseable persisted page size");
                Ok(None)
            },
        }
    }

    /// Persist `size` for `storage_key`.
    pub fn set(&self, storage_key: &str, size: u32) -> Result<(), StorageError> {
        self.kv.set(&pref_key(storage_key), &size.to_string())
    }
}

fn pref_key(storage_key: &str) -> String {
    format!("{PAGE_SIZE_KEY_PREFIX}.{storage_key}")
}
