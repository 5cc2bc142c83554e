//! Test utilities and module declarations for storage tests.

use std::sync::Arc;

use rentdesk_core::EquipmentRef;
use tempfile::TempDir;

use crate::{MemoryStore, SessionStore, SqliteStore};

#[expect(clippy::unwrap_used, reason = "test code")]
pub fn create_sqlite_store() -> (SqliteStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let store = SqliteStore::open(&db_path).unwrap();
    (store, temp_dir)
}

pub fn memory_session_store() -> SessionStore {
    SessionStore::new(Arc::new(MemoryStore::new()))
}

pub fn serialized_ref(equipment_id: i64, serial: &str) -> EquipmentRef {
    EquipmentRef::new(equipment_id, format!("Equipment {equipment_id}"), barcode(equipment_id))
        .with_serial(serial)
}

pub fn bulk_ref(equipment_id: i64) -> EquipmentRef {
    EquipmentRef::new(equipment_id, format!("Equipment {equipment_id}"), barcode(equipment_id))
}

fn barcode(equipment_id: i64) -> String {
    format!("EQ-{equipment_id:04}")
}

mod session_store_tests;
