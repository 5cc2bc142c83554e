use std::sync::Arc;

use rentdesk_core::AddOutcome;

use super::{bulk_ref, create_sqlite_store, memory_session_store, serialized_ref};
use crate::{SessionStore, StorageError};

#[test]
fn create_session_is_persisted_but_not_active() {
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();

    let listed = store.list_sessions().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, session.id);
    assert!(store.get_active_session().unwrap().is_none());
}

#[test]
fn blank_name_is_rejected() {
    let store = memory_session_store();
    assert!(matches!(store.create_session("   "), Err(StorageError::InvalidInput(_))));
    assert!(store.list_sessions().unwrap().is_empty());
}

#[test]
fn activate_and_clear() {
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();

    assert!(store.set_active_session(&session.id).unwrap());
    assert_eq!(store.get_active_session().unwrap().unwrap().id, session.id);

    store.clear_active_session().unwrap();
    assert!(store.get_active_session().unwrap().is_none());
}

#[test]
fn activating_unknown_session_is_a_no_op() {
    let store = memory_session_store();
    store.create_session("Event A").unwrap();

    assert!(!store.set_active_session("no-such-id").unwrap());
    assert!(store.get_active_session().unwrap().is_none());
}

#[test]
fn serial_dedup_at_store_level() {
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();

    let first = store.add_equipment(&session.id, serialized_ref(7, "SN1")).unwrap();
    assert_eq!(first, AddOutcome::ItemAdded);

    let second = store.add_equipment(&session.id, serialized_ref(7, "SN1")).unwrap();
    assert_eq!(second, AddOutcome::DuplicateSerial);

    let reloaded = store.get_session(&session.id).unwrap().unwrap();
    assert_eq!(reloaded.item_count(), 1);
    assert_eq!(reloaded.items[0].quantity, 1);
}

#[test]
fn bulk_increment_at_store_level() {
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();

    assert_eq!(store.add_equipment(&session.id, bulk_ref(8)).unwrap(), AddOutcome::ItemAdded);
    assert_eq!(
        store.add_equipment(&session.id, bulk_ref(8)).unwrap(),
        AddOutcome::QuantityIncremented { quantity: 2 }
    );
    assert_eq!(
        store.add_equipment(&session.id, bulk_ref(8)).unwrap(),
        AddOutcome::QuantityIncremented { quantity: 3 }
    );

    let reloaded = store.get_session(&session.id).unwrap().unwrap();
    assert_eq!(reloaded.items[0].quantity, 3);
}

#[test]
fn sessions_are_isolated() {
    let store = memory_session_store();
    let a = store.create_session("Event A").unwrap();
    let b = store.create_session("Event B").unwrap();

    store.add_equipment(&a.id, serialized_ref(7, "SN1")).unwrap();
    store.add_equipment(&a.id, bulk_ref(8)).unwrap();

    let b_reloaded = store.get_session(&b.id).unwrap().unwrap();
    assert!(b_reloaded.items.is_empty());

    // the same serial is a fresh add in the other session
    assert_eq!(
        store.add_equipment(&b.id, serialized_ref(7, "SN1")).unwrap(),
        AddOutcome::ItemAdded
    );
}

#[test]
fn add_to_unknown_session_is_not_found() {
    let store = memory_session_store();
    let err = store.add_equipment("no-such-id", bulk_ref(8)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_session_clears_active_pointer() {
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();
    store.set_active_session(&session.id).unwrap();

    assert!(store.delete_session(&session.id).unwrap());
    assert!(store.get_active_session().unwrap().is_none());
    assert!(store.list_sessions().unwrap().is_empty());

    assert!(!store.delete_session(&session.id).unwrap());
}

#[test]
fn mixed_scenario_from_the_scan_flow() {
    // create "Event A", scan serialized 7/SN1 twice, bulk 8 twice
    let store = memory_session_store();
    let session = store.create_session("Event A").unwrap();
    store.set_active_session(&session.id).unwrap();

    assert_eq!(
        store.add_equipment(&session.id, serialized_ref(7, "SN1")).unwrap(),
        AddOutcome::ItemAdded
    );
    assert_eq!(
        store.add_equipment(&session.id, serialized_ref(7, "SN1")).unwrap(),
        AddOutcome::DuplicateSerial
    );
    assert_eq!(store.add_equipment(&session.id, bulk_ref(8)).unwrap(), AddOutcome::ItemAdded);
    assert_eq!(
        store.add_equipment(&session.id, bulk_ref(8)).unwrap(),
        AddOutcome::QuantityIncremented { quantity: 2 }
    );

    let reloaded = store.get_active_session().unwrap().unwrap();
    assert_eq!(reloaded.item_count(), 2);
    assert_eq!(reloaded.items[0].serial_number.as_deref(), Some("SN1"));
    assert_eq!(reloaded.items[0].quantity, 1);
    assert_eq!(reloaded.items[1].serial_number, None);
    assert_eq!(reloaded.items[1].quantity, 2);
}

#[test]
fn sessions_survive_sqlite_reopen() {
    let (sqlite, temp_dir) = create_sqlite_store();
    let store = SessionStore::new(Arc::new(sqlite));
    let session = store.create_session("Warehouse audit").unwrap();
    store.set_active_session(&session.id).unwrap();
    store.add_equipment(&session.id, bulk_ref(42)).unwrap();

    let reopened = crate::SqliteStore::open(temp_dir.path().join("test.db")).unwrap();
    let store = SessionStore::new(Arc::new(reopened));

    let active = store.get_active_session().unwrap().unwrap();
    assert_eq!(active.name, "Warehouse audit");
    assert_eq!(active.item_count(), 1);
}
