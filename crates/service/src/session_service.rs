use std::sync::Arc;

use rentdesk_core::{AddOutcome, EquipmentRef, ScanSession};
use rentdesk_storage::SessionStore;

use crate::error::ServiceError;
use crate::render::{Notifier, Severity};

/// Scan-session workflows as the pages use them: create/activate
/// sessions and funnel scans into the active one, with every outcome
/// messaged distinctly through the notifier.
pub struct ScanSessionService {
    store: SessionStore,
    notifier: Arc<dyn Notifier>,
}

impl ScanSessionService {
    #[must_use]
    pub fn new(store: SessionStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// Create a session, optionally making it active right away (the
    /// usual "new session" flow does).
    pub fn create_session(&self, name: &str, activate: bool) -> Result<ScanSession, ServiceError> {
        let session = self.store.create_session(name)?;
        if activate {
            self.store.set_active_session(&session.id)?;
        }
        self.notifier
            .notify(&format!("Scan session \"{}\" created", session.name), Severity::Success);
        Ok(session)
    }

    /// Point the active pointer at `id`. Returns `false` for an unknown
    /// session (warned, nothing changed).
    pub fn activate_session(&self, id: &str) -> Result<bool, ServiceError> {
        let activated = self.store.set_active_session(id)?;
        if !activated {
            self.notifier.notify("Unknown scan session", Severity::Warning);
        }
        Ok(activated)
    }

    pub fn active_session(&self) -> Result<Option<ScanSession>, ServiceError> {
        Ok(self.store.get_active_session()?)
    }

    pub fn list_sessions(&self) -> Result<Vec<ScanSession>, ServiceError> {
        Ok(self.store.list_sessions()?)
    }

    pub fn get_session(&self, id: &str) -> Result<Option<ScanSession>, ServiceError> {
        Ok(self.store.get_session(id)?)
    }

    pub fn delete_session(&self, id: &str) -> Result<bool, ServiceError> {
        Ok(self.store.delete_session(id)?)
    }

    /// Add a scanned item to the active session.
    pub fn add_scan(&self, re: EquipmentRef) -> Result<AddOutcome, ServiceError> {
        let Some(active) = self.store.get_active_session()? else {
            self.notifier.notify("No active scan session", Severity::Warning);
            return Err(ServiceError::NoActiveSession);
        };
        self.add_to_session(&active.id, re)
    }

    /// Add an item to a specific session and message the outcome.
    pub fn add_to_session(
        &self,
        session_id: &str,
        re: EquipmentRef,
    ) -> Result<AddOutcome, ServiceError> {
        let name = re.name.clone();
        let outcome = self.store.add_equipment(session_id, re)?;
        match outcome {
            AddOutcome::ItemAdded => {
                self.notifier.notify(&format!("{name} added"), Severity::Success);
            },
            AddOutcome::QuantityIncremented { quantity } => {
                self.notifier
                    .notify(&format!("{name} quantity increased to {quantity}"), Severity::Success);
            },
            AddOutcome::DuplicateSerial => {
                self.notifier.notify(&format!("{name} already scanned"), Severity::Warning);
            },
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use rentdesk_storage::MemoryStore;

    use super::*;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: Mutex<Vec<(String, Severity)>>,
    }

    impl RecordingNotifier {
        fn messages(&self) -> Vec<(String, Severity)> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, severity: Severity) {
            self.messages.lock().unwrap().push((message.to_owned(), severity));
        }
    }

    fn service() -> (ScanSessionService, Arc<RecordingNotifier>) {
        let notifier = Arc::new(RecordingNotifier::default());
        let store = SessionStore::new(Arc::new(MemoryStore::new()));
        (ScanSessionService::new(store, Arc::clone(&notifier) as Arc<dyn Notifier>), notifier)
    }

    #[test]
    fn create_with_activate_sets_the_active_session() {
        let (service, _notifier) = service();
        let session = service.create_session("Event A", true).unwrap();
        assert_eq!(service.active_session().unwrap().unwrap().id, session.id);
    }

    #[test]
    fn scan_without_active_session_is_a_distinct_error() {
        let (service, notifier) = service();
        let err = service.add_scan(EquipmentRef::new(7, "PA Speaker", "EQ-0007")).unwrap_err();
        assert!(matches!(err, ServiceError::NoActiveSession));
        assert_eq!(
            notifier.messages(),
            vec![("No active scan session".to_owned(), Severity::Warning)]
        );
    }

    #[test]
    fn outcomes_are_messaged_distinctly() {
        let (service, notifier) = service();
        service.create_session("Event A", true).unwrap();

        let serialized = EquipmentRef::new(7, "PA Speaker", "EQ-0007").with_serial("SN1");
        assert_eq!(service.add_scan(serialized.clone()).unwrap(), AddOutcome::ItemAdded);
        assert_eq!(service.add_scan(serialized).unwrap(), AddOutcome::DuplicateSerial);

        let bulk = EquipmentRef::new(8, "XLR Cable", "EQ-0008");
        assert_eq!(service.add_scan(bulk.clone()).unwrap(), AddOutcome::ItemAdded);
        assert_eq!(
            service.add_scan(bulk).unwrap(),
            AddOutcome::QuantityIncremented { quantity: 2 }
        );

        let messages = notifier.messages();
        // session created + four scan outcomes
        assert_eq!(messages.len(), 5);
        assert_eq!(messages[2], ("PA Speaker already scanned".to_owned(), Severity::Warning));
        assert_eq!(
            messages[4],
            ("XLR Cable quantity increased to 2".to_owned(), Severity::Success)
        );
    }

    #[test]
    fn add_to_unknown_session_surfaces_not_found() {
        let (service, _notifier) = service();
        let err =
            service.add_to_session("missing", EquipmentRef::new(1, "Stand", "EQ-0001")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn activating_unknown_session_warns_and_returns_false() {
        let (service, notifier) = service();
        assert!(!service.activate_session("missing").unwrap());
        assert_eq!(
            notifier.messages(),
            vec![("Unknown scan session".to_owned(), Severity::Warning)]
        );
    }
}
