use std::sync::Arc;

use rentdesk_core::{
    ACTIVE_SESSION_KEY, AddOutcome, EquipmentRef, SCAN_SESSIONS_KEY, ScanSession,
};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Repository for scan sessions, the single source of truth for the
/// session collection and the active-session pointer.
///
/// The whole collection is serialized as one JSON blob at a fixed key;
/// every mutating operation writes the blob back before returning, so
/// state survives page navigation and process restarts. There is no
/// cross-process coordination: two concurrent writers can clobber each
/// other's writes, same as the origin-local storage this models.
#[derive(Clone)]
pub struct SessionStore {
    kv: Arc<dyn KeyValueStore>,
}

impl SessionStore {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Create a session and append it to the persisted collection.
    ///
    /// The new session does NOT become active; activation is a separate
    /// caller decision.
    pub fn create_session(&self, name: &str) -> Result<ScanSession, StorageError> {
        let session = ScanSession::new(name)?;
        let mut sessions = self.load_collection()?;
        sessions.push(session.clone());
        self.save_collection(&sessions)?;
        tracing::debug!(id = %session.id, name = %session.name, "created scan session");
        Ok(session)
    }

    /// All sessions, in creation order.
    pub fn list_sessions(&self) -> Result<Vec<ScanSession>, StorageError> {
        self.load_collection()
    }

    /// Session by id.
    pub fn get_session(&self, id: &str) -> Result<Option<ScanSession>, StorageError> {
        let sessions = self.load_collection()?;
        Ok(sessions.into_iter().find(|s| s.id == id))
    }

    /// Point the active-session pointer at `id`.
    ///
    /// Returns `false` (no-op, nothing written) when `id` does not
    /// reference an existing session.
    pub fn set_active_session(&self, id: &str) -> Result<bool, StorageError> {
        let sessions = self.load_collection()?;
        if !sessions.iter().any(|s| s.id == id) {
            tracing::warn!(id, "refusing to activate unknown scan session");
            return Ok(false);
        }
        self.kv.set(ACTIVE_SESSION_KEY, id)?;
        Ok(true)
    }

    /// The session the active pointer references, if any.
    ///
    /// A dangling pointer resolves to `None`; the pointer itself is left
    /// in place.
    pub fn get_active_session(&self) -> Result<Option<ScanSession>, StorageError> {
        match self.kv.get(ACTIVE_SESSION_KEY)? {
            Some(id) => self.get_session(&id),
            None => Ok(None),
        }
    }

    /// Drop the active-session pointer.
    pub fn clear_active_session(&self) -> Result<(), StorageError> {
        self.kv.remove(ACTIVE_SESSION_KEY)
    }

    /// Add equipment to the session with id `session_id`.
    ///
    /// Delegates the serialized-vs-bulk rule to the domain type and
    /// persists the collection when the session was mutated (a rejected
    /// duplicate serial writes nothing).
    pub fn add_equipment(
        &self,
        session_id: &str,
        re: EquipmentRef,
    ) -> Result<AddOutcome, StorageError> {
        let mut sessions = self.load_collection()?;
        let Some(session) = sessions.iter_mut().find(|s| s.id == session_id) else {
            return Err(StorageError::NotFound {
                entity: "scan session",
                id: session_id.to_owned(),
            });
        };
        let outcome = session.add_equipment(re);
        if outcome.mutated() {
            self.save_collection(&sessions)?;
        }
        Ok(outcome)
    }

    /// Delete a session. Returns `true` if one was removed.
    ///
    /// Clears the active pointer when it referenced the deleted session.
    pub fn delete_session(&self, id: &str) -> Result<bool, StorageError> {
        let mut sessions = self.load_collection()?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);
        if sessions.len() == before {
            return Ok(false);
        }
        self.save_collection(&sessions)?;
        if self.kv.get(ACTIVE_SESSION_KEY)?.as_deref() == Some(id) {
            self.kv.remove(ACTIVE_SESSION_KEY)?;
        }
        Ok(true)
    }

    fn load_collection(&self) -> Result<Vec<ScanSession>, StorageError> {
        match self.kv.get(SCAN_SESSIONS_KEY)? {
            Some(blob) => Ok(serde_json::from_str(&blob)?),
            None => Ok(Vec::new()),
        }
    }

    fn save_collection(&self, sessions: &[ScanSession]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(sessions)?;
        self.kv.set(SCAN_SESSIONS_KEY, &blob)
    }
}
