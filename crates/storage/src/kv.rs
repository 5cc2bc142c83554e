use crate::error::StorageError;

/// Durable blob-per-key storage port.
///
/// Synchronous by contract, modeled after the origin-local storage the
/// admin pages persist into: whole values are read and written as
/// strings under namespaced keys, and a write is durable once the call
/// returns. Concurrent writers are not coordinated; last write wins.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored at `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` at `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value at `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
