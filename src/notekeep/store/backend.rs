use crate::error::StorageResult;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while NoteStore handles the "what" (the collection and its format).
///
/// Methods take `&self`; implementations needing mutation use interior mutability.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic: a failed write leaves the previous value readable.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
