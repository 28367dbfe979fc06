use crate::model::NoteId;
use thiserror::Error;

/// Failures raised by a [`StorageBackend`](crate::store::backend::StorageBackend).
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Backend error: {0}")]
    Backend(String),
}

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Invalid note: {0}")]
    Validation(String),

    #[error("Index {index} is out of bounds (collection has {len} notes)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Note not found: {0}")]
    NoteNotFound(NoteId),

    /// The change was applied in memory but could not be written.
    #[error("Changes were not saved: {0}")]
    Persistence(#[from] StorageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NotesError>;
pub type StorageResult<T> = std::result::Result<T, StorageError>;
