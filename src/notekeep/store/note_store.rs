use super::backend::StorageBackend;
use crate::error::{NotesError, Result, StorageError, StorageResult};
use crate::index::NoteSelector;
use crate::model::{Note, NoteId};

/// The authoritative, ordered note collection.
///
/// Loaded once from the backend when opened; [`NoteStore::save`] writes the whole
/// collection back. Only the command layer mutates it.
pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
    notes: Vec<Note>,
}

impl<B: StorageBackend> NoteStore<B> {
    /// Opens the collection stored under `key`.
    ///
    /// A missing value gives an empty collection. So does a value that cannot be read or
    /// parsed; that case is logged, and the next save overwrites it.
    pub fn open(backend: B, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes = match load_notes(&backend, &key) {
            Ok(notes) => notes,
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "could not load notes, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(key = %key, count = notes.len(), "opened note store");
        Self {
            backend,
            key,
            notes,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// All notes in storage order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Note> {
        self.notes.get(position)
    }

    pub fn position_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }

    /// Maps a selector to a current storage position.
    ///
    /// Never clamps: an out-of-range position is an error.
    pub fn resolve(&self, selector: NoteSelector) -> Result<usize> {
        match selector {
            NoteSelector::Position(index) if index < self.notes.len() => Ok(index),
            NoteSelector::Position(index) => Err(NotesError::IndexOutOfBounds {
                index,
                len: self.notes.len(),
            }),
            NoteSelector::Id(id) => self.position_of(id).ok_or(NotesError::NoteNotFound(id)),
        }
    }

    /// Writes the whole collection to the backend.
    pub fn save(&self) -> StorageResult<()> {
        let blob = serde_json::to_string(&self.notes).map_err(StorageError::Serialization)?;
        self.backend.set(&self.key, &blob)
    }

    /// Replaces the in-memory collection with what the backend currently holds.
    pub fn reload(&mut self) -> StorageResult<()> {
        self.notes = load_notes(&self.backend, &self.key)?;
        Ok(())
    }

    pub(crate) fn push(&mut self, note: Note) -> usize {
        self.notes.push(note);
        self.notes.len() - 1
    }

    /// Callers resolve the position first; out-of-range positions are a bug.
    pub(crate) fn note_mut(&mut self, position: usize) -> &mut Note {
        &mut self.notes[position]
    }

    pub(crate) fn remove(&mut self, position: usize) -> Note {
        self.notes.remove(position)
    }
}

fn load_notes<B: StorageBackend>(backend: &B, key: &str) -> StorageResult<Vec<Note>> {
    match backend.get(key)? {
        Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Serialization),
        None => Ok(Vec::new()),
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::config::DEFAULT_STORAGE_KEY;
    use crate::store::mem_backend::MemBackend;

    pub struct StoreFixture {
        pub store: NoteStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: NoteStore::open(MemBackend::new(), DEFAULT_STORAGE_KEY),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.push(Note::new(
                    format!("Note {}", i + 1),
                    "Work".to_string(),
                    "Medium".to_string(),
                    "#ffffff".to_string(),
                ));
            }
            self
        }

        pub fn with_note(mut self, text: &str) -> Self {
            self.store.push(Note::new(
                text.to_string(),
                "Work".to_string(),
                "Medium".to_string(),
                "#ffffff".to_string(),
            ));
            self
        }

        pub fn with_pinned_note(mut self, text: &str) -> Self {
            let mut note = Note::new(
                text.to_string(),
                "Work".to_string(),
                "High".to_string(),
                "#ffeb3b".to_string(),
            );
            note.pinned = true;
            self.store.push(note);
            self
        }

        pub fn with_archived_note(mut self, text: &str) -> Self {
            let mut note = Note::new(
                text.to_string(),
                "Other".to_string(),
                "Low".to_string(),
                "#ffffff".to_string(),
            );
            note.archived = true;
            self.store.push(note);
            self
        }
    }
}
