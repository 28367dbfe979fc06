//! # Storage Layer
//!
//! Two pieces, split the same way as "what" and "how":
//!
//! - [`note_store::NoteStore`] owns the in-memory, ordered note collection. It loads the
//!   collection once when opened and writes the **whole** collection back on every save.
//! - [`backend::StorageBackend`] is the raw key-value I/O underneath it: `get`/`set` of a
//!   serialized blob under a key.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: Production file-based storage
//!   - One `<key>.json` file per key under a root directory
//!   - Atomic writes (temp file + rename)
//!
//! - [`mem_backend::MemBackend`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! The value under the `notes` key is a JSON array, one object per note in storage order,
//! with exactly these fields:
//!
//! ```text
//! [{"text":"Buy milk","category":"Personal","priority":"Low","color":"#fff",
//!   "timestamp":1718000000000,"pinned":false,"archived":false}]
//! ```
//!
//! There is no version field and no migration. A blob that does not parse is treated as an
//! empty collection.

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod note_store;

pub use backend::StorageBackend;
pub use note_store::NoteStore;
