//! # API Facade
//!
//! [`NotesApi`] is the single entry point a front-end talks to. It:
//! - **Dispatches** to the command for each operation
//! - **Signals** the registered [`ChangeListener`] after every mutation, so the
//!   front-end can re-render
//! - **Returns structured types** (`Result<CmdResult>`, `Vec<DisplayNote>`)
//!
//! It does no I/O of its own beyond what the storage backend does.
//!
//! ## Generic Over StorageBackend
//!
//! - Production: `NotesApi<FsBackend>`
//! - Testing: `NotesApi<MemBackend>`
//!
//! ## When the listener fires
//!
//! After any call that changed the in-memory collection. That includes a mutation whose
//! save failed (`NotesError::Persistence`): the change is live and should be shown, the
//! caller only needs to warn that it is not durable. Calls rejected before mutating
//! (validation, bad index, unknown id) do not fire it.

use crate::commands;
use crate::config::NotesConfig;
use crate::error::{NotesError, Result};
use crate::index::{DisplayNote, NoteSelector};
use crate::model::{Note, NoteDraft, NoteId};
use crate::store::{NoteStore, StorageBackend};
use std::path::Path;

/// Receives the re-render signal: the full collection, in storage order.
pub trait ChangeListener {
    fn notes_changed(&mut self, notes: &[Note]);
}

impl<F: FnMut(&[Note])> ChangeListener for F {
    fn notes_changed(&mut self, notes: &[Note]) {
        self(notes)
    }
}

pub struct NotesApi<B: StorageBackend> {
    store: NoteStore<B>,
    config: NotesConfig,
    listener: Option<Box<dyn ChangeListener>>,
}

impl<B: StorageBackend> NotesApi<B> {
    /// Loads the collection stored under `config.storage_key`.
    pub fn new(backend: B, config: NotesConfig) -> Self {
        let store = NoteStore::open(backend, config.storage_key.clone());
        Self {
            store,
            config,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: impl ChangeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn create(&mut self, draft: NoteDraft) -> Result<commands::CmdResult> {
        let result = commands::create::run(&mut self.store, &self.config, draft);
        self.after_mutation(result)
    }

    /// Creates a note with the configured default category, priority and color.
    pub fn create_text(&mut self, text: &str) -> Result<commands::CmdResult> {
        let draft = self.config.draft(text);
        self.create(draft)
    }

    pub fn edit(
        &mut self,
        selector: impl Into<NoteSelector>,
        new_text: &str,
    ) -> Result<commands::CmdResult> {
        let result = commands::edit::run(&mut self.store, selector.into(), new_text);
        self.after_mutation(result)
    }

    pub fn delete(&mut self, selector: impl Into<NoteSelector>) -> Result<commands::CmdResult> {
        let result = commands::delete::run(&mut self.store, selector.into());
        self.after_mutation(result)
    }

    pub fn toggle_pin(
        &mut self,
        selector: impl Into<NoteSelector>,
    ) -> Result<commands::CmdResult> {
        let result = commands::pinning::toggle(&mut self.store, selector.into());
        self.after_mutation(result)
    }

    pub fn toggle_archive(
        &mut self,
        selector: impl Into<NoteSelector>,
    ) -> Result<commands::CmdResult> {
        let result = commands::archive::toggle(&mut self.store, selector.into());
        self.after_mutation(result)
    }

    /// Case-insensitive substring search over note text, in storage order.
    pub fn query(&self, search_text: &str) -> Vec<DisplayNote> {
        commands::search::run(&self.store, search_text)
    }

    /// What a display should show for `search_text`: matches, pinned first, no archived.
    pub fn visible(&self, search_text: &str) -> Vec<DisplayNote> {
        visible_sorted(self.query(search_text))
    }

    /// All notes in storage order, archived included.
    pub fn notes(&self) -> &[Note] {
        self.store.notes()
    }

    pub fn position_of(&self, id: NoteId) -> Option<usize> {
        self.store.position_of(id)
    }

    pub fn export(&self, format: ExportFormat, dir: &Path) -> Result<commands::CmdResult> {
        commands::export::run(&self.store, format, dir)
    }

    pub fn config(&self) -> &NotesConfig {
        &self.config
    }

    pub fn store(&self) -> &NoteStore<B> {
        &self.store
    }

    fn after_mutation(
        &mut self,
        result: Result<commands::CmdResult>,
    ) -> Result<commands::CmdResult> {
        if matches!(result, Ok(_) | Err(NotesError::Persistence(_))) {
            if let Some(listener) = self.listener.as_mut() {
                listener.notes_changed(self.store.notes());
            }
        }
        result
    }
}

pub use crate::commands::export::ExportFormat;
pub use crate::commands::view::visible_sorted;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::MemBackend;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api_with_counter() -> (NotesApi<MemBackend>, Rc<RefCell<Vec<usize>>>) {
        let renders = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&renders);
        let api = NotesApi::new(MemBackend::new(), NotesConfig::default())
            .with_listener(move |notes: &[Note]| sink.borrow_mut().push(notes.len()));
        (api, renders)
    }

    #[test]
    fn dispatches_create_and_signals_render() {
        let (mut api, renders) = api_with_counter();
        let result = api.create_text("Buy milk").unwrap();

        assert_eq!(result.affected_notes.len(), 1);
        assert_eq!(api.notes()[0].category, "Work");
        assert_eq!(api.notes()[0].priority, "Medium");
        assert_eq!(*renders.borrow(), vec![1]);
    }

    #[test]
    fn rejected_calls_do_not_signal() {
        let (mut api, renders) = api_with_counter();
        assert!(api.create_text("   ").is_err());
        assert!(api.edit(0usize, "x").is_err());
        assert!(api.delete(NoteId::new()).is_err());
        assert!(renders.borrow().is_empty());
    }

    #[test]
    fn unsaved_mutations_still_signal() {
        let (mut api, renders) = api_with_counter();
        api.create_text("a").unwrap();
        api.store().backend().set_simulate_write_error(true);

        let err = api.toggle_pin(0usize).unwrap_err();

        assert!(matches!(err, NotesError::Persistence(_)));
        assert!(api.notes()[0].pinned);
        assert_eq!(*renders.borrow(), vec![1, 1]);
    }

    #[test]
    fn selectors_accept_positions_ids_and_display_notes() {
        let (mut api, _) = api_with_counter();
        api.create_text("a").unwrap();
        api.create_text("b").unwrap();

        let id = api.notes()[1].id;
        api.toggle_pin(id).unwrap();
        let shown = api.visible("");
        api.toggle_archive(&shown[0]).unwrap();

        assert!(api.notes()[1].archived);
        assert_eq!(api.position_of(id), Some(1));
    }

    #[test]
    fn uses_configured_storage_key() {
        let config = NotesConfig {
            storage_key: "stickies".into(),
            ..NotesConfig::default()
        };
        let mut api = NotesApi::new(MemBackend::new(), config);
        api.create_text("a").unwrap();
        assert!(api.store().backend().raw("stickies").is_some());
        assert!(api.store().backend().raw("notes").is_none());
    }
}
