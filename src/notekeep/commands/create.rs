use crate::commands::{CmdMessage, CmdResult};
use crate::config::NotesConfig;
use crate::error::{NotesError, Result};
use crate::model::{Note, NoteDraft};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{display_at, persist, preview};

pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    config: &NotesConfig,
    draft: NoteDraft,
) -> Result<CmdResult> {
    let text = draft.text.trim();
    if text.is_empty() {
        return Err(NotesError::Validation("Note text cannot be empty".into()));
    }
    config.check_choices(&draft)?;

    let note = Note::new(text.to_string(), draft.category, draft.priority, draft.color);
    let id = note.id;
    let position = store.push(note);
    persist(store)?;
    tracing::debug!(position, %id, "created note");

    let created = display_at(store, position);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note created (#{}): {}",
        position,
        preview(&created.note.text)
    )));
    Ok(result.with_affected_notes(vec![created]))
}
