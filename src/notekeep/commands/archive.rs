use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{display_at, persist, preview};

/// Flips the archived flag. Archived notes stay in the store and in exports but are left
/// out of display views.
pub fn toggle<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selector: NoteSelector,
) -> Result<CmdResult> {
    let position = store.resolve(selector)?;
    let note = store.note_mut(position);
    note.archived = !note.archived;
    let (id, archived) = (note.id, note.archived);
    persist(store)?;
    tracing::debug!(position, %id, archived, "toggled archive");

    let toggled = display_at(store, position);
    let verb = if archived { "archived" } else { "restored" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note {} (#{}): {}",
        verb,
        position,
        preview(&toggled.note.text)
    )));
    Ok(result.with_affected_notes(vec![toggled]))
}
