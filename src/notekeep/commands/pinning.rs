use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::NoteSelector;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{display_at, persist, preview};

/// Flips the pinned flag. Pinned notes sort ahead of the rest in display views.
pub fn toggle<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selector: NoteSelector,
) -> Result<CmdResult> {
    let position = store.resolve(selector)?;
    let note = store.note_mut(position);
    note.pinned = !note.pinned;
    let (id, pinned) = (note.id, note.pinned);
    persist(store)?;
    tracing::debug!(position, %id, pinned, "toggled pin");

    let toggled = display_at(store, position);
    let verb = if pinned { "pinned" } else { "unpinned" };
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note {} (#{}): {}",
        verb,
        position,
        preview(&toggled.note.text)
    )));
    Ok(result.with_affected_notes(vec![toggled]))
}
