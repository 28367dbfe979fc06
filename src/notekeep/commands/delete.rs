use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{DisplayNote, NoteSelector};
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{persist, preview};

/// Removes a note for good. Every later note moves up one position.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selector: NoteSelector,
) -> Result<CmdResult> {
    let position = store.resolve(selector)?;
    let note = store.remove(position);
    persist(store)?;
    tracing::debug!(position, id = %note.id, "deleted note");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note deleted (#{}): {}",
        position,
        preview(&note.text)
    )));
    Ok(result.with_affected_notes(vec![DisplayNote { position, note }]))
}
