use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotesError, Result};
use crate::index::NoteSelector;
use crate::store::{NoteStore, StorageBackend};

use super::helpers::{display_at, persist, preview};

/// Replaces a note's text and bumps its timestamp. Nothing else changes.
pub fn run<B: StorageBackend>(
    store: &mut NoteStore<B>,
    selector: NoteSelector,
    new_text: &str,
) -> Result<CmdResult> {
    let position = store.resolve(selector)?;
    let text = new_text.trim();
    if text.is_empty() {
        return Err(NotesError::Validation("Note text cannot be empty".into()));
    }

    let note = store.note_mut(position);
    note.text = text.to_string();
    note.touch();
    let id = note.id;
    persist(store)?;
    tracing::debug!(position, %id, "edited note");

    let edited = display_at(store, position);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note updated (#{}): {}",
        position,
        preview(&edited.note.text)
    )));
    Ok(result.with_affected_notes(vec![edited]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::note_store::fixtures::StoreFixture;

    #[test]
    fn updates_text_and_timestamp_only() {
        let mut store = StoreFixture::new().with_notes(2).store;
        store.note_mut(1).timestamp = 1;
        let before = store.notes()[1].clone();

        run(&mut store, NoteSelector::Position(1), "  Call bank  ").unwrap();

        let after = &store.notes()[1];
        assert_eq!(after.text, "Call bank");
        assert!(after.timestamp >= before.timestamp);
        assert!(after.timestamp > 1);
        assert_eq!(after.id, before.id);
        assert_eq!(after.category, before.category);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.color, before.color);
        assert_eq!(after.pinned, before.pinned);
        assert_eq!(after.archived, before.archived);
        assert_eq!(store.notes()[0].text, "Note 1");
    }

    #[test]
    fn out_of_bounds_leaves_collection_unchanged() {
        let mut store = StoreFixture::new().with_notes(3).store;
        let before = store.notes().to_vec();

        let err = run(&mut store, NoteSelector::Position(5), "x").unwrap_err();

        assert!(matches!(
            err,
            NotesError::IndexOutOfBounds { index: 5, len: 3 }
        ));
        assert_eq!(store.notes(), before.as_slice());
        assert_eq!(store.backend().write_count(), 0);
    }

    #[test]
    fn blank_text_is_rejected() {
        let mut store = StoreFixture::new().with_note("keep me").store;
        let err = run(&mut store, NoteSelector::Position(0), "   ").unwrap_err();
        assert!(matches!(err, NotesError::Validation(_)));
        assert_eq!(store.notes()[0].text, "keep me");
    }

    #[test]
    fn edits_by_id() {
        let mut store = StoreFixture::new().with_notes(3).store;
        let id = store.notes()[2].id;
        run(&mut store, NoteSelector::Id(id), "by id").unwrap();
        assert_eq!(store.notes()[2].text, "by id");
    }
}
