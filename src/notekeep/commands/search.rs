use crate::index::{index_notes, DisplayNote};
use crate::store::{NoteStore, StorageBackend};

/// Notes whose text contains `term`, ignoring case, in storage order.
///
/// An empty term matches every note, archived ones included. Filtering for display is
/// left to [`visible_sorted`](super::view::visible_sorted).
pub fn run<B: StorageBackend>(store: &NoteStore<B>, term: &str) -> Vec<DisplayNote> {
    let term_lower = term.to_lowercase();
    index_notes(store.notes())
        .into_iter()
        .filter(|dn| dn.note.text.to_lowercase().contains(&term_lower))
        .collect()
}
