use crate::error::Result;
use crate::index::DisplayNote;
use crate::store::{NoteStore, StorageBackend};

const PREVIEW_CHARS: usize = 40;

/// Saves the collection, logging when the backend refuses the write.
pub fn persist<B: StorageBackend>(store: &NoteStore<B>) -> Result<()> {
    store.save().map_err(|e| {
        tracing::warn!(key = store.key(), error = %e, "failed to persist notes");
        e.into()
    })
}

/// The note at `position` as a display entry. `position` must be in range.
pub fn display_at<B: StorageBackend>(store: &NoteStore<B>, position: usize) -> DisplayNote {
    DisplayNote {
        position,
        note: store.notes()[position].clone(),
    }
}

/// First line of the text, cut to a short single-line preview for messages.
pub fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or_default();
    let mut preview: String = first_line.chars().take(PREVIEW_CHARS).collect();
    if first_line.chars().count() > PREVIEW_CHARS || text.lines().nth(1).is_some() {
        preview.push('…');
    }
    preview
}
