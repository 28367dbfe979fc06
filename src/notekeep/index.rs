//! # Selecting Notes
//!
//! The collection has one authoritative order, **storage order**: the order notes were
//! created in, shifted down when an earlier note is deleted. Everything a front-end shows is
//! a derived view of it, filtered by search, pinned notes first, archived notes hidden.
//!
//! Reusing a row's display position as a storage position is the classic bug here: as soon
//! as one note is pinned or archived the two orders diverge and the wrong note gets edited.
//! So views are made of [`DisplayNote`]s, which remember where each note lives in storage,
//! and mutations take a [`NoteSelector`]:
//!
//! - `Position(n)`: the n-th note in storage order (zero based). Valid until the next
//!   delete.
//! - `Id(id)`: the note's session id. Valid for as long as the note exists.

use crate::model::{Note, NoteId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteSelector {
    Position(usize),
    Id(NoteId),
}

impl From<usize> for NoteSelector {
    fn from(position: usize) -> Self {
        NoteSelector::Position(position)
    }
}

impl From<NoteId> for NoteSelector {
    fn from(id: NoteId) -> Self {
        NoteSelector::Id(id)
    }
}

impl From<&DisplayNote> for NoteSelector {
    fn from(dn: &DisplayNote) -> Self {
        NoteSelector::Id(dn.note.id)
    }
}

impl std::fmt::Display for NoteSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoteSelector::Position(p) => write!(f, "#{}", p),
            NoteSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// A note as handed to a display, tagged with its storage position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayNote {
    pub position: usize,
    pub note: Note,
}

impl AsRef<Note> for DisplayNote {
    fn as_ref(&self) -> &Note {
        &self.note
    }
}

/// Tags every note with its storage position, in storage order.
pub fn index_notes(notes: &[Note]) -> Vec<DisplayNote> {
    notes
        .iter()
        .enumerate()
        .map(|(position, note)| DisplayNote {
            position,
            note: note.clone(),
        })
        .collect()
}
