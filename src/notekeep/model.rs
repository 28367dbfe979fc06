use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Session identity of a note.
///
/// Assigned when a note enters a store (created or loaded) and never written to the
/// backend, so the persisted shape stays exactly the seven note fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Note {
    #[serde(skip)]
    pub id: NoteId,
    pub text: String,
    pub category: String,
    pub priority: String,
    pub color: String,
    /// Epoch milliseconds of creation or of the latest text edit.
    pub timestamp: i64,
    pub pinned: bool,
    pub archived: bool,
}

impl Note {
    pub fn new(text: String, category: String, priority: String, color: String) -> Self {
        Self {
            id: NoteId::new(),
            text,
            category,
            priority,
            color,
            timestamp: now_millis(),
            pinned: false,
            archived: false,
        }
    }

    /// Bumps the timestamp to now without ever moving it backwards.
    pub fn touch(&mut self) {
        self.timestamp = now_millis().max(self.timestamp);
    }

    /// Compares the persisted fields only, ignoring session ids.
    pub fn same_content(&self, other: &Note) -> bool {
        self.text == other.text
            && self.category == other.category
            && self.priority == other.priority
            && self.color == other.color
            && self.timestamp == other.timestamp
            && self.pinned == other.pinned
            && self.archived == other.archived
    }
}

impl AsRef<Note> for Note {
    fn as_ref(&self) -> &Note {
        self
    }
}

/// User input for a new note, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub text: String,
    pub category: String,
    pub priority: String,
    pub color: String,
}

impl NoteDraft {
    pub fn new(
        text: impl Into<String>,
        category: impl Into<String>,
        priority: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            category: category.into(),
            priority: priority.into(),
            color: color.into(),
        }
    }
}

pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
