use crate::model::Note;

/// Orders notes for display: pinned first, archived dropped.
///
/// The sort is stable, so within the pinned and unpinned groups the input order is kept.
/// Works on anything that exposes a [`Note`]: owned notes, references, or
/// [`DisplayNote`](crate::index::DisplayNote)s from a search.
pub fn visible_sorted<T, I>(notes: I) -> Vec<T>
where
    T: AsRef<Note>,
    I: IntoIterator<Item = T>,
{
    let mut visible: Vec<T> = notes
        .into_iter()
        .filter(|n| !n.as_ref().archived)
        .collect();
    visible.sort_by_key(|n| !n.as_ref().pinned);
    visible
}
