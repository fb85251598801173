//! Search and ordering, applied by the presentation layer after
//! [`crate::store::note_store::NoteRepository::list_notes`]. The repository
//! itself stays unordered; these helpers are pure functions over the
//! returned collection.

use crate::model::{Note, SortOption};

/// Notes whose title or body contains `query`, case-insensitively.
/// A blank query matches everything.
pub fn filter_notes(notes: &[Note], query: &str) -> Vec<Note> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return notes.to_vec();
    }
    notes
        .iter()
        .filter(|n| {
            n.title.to_lowercase().contains(&query) || n.body.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

/// Order notes in place. Newest/oldest go by `updated_at`; the title
/// orders compare case-insensitively. The sort is stable, so equal keys
/// keep their stored order.
pub fn sort_notes(notes: &mut [Note], option: SortOption) {
    match option {
        SortOption::Newest => notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortOption::Oldest => notes.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        SortOption::TitleAsc => {
            notes.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortOption::TitleDesc => {
            notes.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
    }
}
