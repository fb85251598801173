//! # Note Repository
//!
//! Per-user note collections, one JSON array per user under
//! `user_<username>_notes`. The repository performs no validation and no
//! ordering: it persists whatever [`Note`] the caller hands it and returns
//! collections in stored order. Id assignment, timestamp duties and content
//! rules live in [`crate::editor`]; ordering lives in [`crate::query`].

use super::backend::KeyValueStore;
use crate::error::Result;
use crate::model::Note;
use tracing::warn;

fn notes_key(username: &str) -> String {
    format!("user_{}_notes", username)
}

pub struct NoteRepository<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> NoteRepository<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// All notes for `username`, in stored order.
    /// A user with no notes yet (or an unreadable collection) gets an empty
    /// list, never an error.
    pub fn list_notes(&self, username: &str) -> Vec<Note> {
        match self.load_notes(username) {
            Ok(notes) => notes,
            Err(e) => {
                warn!("Failed to load notes for '{}': {}", username, e);
                Vec::new()
            }
        }
    }

    /// Look up a single note by id.
    pub fn get_note(&self, username: &str, note_id: &str) -> Option<Note> {
        self.list_notes(username)
            .into_iter()
            .find(|n| n.id == note_id)
    }

    /// Create or update a note.
    ///
    /// A note whose id matches an existing one replaces it in place,
    /// keeping its position in the collection; any other id is appended.
    /// Returns `false` only on a persistence failure — the repository does
    /// not validate note content.
    pub fn save_note(&self, username: &str, note: &Note) -> bool {
        match self.try_save(username, note) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save note '{}' for '{}': {}", note.id, username, e);
                false
            }
        }
    }

    fn try_save(&self, username: &str, note: &Note) -> Result<()> {
        let mut notes = self.load_notes(username)?;
        if let Some(existing) = notes.iter_mut().find(|n| n.id == note.id) {
            *existing = note.clone();
        } else {
            notes.push(note.clone());
        }
        self.store_notes(username, &notes)
    }

    /// Remove the note with `note_id`.
    ///
    /// Deleting an id that does not exist is a no-op success: the
    /// collection is rewritten unchanged and `true` is returned. `false`
    /// only signals a persistence failure.
    pub fn delete_note(&self, username: &str, note_id: &str) -> bool {
        match self.try_delete(username, note_id) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to delete note '{}' for '{}': {}", note_id, username, e);
                false
            }
        }
    }

    fn try_delete(&self, username: &str, note_id: &str) -> Result<()> {
        let mut notes = self.load_notes(username)?;
        notes.retain(|n| n.id != note_id);
        self.store_notes(username, &notes)
    }

    fn load_notes(&self, username: &str) -> Result<Vec<Note>> {
        match self.kv.get(&notes_key(username))? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    fn store_notes(&self, username: &str, notes: &[Note]) -> Result<()> {
        self.kv
            .set(&notes_key(username), &serde_json::to_string(notes)?)
    }
}
