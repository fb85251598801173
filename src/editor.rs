//! # Note Editing Workflow
//!
//! The repository stores whatever it is handed; the rules of the editing
//! screen live here:
//!
//! - a draft whose title and body are both blank is rejected;
//! - new notes get a fresh unique id, re-saves keep their id and their
//!   original `created_at`;
//! - `updated_at` is stamped on every save;
//! - when a note's image is replaced, the new asset is imported *first*
//!   and the old one deleted only after the import succeeded, so a failed
//!   replace never orphans a still-referenced image;
//! - deleting a note also deletes its image.

use crate::assets::AssetStore;
use crate::model::{now_millis, Note};
use crate::store::backend::KeyValueStore;
use crate::store::note_store::NoteRepository;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// The in-progress state of the note editor. `id` is `None` for a new
/// note and the existing id when editing.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub id: Option<String>,
    pub title: String,
    pub body: String,
    pub image_uri: Option<String>,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            image_uri: None,
        }
    }

    /// Start editing an existing note.
    pub fn for_note(note: &Note) -> Self {
        Self {
            id: Some(note.id.clone()),
            title: note.title.clone(),
            body: note.body.clone(),
            image_uri: note.image_uri.clone(),
        }
    }

    pub fn with_image(mut self, uri: impl Into<String>) -> Self {
        self.image_uri = Some(uri.into());
        self
    }

    /// A draft with nothing but whitespace in both fields cannot be saved.
    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty() && self.body.trim().is_empty()
    }
}

/// Persist a draft for `username`.
///
/// Returns the saved [`Note`], or `None` when the draft is empty
/// (validation) or the repository could not persist it (I/O). Title and
/// body are trimmed; `created_at` of an existing note is preserved, falling
/// back to now if the note has meanwhile disappeared.
pub fn save_draft<S: KeyValueStore>(
    repo: &NoteRepository<S>,
    username: &str,
    draft: &NoteDraft,
) -> Option<Note> {
    if draft.is_empty() {
        return None;
    }

    let now = now_millis();
    let (id, created_at) = match &draft.id {
        Some(id) => (
            id.clone(),
            repo.get_note(username, id)
                .map(|n| n.created_at)
                .unwrap_or(now),
        ),
        None => (Uuid::new_v4().to_string(), now),
    };

    let note = Note {
        id,
        title: draft.title.trim().to_string(),
        body: draft.body.trim().to_string(),
        image_uri: draft.image_uri.clone(),
        created_at,
        updated_at: now,
    };

    if repo.save_note(username, &note) {
        Some(note)
    } else {
        None
    }
}

/// Swap a note's image for a newly picked one.
///
/// The replacement is imported into durable storage first; only once that
/// succeeded is the previous asset deleted. If the import fails the old
/// asset is left untouched and `None` is returned, so the note keeps a
/// valid image reference.
pub fn replace_image(
    assets: &AssetStore,
    old: Option<&Path>,
    source: &Path,
) -> Option<PathBuf> {
    let imported = assets.import_asset(source)?;
    if let Some(old_path) = old {
        if old_path != imported {
            assets.delete_asset(old_path);
        }
    }
    Some(imported)
}

/// Delete a note and its image asset, if it has one.
///
/// Returns the repository's verdict; asset cleanup is best-effort and does
/// not affect the result.
pub fn delete_note<S: KeyValueStore>(
    repo: &NoteRepository<S>,
    assets: &AssetStore,
    username: &str,
    note_id: &str,
) -> bool {
    if let Some(note) = repo.get_note(username, note_id) {
        if let Some(uri) = &note.image_uri {
            assets.delete_asset(Path::new(uri));
        }
    }
    repo.delete_note(username, note_id)
}
