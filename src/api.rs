//! # API Facade
//!
//! [`Inkpad`] is a thin bundle wiring every store over one shared backend.
//! It holds no logic of its own: hosts construct it once at startup
//! ([`Inkpad::open`] for the filesystem backend, [`Inkpad::with_backend`]
//! for anything else) and reach the stores through accessors.
//!
//! ```no_run
//! use inkpad::api::Inkpad;
//! use inkpad::config::InkpadConfig;
//! use inkpad::editor::{self, NoteDraft};
//!
//! let config = InkpadConfig::load(None)?;
//! let mut app = Inkpad::open(&config);
//!
//! if app.session_mut().login("alice", "secret") {
//!     let user = app.session().current_user().unwrap();
//!     editor::save_draft(app.notes(), &user, &NoteDraft::new("Title", "Body"));
//! }
//! # Ok::<(), inkpad::error::InkpadError>(())
//! ```

use std::path::PathBuf;

use crate::assets::AssetStore;
use crate::auth::SessionManager;
use crate::config::InkpadConfig;
use crate::store::backend::KeyValueStore;
use crate::store::fs_backend::FsBackend;
use crate::store::note_store::NoteRepository;
use crate::store::pref_store::PreferenceStore;
use crate::store::user_store::CredentialStore;

pub struct Inkpad<S: KeyValueStore> {
    notes: NoteRepository<S>,
    preferences: PreferenceStore<S>,
    assets: AssetStore,
    session: SessionManager<S>,
}

impl Inkpad<FsBackend> {
    /// Open the app's stores under the configured data directory.
    pub fn open(config: &InkpadConfig) -> Self {
        Self::with_backend(FsBackend::new(config.store_dir()), config.asset_root())
    }
}

impl<S: KeyValueStore> Inkpad<S> {
    /// Wire the stores over an explicit backend (tests use `MemBackend`).
    pub fn with_backend(kv: S, asset_root: PathBuf) -> Self {
        Self {
            notes: NoteRepository::new(kv.clone()),
            preferences: PreferenceStore::new(kv.clone()),
            assets: AssetStore::new(asset_root),
            session: SessionManager::new(CredentialStore::new(kv)),
        }
    }

    pub fn notes(&self) -> &NoteRepository<S> {
        &self.notes
    }

    pub fn preferences(&self) -> &PreferenceStore<S> {
        &self.preferences
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn session(&self) -> &SessionManager<S> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionManager<S> {
        &mut self.session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{self, NoteDraft};
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_stores_share_one_backend() {
        let kv = MemBackend::new();
        let mut app = Inkpad::with_backend(kv.clone(), "/tmp/unused".into());

        app.session_mut().sign_up("alice", "secret").unwrap();

        // A second facade over the same backend sees the account.
        let reopened = Inkpad::with_backend(kv, "/tmp/unused".into());
        assert_eq!(
            reopened.session().current_user(),
            Some("alice".to_string())
        );
        assert!(reopened
            .session()
            .credentials()
            .verify_credentials("alice", "secret"));
    }

    #[test]
    fn test_facade_wires_notes_and_preferences() {
        let mut app = Inkpad::with_backend(MemBackend::new(), "/tmp/unused".into());
        app.session_mut().sign_up("alice", "secret").unwrap();
        let user = app.session().current_user().unwrap();

        editor::save_draft(app.notes(), &user, &NoteDraft::new("Title", "Body")).unwrap();
        assert_eq!(app.notes().list_notes(&user).len(), 1);

        let prefs = app.preferences().get_preferences(&user);
        assert_eq!(prefs, Default::default());
    }
}
