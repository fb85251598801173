//! Per-user preference records under `user_preferences_<username>`.
//! Absent, unreadable, or never-written preferences read back as the
//! default (`newest`), never as an error.

use super::backend::KeyValueStore;
use crate::error::Result;
use crate::model::UserPreferences;
use tracing::warn;

fn preferences_key(username: &str) -> String {
    format!("user_preferences_{}", username)
}

pub struct PreferenceStore<S: KeyValueStore> {
    kv: S,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Stored preferences for `username`, or the default when none exist.
    pub fn get_preferences(&self, username: &str) -> UserPreferences {
        match self.load(username) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!("Failed to load preferences for '{}': {}", username, e);
                UserPreferences::default()
            }
        }
    }

    /// Overwrite the preference record for `username`.
    pub fn set_preferences(&self, username: &str, prefs: &UserPreferences) {
        if let Err(e) = self.store(username, prefs) {
            warn!("Failed to save preferences for '{}': {}", username, e);
        }
    }

    fn load(&self, username: &str) -> Result<UserPreferences> {
        match self.kv.get(&preferences_key(username))? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(UserPreferences::default()),
        }
    }

    fn store(&self, username: &str, prefs: &UserPreferences) -> Result<()> {
        self.kv
            .set(&preferences_key(username), &serde_json::to_string(prefs)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SortOption;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn test_default_before_any_write() {
        let store = PreferenceStore::new(MemBackend::new());
        let prefs = store.get_preferences("newuser");
        assert_eq!(prefs.sort_option, SortOption::Newest);
    }

    #[test]
    fn test_set_then_get_roundtrip() {
        let store = PreferenceStore::new(MemBackend::new());
        store.set_preferences(
            "alice",
            &UserPreferences {
                sort_option: SortOption::TitleAsc,
            },
        );

        assert_eq!(
            store.get_preferences("alice").sort_option,
            SortOption::TitleAsc
        );
        // Other users are unaffected.
        assert_eq!(store.get_preferences("bob").sort_option, SortOption::Newest);
    }

    #[test]
    fn test_set_overwrites_previous_value() {
        let store = PreferenceStore::new(MemBackend::new());
        store.set_preferences(
            "alice",
            &UserPreferences {
                sort_option: SortOption::Oldest,
            },
        );
        store.set_preferences(
            "alice",
            &UserPreferences {
                sort_option: SortOption::TitleDesc,
            },
        );

        assert_eq!(
            store.get_preferences("alice").sort_option,
            SortOption::TitleDesc
        );
    }

    #[test]
    fn test_corrupt_record_reads_as_default() {
        let kv = MemBackend::new();
        kv.set("user_preferences_alice", "nonsense").unwrap();

        let store = PreferenceStore::new(kv);
        assert_eq!(
            store.get_preferences("alice").sort_option,
            SortOption::Newest
        );
    }
}
