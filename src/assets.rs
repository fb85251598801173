//! # Image Asset Manager
//!
//! Notes reference images by path into a dedicated directory under the
//! app's private storage. [`AssetStore`] owns that directory: it copies
//! picked images in under generated unique names and removes them when a
//! note (or just its image) goes away.
//!
//! Asset cleanup is best-effort by contract: `delete_asset` never fails the
//! caller, and a missing file is a silent no-op. The ordering rules for
//! replacing a note's image (import the new copy before deleting the old
//! one) live in [`crate::editor`].

use crate::error::{InkpadError, Result};
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the asset directory if it does not exist yet and return its
    /// path. Safe to call repeatedly.
    pub fn ensure_directory(&self) -> Result<PathBuf> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InkpadError::Io)?;
        }
        Ok(self.root.clone())
    }

    /// Copy the file at `source` into the asset directory under a generated
    /// unique name, returning the destination path.
    ///
    /// Returns `None` on any failure (missing source, unwritable directory);
    /// the cause is logged, never raised.
    pub fn import_asset(&self, source: &Path) -> Option<PathBuf> {
        match self.try_import(source) {
            Ok(dest) => Some(dest),
            Err(e) => {
                warn!("Failed to import asset '{}': {}", source.display(), e);
                None
            }
        }
    }

    fn try_import(&self, source: &Path) -> Result<PathBuf> {
        let dir = self.ensure_directory()?;
        let dest = dir.join(asset_filename(source));
        fs::copy(source, &dest).map_err(InkpadError::Io)?;
        Ok(dest)
    }

    /// Remove the asset at `path`. Missing files are a no-op; failures are
    /// logged and swallowed — cleanup is best-effort.
    pub fn delete_asset(&self, path: &Path) {
        if !path.exists() {
            return;
        }
        if let Err(e) = fs::remove_file(path) {
            warn!("Failed to delete asset '{}': {}", path.display(), e);
        }
    }

    /// Whether a note's image reference still resolves to a file.
    pub fn asset_exists(&self, uri: Option<&str>) -> bool {
        uri.map(|u| Path::new(u).exists()).unwrap_or(false)
    }
}

/// Unique destination name: millisecond timestamp plus a short random
/// suffix, keeping the source extension (`.jpg` when it has none).
fn asset_filename(source: &Path) -> String {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("jpg");
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "note_{}_{}.{}",
        Utc::now().timestamp_millis(),
        &suffix[..8],
        ext
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn make_store() -> (TempDir, AssetStore) {
        let dir = TempDir::new().unwrap();
        let store = AssetStore::new(dir.path().join("notes_images"));
        (dir, store)
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let (_dir, store) = make_store();

        let first = store.ensure_directory().unwrap();
        let second = store.ensure_directory().unwrap();
        assert_eq!(first, second);
        assert!(first.is_dir());
    }

    #[test]
    fn test_import_copies_into_asset_directory() {
        let (dir, store) = make_store();
        let source = dir.path().join("picked.png");
        fs::write(&source, b"image bytes").unwrap();

        let dest = store.import_asset(&source).unwrap();
        assert!(dest.starts_with(store.root()));
        assert_eq!(dest.extension().unwrap(), "png");
        assert_eq!(fs::read(&dest).unwrap(), b"image bytes");

        // Source is copied, not moved.
        assert!(source.exists());
    }

    #[test]
    fn test_import_of_missing_source_is_none() {
        let (dir, store) = make_store();
        let gone = dir.path().join("never-existed.jpg");
        assert!(store.import_asset(&gone).is_none());
    }

    #[test]
    fn test_imports_get_distinct_names() {
        let (dir, store) = make_store();
        let source = dir.path().join("picked.jpg");
        fs::write(&source, b"img").unwrap();

        let first = store.import_asset(&source).unwrap();
        let second = store.import_asset(&source).unwrap();
        assert_ne!(first, second);
        assert!(first.exists());
        assert!(second.exists());
    }

    #[test]
    fn test_delete_asset_removes_file() {
        let (dir, store) = make_store();
        let source = dir.path().join("picked.jpg");
        fs::write(&source, b"img").unwrap();
        let dest = store.import_asset(&source).unwrap();

        store.delete_asset(&dest);
        assert!(!dest.exists());
    }

    #[test]
    fn test_delete_missing_asset_is_silent() {
        let (dir, store) = make_store();
        // Must not panic or log an error for a path that was never there.
        store.delete_asset(&dir.path().join("ghost.jpg"));
    }

    #[test]
    fn test_asset_exists() {
        let (dir, store) = make_store();
        let source = dir.path().join("picked.jpg");
        fs::write(&source, b"img").unwrap();
        let dest = store.import_asset(&source).unwrap();

        assert!(store.asset_exists(dest.to_str()));
        assert!(!store.asset_exists(Some("/no/such/file.jpg")));
        assert!(!store.asset_exists(None));
    }
}
