use super::backend::KeyValueStore;
use crate::error::{InkpadError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Filesystem-backed key/value store: one file per key under `root`.
///
/// Key names are encoded into filesystem-safe file names, and writes go
/// through a temp file + rename so a crash mid-write never leaves a
/// half-written value behind.
#[derive(Debug, Clone)]
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(encode_key(key))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(InkpadError::Io)?;
        }
        Ok(())
    }
}

/// Encode a store key as a file name.
///
/// Lowercase ASCII letters, digits, `-`, `_` and `.` pass through; every
/// other byte becomes `%XX`. Uppercase letters are encoded too, because keys
/// embed case-sensitive usernames and the store must keep `Alice` and
/// `alice` distinct on case-insensitive filesystems.
fn encode_key(key: &str) -> String {
    let mut name = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' => name.push(byte as char),
            _ => name.push_str(&format!("%{:02X}", byte)),
        }
    }
    name
}

impl KeyValueStore for FsBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let value = fs::read_to_string(path).map_err(InkpadError::Io)?;
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_root()?;

        let target = self.key_path(key);

        // Atomic write
        let tmp = self.root.join(format!(".kv-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(InkpadError::Io)?;
        fs::rename(&tmp, target).map_err(InkpadError::Io)?;

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(InkpadError::Io)?;
        }
        Ok(())
    }
}
