use super::backend::KeyValueStore;
use crate::error::{InkpadError, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory key/value store for testing.
///
/// State lives behind an `Arc`, so clones share the same data — mirroring
/// how `FsBackend` clones share one directory. The `fail_writes` switch lets
/// tests exercise the I/O-failure conversion paths of the domain stores.
#[derive(Clone, Default)]
pub struct MemBackend {
    entries: Arc<Mutex<HashMap<String, String>>>,
    fail_writes: Arc<AtomicBool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent `set`/`remove` calls fail, for error-path testing.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(InkpadError::Store("simulated write error".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStore for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.check_writable()?;
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_key_is_none() {
        let kv = MemBackend::new();
        assert_eq!(kv.get("missing").unwrap(), None);
    }

    #[test]
    fn test_clones_share_state() {
        let kv = MemBackend::new();
        let view = kv.clone();

        kv.set("k", "v").unwrap();
        assert_eq!(view.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_fail_writes_leaves_reads_working() {
        let kv = MemBackend::new();
        kv.set("k", "v").unwrap();

        kv.set_fail_writes(true);
        assert!(kv.set("k", "other").is_err());
        assert!(kv.remove("k").is_err());
        assert_eq!(kv.get("k").unwrap(), Some("v".to_string()));
    }
}
