use inkpad::store::backend::KeyValueStore;
use inkpad::store::fs_backend::FsBackend;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FsBackend) {
    let dir = TempDir::new().unwrap();
    let backend = FsBackend::new(dir.path().join("store"));
    (dir, backend)
}

#[test]
fn test_fs_backend_basic_io() {
    let (_dir, backend) = setup();

    // 1. Write
    backend.set("users", "[]").unwrap();

    // 2. Read
    assert_eq!(backend.get("users").unwrap(), Some("[]".to_string()));

    // 3. Remove
    backend.remove("users").unwrap();
    assert_eq!(backend.get("users").unwrap(), None);
}

#[test]
fn test_fs_backend_absent_key_is_none() {
    let (_dir, backend) = setup();
    assert_eq!(backend.get("never_written").unwrap(), None);
}

#[test]
fn test_fs_backend_remove_missing_key_is_noop() {
    let (_dir, backend) = setup();
    backend.remove("never_written").unwrap();
}

#[test]
fn test_fs_backend_overwrite() {
    let (_dir, backend) = setup();

    backend.set("current_user", "alice").unwrap();
    backend.set("current_user", "bob").unwrap();
    assert_eq!(
        backend.get("current_user").unwrap(),
        Some("bob".to_string())
    );
}

#[test]
fn test_fs_backend_atomic_write_artifacts() {
    let (dir, backend) = setup();

    backend.set("users", "[{\"username\":\"alice\"}]").unwrap();

    let store_dir = dir.path().join("store");
    let on_disk = fs::read_to_string(store_dir.join("users")).unwrap();
    assert_eq!(on_disk, "[{\"username\":\"alice\"}]");

    // No .tmp files left behind.
    for entry in fs::read_dir(&store_dir).unwrap() {
        let path = entry.unwrap().path();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
    }
}

#[test]
fn test_fs_backend_encodes_awkward_keys() {
    let (dir, backend) = setup();

    // Usernames end up inside keys; they can carry anything.
    backend.set("user_a/b:c_notes", "[]").unwrap();
    assert_eq!(
        backend.get("user_a/b:c_notes").unwrap(),
        Some("[]".to_string())
    );

    // The file landed inside the store dir, not in some subdirectory.
    let entries: Vec<_> = fs::read_dir(dir.path().join("store"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(!entries[0].contains('/'));
}

#[test]
fn test_fs_backend_values_survive_reopen() {
    let (dir, backend) = setup();
    backend.set("users", "[1,2,3]").unwrap();

    let reopened = FsBackend::new(dir.path().join("store"));
    assert_eq!(reopened.get("users").unwrap(), Some("[1,2,3]".to_string()));
}

#[test]
fn test_fs_backend_clones_share_directory() {
    let (_dir, backend) = setup();
    let view = backend.clone();

    backend.set("k", "v").unwrap();
    assert_eq!(view.get("k").unwrap(), Some("v".to_string()));
}
