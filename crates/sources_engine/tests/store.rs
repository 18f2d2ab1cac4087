use std::fs;

use sources_engine::{ensure_store_dir, DirectoryStore, MemoryStore, SourceStore};
use tempfile::TempDir;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryStore::new();
    assert_eq!(store.get("k").unwrap(), None);

    store.set("k", "[1]").unwrap();
    store.set("k", "[2]").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("[2]"));
}

#[test]
fn directory_store_creates_missing_dir_and_overwrites() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("sources");
    let store = DirectoryStore::new(&dir);

    assert_eq!(store.get("suna_sources_data_t1").unwrap(), None);
    store.set("suna_sources_data_t1", "first").unwrap();
    store.set("suna_sources_data_t1", "second").unwrap();

    assert!(dir.is_dir());
    assert_eq!(
        store.get("suna_sources_data_t1").unwrap().as_deref(),
        Some("second")
    );
    let path = store.path_for("suna_sources_data_t1");
    assert_eq!(fs::read_to_string(path).unwrap(), "second");
}

#[test]
fn keys_are_kept_apart() {
    let temp = TempDir::new().unwrap();
    let store = DirectoryStore::new(temp.path());

    store.set("suna_sources_data", "global").unwrap();
    store.set("suna_sources_data_t1", "thread").unwrap();

    assert_eq!(store.get("suna_sources_data").unwrap().as_deref(), Some("global"));
    assert_eq!(
        store.get("suna_sources_data_t1").unwrap().as_deref(),
        Some("thread")
    );
}

#[test]
fn file_in_place_of_directory_is_an_error() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    assert!(ensure_store_dir(&file_path).is_err());
    let store = DirectoryStore::new(&file_path);
    assert!(store.set("key", "data").is_err());
}
