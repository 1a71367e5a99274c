use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("census_tissue_hist_state_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_memory_store_get_set_remove() {
    let mut store = MemoryStore::new();
    assert_eq!(store.get("species"), None);
    store.set("species", json!("mus_musculus")).unwrap();
    assert_eq!(store.get("species"), Some(json!("mus_musculus")));
    store.remove("species").unwrap();
    assert_eq!(store.get("species"), None);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = make_temp_dir();
    let path = dir.join("state.json");
    {
        let mut store = FileStore::open(&path).unwrap();
        store.set("census", json!("2024-07-01")).unwrap();
        store.set("isPrimary", serde_json::Value::Null).unwrap();
    }
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("census"), Some(json!("2024-07-01")));
    assert_eq!(store.get("isPrimary"), Some(serde_json::Value::Null));
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn test_file_store_creates_parent_dirs() {
    let dir = make_temp_dir();
    let path = dir.join("nested").join("state.json");
    let mut store = FileStore::open(&path).unwrap();
    store.set("species", json!("homo_sapiens")).unwrap();
    assert!(path.exists());
}

#[test]
fn test_file_store_rejects_non_object() {
    let dir = make_temp_dir();
    let path = dir.join("state.json");
    fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(FileStore::open(&path), Err(StateError::Json(_))));
}

#[test]
fn test_file_store_blank_file_is_empty() {
    let dir = make_temp_dir();
    let path = dir.join("state.json");
    fs::write(&path, "\n").unwrap();
    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("species"), None);
}
