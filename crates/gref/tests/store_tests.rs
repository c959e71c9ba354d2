//! Record store tests against a temporary data directory.

use std::fs;

use tempfile::TempDir;

use gref::error::StoreError;
use gref::models::{Article, Collection};
use gref::store::RecordStore;

fn store() -> (TempDir, RecordStore) {
    let dir = TempDir::new().unwrap();
    let store = RecordStore::new(dir.path());
    (dir, store)
}

fn article(id: &str) -> Article {
    Article { id: id.to_string(), title: format!("Title {id}"), ..Default::default() }
}

#[test]
fn test_create_persists_immediately() {
    let (dir, store) = store();

    let collection = store.create("covid").unwrap();
    assert!(collection.is_empty());
    assert!(dir.path().join("json/covid.json").is_file());
    assert_eq!(store.peek().unwrap(), vec!["covid".to_string()]);
}

#[test]
fn test_create_rejects_existing_name() {
    let (_dir, store) = store();
    store.create("covid").unwrap();

    let err = store.create("covid").unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists(ref name) if name == "covid"));
}

#[test]
fn test_save_then_load_keeps_order() {
    let (_dir, store) = store();
    let mut collection = store.create("demo").unwrap();
    collection.insert(article("b"));
    collection.insert(article("a"));
    store.save(&collection).unwrap();

    let loaded = store.load("demo").unwrap();
    let ids: Vec<&str> = loaded.articles().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(loaded.articles()[0].title, "Title b");
}

#[test]
fn test_load_missing_and_corrupt() {
    let (dir, store) = store();

    assert!(matches!(store.load("nope"), Err(StoreError::NotFound(_))));

    fs::create_dir_all(dir.path().join("json")).unwrap();
    fs::write(dir.path().join("json/broken.json"), "{ not json").unwrap();
    assert!(matches!(store.load("broken"), Err(StoreError::Corrupt { .. })));
}

#[test]
fn test_load_non_utf8_is_corrupt() {
    let (dir, store) = store();
    fs::create_dir_all(dir.path().join("json")).unwrap();
    fs::write(dir.path().join("json/latin.json"), [0xFF, 0xFE, 0x7B, 0x7D]).unwrap();

    assert!(matches!(store.load("latin"), Err(StoreError::Corrupt { .. })));
}

#[test]
fn test_load_drops_duplicate_ids() {
    let (dir, store) = store();
    fs::create_dir_all(dir.path().join("json")).unwrap();
    fs::write(
        dir.path().join("json/dups.json"),
        r#"{"name": "other", "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z",
            "articles": [{"id": "a"}, {"id": "a"}, {"id": "b"}]}"#,
    )
    .unwrap();

    let loaded = store.load("dups").unwrap();
    assert_eq!(loaded.name, "dups");
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_remove_deletes_exports() {
    let (dir, store) = store();
    store.create("demo").unwrap();
    store.write_export("demo", "csv", "id\n").unwrap();
    store.write_export("demo", "gv", "digraph {}\n").unwrap();
    store.write_export("other", "csv", "id\n").unwrap();

    let removed = store.remove("demo").unwrap();
    assert_eq!(removed.len(), 3);
    assert!(removed[0].ends_with("json/demo.json"));
    assert!(!dir.path().join("csv/demo.csv").exists());
    assert!(dir.path().join("csv/other.csv").exists());
    assert!(store.peek().unwrap().is_empty());
}

#[test]
fn test_remove_missing_is_not_found() {
    let (_dir, store) = store();
    assert!(matches!(store.remove("ghost"), Err(StoreError::NotFound(_))));
}

#[test]
fn test_invalid_names_never_touch_disk() {
    let (dir, store) = store();
    assert!(matches!(store.create("../escape"), Err(StoreError::InvalidName { .. })));
    assert!(matches!(store.create(".hidden"), Err(StoreError::InvalidName { .. })));
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn test_peek_sorts_and_ignores_other_files() {
    let (dir, store) = store();
    for name in ["zeta", "alpha", "mid"] {
        store.save(&Collection::new(name)).unwrap();
    }
    fs::write(dir.path().join("json/notes.md"), "scratch").unwrap();

    assert_eq!(store.peek().unwrap(), vec!["alpha", "mid", "zeta"]);
}
