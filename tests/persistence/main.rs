//! Integration tests for persisting the collection through key-value stores.

#![cfg(feature = "fs")]

mod stores;

use bookshelf_rust::{
    Book, BookCollection, BookStatus, FileKeyValueStore, InMemoryKeyValueStore, JsonSlot,
    KeyValueStore, Shelf, ShelfConfig, DEFAULT_STORAGE_KEY,
};
use stores::FlakyStore;

#[test]
fn snapshot_round_trips_in_order() {
    let store = InMemoryKeyValueStore::new();
    let mut books = BookCollection::open(store.clone(), DEFAULT_STORAGE_KEY);
    books.add("Zeta", "Z", BookStatus::Wishlist);
    books.add("Alpha", "A", BookStatus::Owned);
    books.add("Mu", "M", BookStatus::Reading);

    let raw = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let decoded: Vec<Book> = serde_json::from_str(&raw).unwrap();
    assert_eq!(decoded, books.books());

    let reopened = BookCollection::open(store, DEFAULT_STORAGE_KEY);
    assert_eq!(reopened.books(), books.books());
}

#[test]
fn persisted_layout_matches_wire_format() {
    let store = InMemoryKeyValueStore::new();
    let mut books = BookCollection::open(store.clone(), DEFAULT_STORAGE_KEY);
    let book = books.add("Dune", "Frank Herbert", BookStatus::Reading);

    let raw = store.get("personalBookList").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "id": book.id.as_str(),
            "title": "Dune",
            "author": "Frank Herbert",
            "status": "baca"
        }])
    );
}

#[test]
fn loads_snapshot_written_elsewhere() {
    let store = InMemoryKeyValueStore::new();
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r#"[{"id":"lq3k2x9abc","title":"Laskar Pelangi","author":"Andrea Hirata","status":"beli"}]"#
                .into(),
        )
        .unwrap();

    let books = BookCollection::open(store, DEFAULT_STORAGE_KEY);
    assert_eq!(
        books.books(),
        &[Book::new(
            "lq3k2x9abc",
            "Laskar Pelangi",
            "Andrea Hirata",
            BookStatus::Wishlist
        )]
    );
}

#[test]
fn corrupt_snapshot_falls_back_to_empty_and_recovers() {
    let store = InMemoryKeyValueStore::new();
    store
        .set(DEFAULT_STORAGE_KEY, r#"[{"id":"1","status":"lost"}]"#.into())
        .unwrap();

    let mut books = BookCollection::open(store.clone(), DEFAULT_STORAGE_KEY);
    assert!(books.is_empty());

    books.add("Fresh start", "Someone", BookStatus::Owned);
    let reopened = BookCollection::open(store, DEFAULT_STORAGE_KEY);
    assert_eq!(reopened.len(), 1);
}

#[test]
fn write_failure_keeps_session_state() {
    let store = FlakyStore::new();
    let mut books = BookCollection::open(store.clone(), DEFAULT_STORAGE_KEY);
    let kept = books.add("Persisted", "A", BookStatus::Owned);

    store.fail_writes(true);
    let lost = books.add("Memory only", "B", BookStatus::Reading);
    assert_eq!(books.books(), &[kept.clone(), lost]);

    let reopened = BookCollection::open(store.clone(), DEFAULT_STORAGE_KEY);
    assert_eq!(reopened.books(), &[kept.clone()]);

    // The next successful write carries the whole in-memory list.
    store.fail_writes(false);
    books.delete(&kept.id);
    let reopened = BookCollection::open(store, DEFAULT_STORAGE_KEY);
    assert_eq!(reopened.books(), books.books());
}

#[test]
fn separate_keys_are_separate_collections() {
    let store = InMemoryKeyValueStore::new();
    let mut mine = BookCollection::open(store.clone(), "mine");
    let mut theirs = BookCollection::open(store.clone(), "theirs");
    mine.add("A", "X", BookStatus::Owned);
    theirs.add("B", "Y", BookStatus::Owned);
    theirs.add("C", "Z", BookStatus::Owned);

    assert_eq!(BookCollection::open(store.clone(), "mine").len(), 1);
    assert_eq!(BookCollection::open(store, "theirs").len(), 2);
}

#[test]
fn shelf_survives_restart_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let config = ShelfConfig::from_toml_str(&format!(
        "storage_key = \"books\"\ndata_dir = {:?}\n",
        dir.path().join("shelf").display().to_string()
    ))
    .unwrap();

    let dune = {
        let mut shelf = Shelf::open(config.open_file_store().unwrap(), &config);
        shelf.add("Bumi Manusia", "Pramoedya Ananta Toer", BookStatus::Owned);
        shelf.add("Dune", "Frank Herbert", BookStatus::Reading)
    };

    let shelf = Shelf::open(config.open_file_store().unwrap(), &config);
    assert_eq!(shelf.books().len(), 2);
    assert_eq!(shelf.books()[1], dune);
    assert_eq!(shelf.statistics().reading, 1);
    assert!(dir.path().join("shelf").join("books.json").exists());
}

#[test]
fn json_slot_on_file_store_tolerates_garbage() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("personalBookList.json"), "not json at all").unwrap();

    let slot = JsonSlot::new(FileKeyValueStore::open(dir.path()).unwrap());
    let books: Vec<Book> = slot.load(DEFAULT_STORAGE_KEY, Vec::new());
    assert!(books.is_empty());
}
