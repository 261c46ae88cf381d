use bookshelf_core::{
    Book, CatalogError, CatalogRepository, CatalogStore, JsonFileCatalogRepository, LoadOutcome,
    RepoError,
};
use std::fs;

fn sample_books() -> Vec<Book> {
    vec![
        Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", false).unwrap(),
        Book::new("Emma", "Jane Austen", 1815, "Classic", true).unwrap(),
        Book::new("Dune", "Frank Herbert", 1965, "Sci-Fi", true).unwrap(),
    ]
}

#[test]
fn persist_then_load_round_trips_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let repo = JsonFileCatalogRepository::new(dir.path().join("library.json"));
    let books = sample_books();

    repo.persist_books(&books).unwrap();
    let loaded = repo.load_books().unwrap();

    assert_eq!(loaded.books, books);
    assert_eq!(loaded.outcome, LoadOutcome::Loaded(3));
}

#[test]
fn reopening_store_sees_previous_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    {
        let mut store = CatalogStore::open(&path).unwrap();
        store.add("Dune", "Herbert", 1965, "Sci-Fi", false).unwrap();
        store.add("Emma", "Austen", 1815, "Classic", true).unwrap();
        store.remove("emma").unwrap();
    }

    let reopened = CatalogStore::open(&path).unwrap();
    assert_eq!(reopened.load_outcome(), &LoadOutcome::Loaded(1));
    assert_eq!(reopened.books()[0].title, "Dune");
}

#[test]
fn missing_file_loads_empty_and_is_not_created() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    let store = CatalogStore::open(&path).unwrap();

    assert!(store.is_empty());
    assert_eq!(store.load_outcome(), &LoadOutcome::Missing);
    assert!(!path.exists());
}

#[test]
fn truncated_file_loads_empty_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(&path, "[{\"title\": \"Dune\", \"author\": \"Her").unwrap();

    let store = CatalogStore::open(&path).unwrap();

    assert!(store.is_empty());
    assert!(matches!(store.load_outcome(), LoadOutcome::Corrupt(_)));
}

#[test]
fn record_with_missing_or_unknown_field_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    fs::write(
        &path,
        r#"[{"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi"}]"#,
    )
    .unwrap();
    let missing_field = CatalogStore::open(&path).unwrap();
    assert!(matches!(missing_field.load_outcome(), LoadOutcome::Corrupt(_)));

    fs::write(
        &path,
        r#"[{"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read": true, "isbn": "x"}]"#,
    )
    .unwrap();
    let unknown_field = CatalogStore::open(&path).unwrap();
    assert!(matches!(unknown_field.load_outcome(), LoadOutcome::Corrupt(_)));
}

#[test]
fn mixed_valid_and_invalid_records_empty_the_whole_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(
        &path,
        r#"[
            {"title": "Dune", "author": "Herbert", "year": 1965, "genre": "Sci-Fi", "read": true},
            {"title": "Emma", "author": "Austen", "year": "1815", "genre": "Classic", "read": false}
        ]"#,
    )
    .unwrap();

    let store = CatalogStore::open(&path).unwrap();
    assert!(store.is_empty());
}

#[test]
fn corrupt_file_is_overwritten_by_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    fs::write(&path, "not json").unwrap();

    let mut store = CatalogStore::open(&path).unwrap();
    store.add("Dune", "Herbert", 1965, "Sci-Fi", false).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn persisted_file_uses_expected_keys_and_types() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");
    let mut store = CatalogStore::open(&path).unwrap();
    store.add("Dune", "Herbert", "1965", "Sci-Fi", true).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("[\n    {\n        \"title\""));

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let record = value[0].as_object().unwrap();
    let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["author", "genre", "read", "title", "year"]);
    assert_eq!(record["year"], 1965);
    assert_eq!(record["read"], true);
}

#[test]
fn unreadable_path_propagates_error() {
    let dir = tempfile::tempdir().unwrap();
    // A directory cannot be read as a file.
    let err = CatalogStore::open(dir.path()).err().unwrap();
    assert!(matches!(err, CatalogError::Repo(RepoError::Io { .. })));
}

#[test]
fn write_failure_propagates_and_keeps_memory_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("library.json");
    let mut store = CatalogStore::open(&path).unwrap();

    let err = store
        .add("Dune", "Herbert", 1965, "Sci-Fi", false)
        .unwrap_err();

    assert!(matches!(err, CatalogError::Repo(RepoError::Io { .. })));
    assert_eq!(store.len(), 1);
    assert!(!path.exists());
}
