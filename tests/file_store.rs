use querydeck::api::{Query, QueryDeckApi};
use querydeck::config::{KEY_CUSTOM_QUERIES, KEY_DEFAULT_SEARCH_PROVIDER};
use querydeck::store::fs::FileStore;
use querydeck::store::ConfigStore;
use std::fs;

#[test]
fn missing_settings_file_reads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().join("nested"));

    assert_eq!(store.get("anything").unwrap(), None);
    assert!(!store.settings_path().exists());
}

#[test]
fn set_get_roundtrip_and_no_temp_leftovers() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());

    store.set("daySchema", "a;b;c;d;e;f;g").unwrap();
    store.set("useAmericanDate", "true").unwrap();

    let reopened = FileStore::new(dir.path().to_path_buf());
    assert_eq!(
        reopened.get("daySchema").unwrap(),
        Some("a;b;c;d;e;f;g".to_string())
    );
    assert_eq!(
        reopened.get("useAmericanDate").unwrap(),
        Some("true".to_string())
    );

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn remove_deletes_only_that_key() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    store.remove("a").unwrap();
    store.remove("missing").unwrap();

    assert_eq!(store.get("a").unwrap(), None);
    assert_eq!(store.get("b").unwrap(), Some("2".to_string()));
}

#[test]
fn corrupt_settings_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileStore::new(dir.path().to_path_buf());
    fs::write(store.settings_path(), "not json").unwrap();

    assert!(store.get("a").is_err());
}

#[test]
fn custom_queries_persist_as_json_string() {
    let dir = tempfile::tempdir().unwrap();
    let api = QueryDeckApi::new(FileStore::new(dir.path().to_path_buf()));
    api.create_query(Query::new(
        "Crates",
        "cr",
        "https://crates.io/search?q={q}",
    ))
    .unwrap();
    api.set_default_provider("cr").unwrap();

    let raw = api.store().get(KEY_CUSTOM_QUERIES).unwrap().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed[0]["name"], "Crates");
    assert_eq!(parsed[0]["prefix"], "cr");
    assert_eq!(parsed[0]["url"], "https://crates.io/search?q={q}");
    assert_eq!(
        api.store().get(KEY_DEFAULT_SEARCH_PROVIDER).unwrap(),
        Some("cr".to_string())
    );

    let reopened = QueryDeckApi::new(FileStore::new(dir.path().to_path_buf()));
    let result = reopened.resolve("cr serde").unwrap();
    assert_eq!(
        result.resolution.unwrap().url,
        "https://crates.io/search?q=serde"
    );
}
