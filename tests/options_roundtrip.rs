use spinpick::store::storage::ListStorage;
use spinpick::store::OptionStore;
use spinpick::SpinPickError;
use tempfile::TempDir;

#[test]
fn test_add_serialize_clear_deserialize_scenario() {
    let mut store = OptionStore::new();
    assert_eq!(store.len(), 0);

    store.add("Pizza").unwrap();
    store.add("Sushi").unwrap();
    store.add("Tacos").unwrap();
    assert_eq!(store.len(), 3);

    let saved = store.serialize().unwrap();

    store.clear();
    assert_eq!(store.len(), 0);

    assert_eq!(store.deserialize(&saved).unwrap(), 3);
    assert_eq!(
        store.options(),
        &[
            "Pizza".to_string(),
            "Sushi".to_string(),
            "Tacos".to_string()
        ]
    );
}

#[test]
fn test_malformed_file_leaves_store_untouched() {
    let mut store = OptionStore::new();
    store.add("Pizza").unwrap();
    store.add("Sushi").unwrap();

    let err = store.deserialize("{\"options\": [1, 2, 3]}").unwrap_err();
    assert!(matches!(err, SpinPickError::Format(_)));
    assert_eq!(
        store.options(),
        &["Pizza".to_string(), "Sushi".to_string()]
    );
}

#[test]
fn test_on_disk_roundtrip_through_storage() {
    let temp_dir = TempDir::new().unwrap();
    let storage = ListStorage::with_dir(temp_dir.path().join("saved_options"));

    let mut store = OptionStore::new();
    store.add("Pizza").unwrap();
    store.add("火锅").unwrap();
    store.add("Crème brûlée").unwrap();

    let path = storage.save("dinner", &store).unwrap();

    // The file is the documented shape: 2-space indented JSON with
    // non-ASCII characters written literally
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.starts_with("{\n  \"options\": ["));
    assert!(raw.contains("火锅"));
    assert!(!raw.contains("\\u"));

    let mut restored = OptionStore::new();
    assert_eq!(storage.load(&path, &mut restored).unwrap(), 3);
    assert_eq!(restored, store);
}

#[test]
fn test_load_replaces_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let storage = ListStorage::with_dir(temp_dir.path().to_path_buf());

    let mut first = OptionStore::new();
    first.add("Only one").unwrap();
    let path = storage.save("short", &first).unwrap();

    let mut store = OptionStore::new();
    store.add("Old A").unwrap();
    store.add("Old B").unwrap();
    store.add("Old C").unwrap();

    assert_eq!(storage.load(&path, &mut store).unwrap(), 1);
    assert_eq!(store.options(), &["Only one".to_string()]);
}
