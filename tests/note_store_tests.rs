// Integration tests for note persistence
//
// These tests verify write-through behavior, startup rehydration, the
// empty-list fallback on missing or corrupt data, and normalization of
// legacy bare-string records.

use anyhow::Result;
use tempfile::TempDir;
use voice_notes::{JsonFileStorage, MemoryStorage, Note, NoteStore, Storage, STORAGE_KEY};

#[test]
fn test_load_without_persisted_data_is_empty() {
    let store = NoteStore::load(Box::new(MemoryStorage::new()));
    assert!(store.is_empty());
}

#[test]
fn test_load_with_malformed_data_is_empty() {
    let storage = MemoryStorage::with_value(STORAGE_KEY, "{not json");
    let store = NoteStore::load(Box::new(storage));
    assert!(store.is_empty());
}

#[test]
fn test_append_round_trips_through_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut store = NoteStore::load(Box::new(JsonFileStorage::new(temp_dir.path())?));
    store.append(Note::now("buy milk"))?;
    store.append(Note::now("call the plumber"))?;
    drop(store);

    // A fresh store over the same directory sees the same ordered list
    let reloaded = NoteStore::load(Box::new(JsonFileStorage::new(temp_dir.path())?));

    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.notes()[0].text, "buy milk");
    assert_eq!(reloaded.notes()[1].text, "call the plumber");
    assert!(reloaded.notes()[0].timestamp.is_some());

    Ok(())
}

#[test]
fn test_delete_preserves_order_of_remaining_notes() -> Result<()> {
    let mut store = NoteStore::load(Box::new(MemoryStorage::new()));
    store.append(Note::now("a"))?;
    store.append(Note::now("b"))?;
    store.append(Note::now("c"))?;

    let removed = store.delete(1)?;

    assert_eq!(removed.text, "b");
    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].text, "a");
    assert_eq!(store.notes()[1].text, "c");

    Ok(())
}

#[test]
fn test_delete_writes_through() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut store = NoteStore::load(Box::new(JsonFileStorage::new(temp_dir.path())?));
    store.append(Note::now("keep"))?;
    store.append(Note::now("drop"))?;
    store.delete(1)?;
    drop(store);

    let reloaded = NoteStore::load(Box::new(JsonFileStorage::new(temp_dir.path())?));
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.notes()[0].text, "keep");

    Ok(())
}

#[test]
fn test_legacy_bare_strings_are_normalized() {
    // A list persisted by an old version: plain strings next to records
    let raw = r#"["plain old note", {"text": "new note", "timestamp": "2024-03-01T12:00:00Z"}]"#;
    let storage = MemoryStorage::with_value(STORAGE_KEY, raw);

    let store = NoteStore::load(Box::new(storage));

    assert_eq!(store.len(), 2);
    assert_eq!(store.notes()[0].text, "plain old note");
    assert_eq!(store.notes()[0].timestamp, None);
    assert_eq!(store.notes()[1].text, "new note");
    assert!(store.notes()[1].timestamp.is_some());
}

#[test]
fn test_record_without_timestamp_field_loads() {
    let raw = r#"[{"text": "no stamp"}]"#;
    let storage = MemoryStorage::with_value(STORAGE_KEY, raw);

    let store = NoteStore::load(Box::new(storage));

    assert_eq!(store.len(), 1);
    assert_eq!(store.notes()[0].timestamp, None);
}

#[test]
fn test_persisted_value_lives_under_fixed_key() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let mut store = NoteStore::load(Box::new(JsonFileStorage::new(temp_dir.path())?));
    store.append(Note::now("anything"))?;

    let storage = JsonFileStorage::new(temp_dir.path())?;
    let raw = storage.get(STORAGE_KEY)?.expect("note list should be persisted");
    assert!(raw.contains("anything"));

    Ok(())
}

#[test]
fn test_serialized_notes_round_trip_as_pairs() -> Result<()> {
    let notes = vec![Note::now("one"), Note::now("two")];

    let raw = serde_json::to_string(&notes)?;
    let back: Vec<Note> = serde_json::from_str(&raw)?;

    assert_eq!(back, notes);

    Ok(())
}
