//! Integration tests for promptnote
//!
//! These drive the library the way the CLI does: open a store, load the
//! app, apply operations, and check what reached persistence.

use chrono::{Duration, Utc};
use promptnote::clipboard::MemoryClipboard;
use promptnote::editor::Draft;
use promptnote::storage::{open_store, BackendKind, FileStore, KvStore, MemoryStore, RecordStore};
use promptnote::transfer::TransferError;
use promptnote::{App, PromptNoteError, Record};
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn record(id: &str, title: &str) -> Record {
    let now = Utc::now();
    Record {
        id: id.to_string(),
        title: title.to_string(),
        content: format!("{title} body"),
        tags: Vec::new(),
        usage_count: 0,
        created_at: now,
        updated_at: now,
    }
}

fn shared_app(records: Vec<Record>) -> (App, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::with_records(records));
    let app = App::load(Box::new(Arc::clone(&store))).unwrap();
    (app, store)
}

#[test]
fn test_upserts_with_distinct_ids_grow_collection() {
    let (mut app, store) = shared_app(Vec::new());
    for id in ["a", "b", "c", "b", "a"] {
        let mut r = record(id, id);
        r.updated_at = Utc::now();
        app.upsert(r).unwrap();
    }
    assert_eq!(app.records().len(), 3);
    assert_eq!(store.persisted(), app.records());
}

#[test]
fn test_second_upsert_keeps_created_at_and_position() {
    let created = Utc::now() - Duration::days(1);
    let mut first = record("x", "First");
    first.created_at = created;
    first.updated_at = created;
    let (mut app, _store) = shared_app(vec![record("w", "W"), first.clone(), record("y", "Y")]);

    let mut draft = Draft::from_record(&first);
    draft.title = "Renamed".into();
    let saved = draft.save(&mut app).unwrap().unwrap();

    assert_eq!(saved.created_at, created);
    assert!(saved.updated_at > created);
    let ids: Vec<_> = app.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["w", "x", "y"]);
    assert_eq!(app.records()[1].title, "Renamed");
}

#[test]
fn test_usage_increments_only_target() {
    let (mut app, store) = shared_app(vec![record("1", "A"), record("2", "B")]);
    let before = app.records()[1].clone();
    for _ in 0..4 {
        app.record_usage("1").unwrap();
    }
    assert_eq!(app.records()[0].usage_count, 4);
    assert_eq!(app.records()[1], before);
    assert_eq!(store.persisted()[0].usage_count, 4);
}

#[test]
fn test_filter_examples() {
    let (app, _store) = shared_app(vec![record("1", "Code Refactoring"), record("2", "Email Professional")]);
    assert_eq!(app.filter("").len(), 2);
    let hits = app.filter("code");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "1");
}

#[test]
fn test_ranking_order_on_seeded_data() {
    let app = App::load(Box::new(MemoryStore::new())).unwrap();
    let labels: Vec<_> = app.top_ranked().into_iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        vec![
            "Explain Like I am 5",
            "Code Refactoring",
            "React Component Gene...",
            "Email Professional",
            "Summarize Text",
        ]
    );
}

#[test]
fn test_import_first_write_wins() {
    let original = record("1", "Original");
    let (mut app, store) = shared_app(vec![original.clone()]);
    let payload = r#"[
        {"id":"1","title":"X","content":"x","tags":[],"usageCount":0,
         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
        {"id":"2","title":"Y","content":"y","tags":[],"usageCount":0,
         "createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"}
    ]"#;

    let summary = app.import_merge(payload).unwrap();
    assert_eq!((summary.imported, summary.skipped), (1, 1));
    assert_eq!(app.records()[0], original);
    assert_eq!(app.records()[1].title, "Y");
    assert_eq!(store.persisted().len(), 2);
}

#[test]
fn test_import_accepts_records_with_only_id_and_title() {
    let original = record("1", "Original");
    let (mut app, store) = shared_app(vec![original.clone()]);

    app.import_merge(r#"[{"id":"1","title":"X"},{"id":"2","title":"Y"}]"#)
        .unwrap();

    assert_eq!(app.records().len(), 2);
    assert_eq!(app.records()[0], original);
    assert_eq!(app.records()[1].id, "2");
    assert_eq!(app.records()[1].title, "Y");
    assert_eq!(store.persisted(), app.records());
}

#[test]
fn test_invalid_import_changes_nothing() {
    let (mut app, store) = shared_app(vec![record("1", "Original")]);
    let before = serde_json::to_string(app.records()).unwrap();
    let saves = store.save_count();

    for payload in ["{", r#"{"id":"1"}"#, "null"] {
        let err = app.import_merge(payload).unwrap_err();
        assert!(matches!(
            err,
            PromptNoteError::Transfer(TransferError::InvalidJson(_) | TransferError::NotAnArray)
        ));
    }
    assert_eq!(serde_json::to_string(app.records()).unwrap(), before);
    assert_eq!(store.save_count(), saves);
}

#[test]
fn test_invalid_save_issues_no_persistence_call() {
    let (mut app, store) = shared_app(vec![record("1", "A")]);
    let saves = store.save_count();

    let mut draft = Draft::new();
    draft.title = "Title only".into();
    assert!(draft.save(&mut app).unwrap().is_none());

    let mut draft = Draft::new();
    draft.content = "Content only".into();
    assert!(draft.save(&mut app).unwrap().is_none());

    assert_eq!(store.save_count(), saves);
    assert_eq!(app.records().len(), 1);
}

#[test]
fn test_round_trip_file_backend() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    store.load_records().unwrap();

    let records = vec![record("a", "A"), record("b", "B")];
    assert!(store.save_records(&records).unwrap());
    assert_eq!(store.load_records().unwrap(), records);
}

#[test]
fn test_round_trip_kv_backend() {
    let dir = TempDir::new().unwrap();
    let store = KvStore::open(dir.path().join("kv")).unwrap();
    store.load_records().unwrap();

    let records = vec![record("a", "A"), record("b", "B")];
    assert!(store.save_records(&records).unwrap());
    assert_eq!(store.load_records().unwrap(), records);
}

#[test]
fn test_fresh_file_store_seeds_and_persists() {
    let dir = TempDir::new().unwrap();
    {
        let app = App::load(open_store(BackendKind::File, dir.path()).unwrap()).unwrap();
        assert_eq!(app.records().len(), 5);
    }
    let raw = fs::read_to_string(dir.path().join("data.json")).unwrap();
    assert!(raw.contains("\"usageCount\": 20"));
}

#[test]
fn test_preferences_survive_reopen() {
    let dir = TempDir::new().unwrap();
    {
        let mut app = App::load(open_store(BackendKind::Kv, dir.path()).unwrap()).unwrap();
        app.toggle_theme().unwrap();
        app.toggle_language().unwrap();
    }
    let app = App::load(open_store(BackendKind::Kv, dir.path()).unwrap()).unwrap();
    assert_eq!(app.theme().as_str(), "dark");
    assert_eq!(app.language().as_str(), "zh");
}

#[test]
fn test_full_workflow_on_file_backend() {
    let dir = TempDir::new().unwrap();
    let clipboard = MemoryClipboard::new();

    let id = {
        let mut app = App::load(open_store(BackendKind::File, dir.path()).unwrap()).unwrap();
        let mut draft = Draft::new();
        draft.title = "Translate".into();
        draft.content = "Translate into French:".into();
        draft.tag_input = "language".into();
        draft.commit_tag_input();
        let saved = draft.save(&mut app).unwrap().unwrap();

        assert!(draft.copy_to_use(&mut app, &clipboard).unwrap());
        app.export_to(dir.path().join("backup")).unwrap();
        saved.id
    };

    let mut app = App::load(open_store(BackendKind::File, dir.path()).unwrap()).unwrap();
    let stored = app.record(&id).unwrap();
    assert_eq!(stored.usage_count, 1);
    assert_eq!(stored.tags, vec!["language"]);
    assert_eq!(clipboard.contents().as_deref(), Some("Translate into French:"));

    assert!(app.delete(&id).unwrap());
    let summary = app
        .import_file(dir.path().join("backup").join("prompt_notes_export.json"))
        .unwrap();
    assert_eq!(summary.imported, 1);
    assert_eq!(app.record(&id).unwrap().usage_count, 1);
}
