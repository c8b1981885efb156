// Integration tests for the admin exclusion workflow

use std::thread;
use std::time::Duration;

use crate::common::{doc, hit_for, seed_documents};
use docsift::core::error::DocsiftError;
use docsift::core::index::DocumentIndex;

fn seeded() -> DocumentIndex {
    let index = DocumentIndex::new();
    seed_documents(
        &index,
        &[
            ("doc-1", "テキストテキストAAAテキスト"),
            ("doc-2", "another AAA document"),
            ("doc-3", "nothing relevant"),
        ],
    );
    index
}

#[test]
fn test_exclude_hides_from_search() {
    let index = seeded();

    index.exclude("doc-1", "admin-user", true).unwrap();

    let hits = index.search("AAA");
    assert!(hit_for(&hits, "doc-1").is_none());
    assert!(hit_for(&hits, "doc-2").is_some());

    let rows = index.list_excluded(true).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].doc_id, "doc-1");
    assert_eq!(rows[0].excluded_by, "admin-user");
}

#[test]
fn test_exclude_missing_document() {
    let index = seeded();

    let err = index.exclude("missing-id", "admin-user", true).unwrap_err();

    assert!(matches!(err, DocsiftError::DocumentNotFound(_)));
    assert!(err.is_not_found());
}

#[test]
fn test_admin_check_precedes_existence_check() {
    let index = seeded();

    let err = index.exclude("missing-id", "someone", false).unwrap_err();
    assert!(err.is_forbidden());

    let err = index.include("missing-id", false).unwrap_err();
    assert!(err.is_forbidden());
}

#[test]
fn test_list_excluded_requires_admin() {
    let index = seeded();
    index.exclude("doc-1", "admin-user", true).unwrap();

    let err = index.list_excluded(false).unwrap_err();

    assert!(matches!(err, DocsiftError::PermissionDenied(_)));
}

#[test]
fn test_reupsert_keeps_exclusion() {
    let index = seeded();
    index.exclude("doc-1", "admin-user", true).unwrap();
    let before = index.list_excluded(true).unwrap();

    index.upsert(doc("doc-1", "rewritten AAA content"));

    let after = index.list_excluded(true).unwrap();
    assert_eq!(after.len(), 1);
    assert_eq!(after[0].excluded_by, before[0].excluded_by);
    assert_eq!(after[0].excluded_at, before[0].excluded_at);
    assert!(hit_for(&index.search("rewritten"), "doc-1").is_none());
}

#[test]
fn test_exclude_then_include_restores_hits() {
    let index = seeded();
    let original = hit_for(&index.search("aaa"), "doc-1")
        .cloned()
        .expect("doc-1 should match");

    index.exclude("doc-1", "admin-user", true).unwrap();
    index.include("doc-1", true).unwrap();

    let hits = index.search("aaa");
    let restored = hit_for(&hits, "doc-1").expect("doc-1 should be visible again");
    assert_eq!(restored.hit_positions, original.hit_positions);
    assert!(index.list_excluded(true).unwrap().is_empty());
}

#[test]
fn test_include_not_excluded_is_noop() {
    let index = seeded();

    index.include("doc-3", true).unwrap();

    assert!(index.list_excluded(true).unwrap().is_empty());
    assert_eq!(index.search("nothing").len(), 1);
}

#[test]
fn test_list_excluded_newest_first() {
    let index = seeded();

    index.exclude("doc-1", "alice", true).unwrap();
    thread::sleep(Duration::from_millis(5));
    index.exclude("doc-3", "bob", true).unwrap();
    thread::sleep(Duration::from_millis(5));
    index.exclude("doc-2", "carol", true).unwrap();

    let ids: Vec<String> = index
        .list_excluded(true)
        .unwrap()
        .into_iter()
        .map(|row| row.doc_id)
        .collect();

    assert_eq!(ids, vec!["doc-2", "doc-3", "doc-1"]);
}

#[test]
fn test_reexclude_overwrites_actor() {
    let index = seeded();

    index.exclude("doc-1", "alice", true).unwrap();
    thread::sleep(Duration::from_millis(5));
    index.exclude("doc-1", "bob", true).unwrap();

    let rows = index.list_excluded(true).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].excluded_by, "bob");
}

#[test]
fn test_excluded_list_reports_deleted_flag() {
    let index = seeded();
    index.exclude("doc-2", "admin-user", true).unwrap();

    let mut input = doc("doc-2", "another AAA document");
    input.is_deleted = true;
    index.upsert(input);

    let rows = index.list_excluded(true).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_deleted);
}
