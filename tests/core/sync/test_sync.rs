// Integration tests for local folder sync

use crate::common::{create_test_services, hit_for, TestFolder};
use docsift::core::config::{Config, SyncConfig, SyncFolder};
use docsift::core::index::DocumentIndex;
use docsift::core::services::Services;
use docsift::core::sync::FolderSync;

fn folder_sync() -> FolderSync {
    FolderSync::from_config(&SyncConfig::default()).expect("default patterns compile")
}

#[test]
fn test_sync_small_folder() {
    let folder = TestFolder::small();
    let index = DocumentIndex::new();

    let stats = folder_sync()
        .sync(&index, folder.path(), "local")
        .expect("Sync failed");

    // image.png is not included and .git/ is pruned
    assert_eq!(stats.source, "local");
    assert_eq!(stats.files_synced, 3);
    assert_eq!(stats.documents_deleted, 0);
    assert_eq!(index.len(), 3);

    let hits = index.search("aaa");
    assert_eq!(hits.len(), 2);
    assert!(hit_for(&hits, "local:deck.txt").is_some());
    assert!(hit_for(&hits, "local:minutes_2024-05.txt").is_some());
}

#[test]
fn test_synced_document_metadata() {
    let folder = TestFolder::with_files(&[("q3 plan.md", "the plan")]);
    let index = DocumentIndex::new();

    folder_sync().sync(&index, folder.path(), "team").unwrap();

    let record = index.get("team:q3_plan.md").expect("document should exist");
    assert_eq!(record.title, "q3 plan.md");
    assert_eq!(record.source, "team");
    assert_eq!(record.page_or_slide, "p1");
    assert_eq!(record.thumbnail_url, "/thumb/team:q3_plan.md");
    assert!(!record.is_deleted);
}

#[test]
fn test_resync_updates_and_soft_deletes() {
    let folder = TestFolder::small();
    let index = DocumentIndex::new();
    let sync = folder_sync();
    sync.sync(&index, folder.path(), "local").unwrap();

    folder.write("deck.txt", "Quarterly review, revised.");
    folder.remove("notes.md");
    let stats = sync.sync(&index, folder.path(), "local").unwrap();

    assert_eq!(stats.files_synced, 2);
    assert_eq!(stats.documents_deleted, 1);
    assert!(hit_for(&index.search("aaa"), "local:deck.txt").is_none());
    assert!(index.search("nothing to see").is_empty());

    let notes = index.get("local:notes.md").expect("record is kept");
    assert!(notes.is_deleted);

    // A second pass does not count the same deletion again
    let stats = sync.sync(&index, folder.path(), "local").unwrap();
    assert_eq!(stats.documents_deleted, 0);
}

#[test]
fn test_resync_keeps_exclusion() {
    let folder = TestFolder::small();
    let index = DocumentIndex::new();
    let sync = folder_sync();
    sync.sync(&index, folder.path(), "local").unwrap();

    index.exclude("local:deck.txt", "admin-user", true).unwrap();
    folder.write("deck.txt", "Quarterly review. Revenue AAA grew again.");
    sync.sync(&index, folder.path(), "local").unwrap();

    assert!(hit_for(&index.search("again"), "local:deck.txt").is_none());
    let rows = index.list_excluded(true).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].excluded_by, "admin-user");
}

#[test]
fn test_sync_leaves_other_sources_alone() {
    let first = TestFolder::with_files(&[("a.txt", "shared AAA")]);
    let second = TestFolder::with_files(&[("b.txt", "shared AAA")]);
    let index = DocumentIndex::new();
    let sync = folder_sync();

    sync.sync(&index, first.path(), "first").unwrap();
    let stats = sync.sync(&index, second.path(), "second").unwrap();

    assert_eq!(stats.documents_deleted, 0);
    assert_eq!(index.search("aaa").len(), 2);
}

#[test]
fn test_sync_missing_folder() {
    let index = DocumentIndex::new();

    let err = folder_sync()
        .sync(&index, std::path::Path::new("/nonexistent/docsift"), "local")
        .unwrap_err();

    assert!(err.is_not_found());
}

#[test]
fn test_sync_skips_non_utf8_files() {
    let folder = TestFolder::with_files(&[("ok.txt", "readable AAA")]);
    std::fs::write(folder.path().join("bad.txt"), [0xff, 0xfe, 0xfd]).unwrap();
    let index = DocumentIndex::new();

    let stats = folder_sync().sync(&index, folder.path(), "local").unwrap();

    assert_eq!(stats.files_synced, 1);
    assert_eq!(stats.files_skipped, 1);
}

#[test]
fn test_services_sync_configured_folders() {
    let folder = TestFolder::small();
    let mut config = Config::default();
    config.sync.folders = vec![SyncFolder {
        path: folder.path().to_path_buf(),
        source: "local".to_string(),
    }];

    let services = Services::new(config);
    let stats = services.sync_configured_folders().unwrap();

    assert_eq!(stats.len(), 1);
    assert_eq!(services.index.search("aaa").len(), 2);
}

#[test]
fn test_services_without_folders() {
    let services = create_test_services();

    let stats = services.sync_configured_folders().unwrap();

    assert!(stats.is_empty());
    assert!(services.index.is_empty());
}
