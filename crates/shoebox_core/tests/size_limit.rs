use serde_json::{json, Value};
use shoebox_core::{
    DbError, DocumentRepository, FieldMap, FileDocumentRepository, RepoError, StoreConfig,
};
use tempfile::TempDir;

fn fields(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected JSON object, got {other}"),
    }
}

fn open_with_limit(dir: &TempDir, max_size_mib: u64) -> FileDocumentRepository {
    FileDocumentRepository::open(StoreConfig {
        path: dir.path().join("store.json"),
        max_size_mib,
    })
    .unwrap()
}

#[test]
fn default_config_enforces_five_mib() {
    let config = StoreConfig::default();
    assert_eq!(config.max_size_mib, 5);

    let dir = tempfile::tempdir().unwrap();
    let repo = FileDocumentRepository::open(StoreConfig {
        path: dir.path().join("store.json"),
        ..StoreConfig::default()
    })
    .unwrap();
    assert_eq!(repo.max_size_bytes(), 5 * 1024 * 1024);
}

#[test]
fn create_beyond_limit_fails_and_names_the_limit() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_with_limit(&dir, 1);

    let small = repo
        .create_document(fields(json!({"payload": "x".repeat(512 * 1024)})))
        .unwrap();

    let err = repo
        .create_document(fields(json!({"payload": "y".repeat(600 * 1024)})))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Db(DbError::SizeLimitExceeded { .. })
    ));
    let message = err.to_string();
    assert!(message.contains("1.00 MB"));
    assert!(message.contains("max_size_mib"));

    // Documents inserted before the threshold stay retrievable.
    assert!(repo.get_document(&small.id).is_some());
}

#[test]
fn rejected_persist_leaves_memory_ahead_of_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_with_limit(&dir, 1);

    repo.create_document(fields(json!({"payload": "x".repeat(512 * 1024)})))
        .unwrap();
    repo.create_document(fields(json!({"payload": "y".repeat(600 * 1024)})))
        .unwrap_err();

    // The mutation was applied before the size check, so the oversized
    // document is resident in memory while disk kept the last good state.
    assert_eq!(repo.list_documents().len(), 2);
    drop(repo);

    let reopened = open_with_limit(&dir, 1);
    assert_eq!(reopened.list_documents().len(), 1);
}

#[test]
fn update_shares_the_size_budget_and_erase_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_with_limit(&dir, 1);

    let doc = repo
        .create_document(fields(json!({"payload": "small"})))
        .unwrap();

    let err = repo
        .update_document(&doc.id, fields(json!({"payload": "z".repeat(2 * 1024 * 1024)})))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Db(DbError::SizeLimitExceeded { .. })
    ));

    repo.erase().unwrap();
    let recovered = repo
        .create_document(fields(json!({"payload": "fits again"})))
        .unwrap();
    assert!(repo.get_document(&recovered.id).is_some());
}

#[test]
fn multi_byte_content_is_measured_in_encoded_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut repo = open_with_limit(&dir, 1);

    // 400k three-byte characters: ~400k chars but ~1.2 MiB encoded.
    let err = repo
        .create_document(fields(json!({"payload": "\u{20AC}".repeat(400 * 1024)})))
        .unwrap_err();

    assert!(matches!(
        err,
        RepoError::Db(DbError::SizeLimitExceeded { .. })
    ));
}
