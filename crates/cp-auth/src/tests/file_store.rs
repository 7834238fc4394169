use crate::tests::sample_user;
use crate::{FileTokenStore, StoreError, TokenStore};

use serde_json::{Value, json};
use tempfile::TempDir;

fn store_in(temp: &TempDir) -> FileTokenStore {
    FileTokenStore::new(temp.path().join("session.json"))
}

#[test]
fn given_no_file_when_load_then_empty_without_corruption() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    let loaded = store.load().unwrap();

    assert!(loaded.is_empty());
    assert!(loaded.corruption_error.is_none());
}

#[test]
fn given_saved_pair_when_loaded_then_matches_exactly() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    let user = sample_user();

    store.save("t1", &user).unwrap();
    let loaded = store.load().unwrap();

    assert_eq!(loaded.token.as_deref(), Some("t1"));
    assert_eq!(loaded.user, Some(user));
}

#[test]
fn given_saved_pair_when_file_inspected_then_uses_both_keys() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);

    store.save("t1", &sample_user()).unwrap();

    let raw: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(raw["token"], "t1");
    assert_eq!(raw["chatpro_user"]["fullName"], "Anna Petrova");
}

#[test]
fn given_saved_pair_when_cleared_twice_then_file_gone_and_no_error() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save("t1", &sample_user()).unwrap();

    store.clear().unwrap();
    store.clear().unwrap();

    assert!(!store.path().exists());
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn given_nested_missing_directory_when_save_then_created() {
    let temp = TempDir::new().unwrap();
    let store = FileTokenStore::new(temp.path().join("a").join("b").join("session.json"));

    store.save("t1", &sample_user()).unwrap();

    assert!(store.path().exists());
}

#[test]
fn given_garbage_file_when_load_then_backed_up_and_reported() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(store.path(), "{not json").unwrap();

    let loaded = store.load().unwrap();

    assert!(loaded.is_empty());
    assert!(loaded.corruption_error.is_some());
    assert!(!store.path().exists());
    let backups = std::fs::read_dir(temp.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().contains(".corrupted."))
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn given_corrupted_cached_user_when_load_then_token_kept_user_dropped() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    std::fs::write(
        store.path(),
        json!({ "token": "t1", "chatpro_user": { "email": 5 } }).to_string(),
    )
    .unwrap();

    let loaded = store.load().unwrap();

    assert_eq!(loaded.token.as_deref(), Some("t1"));
    assert!(loaded.user.is_none());
    assert!(loaded.corruption_error.is_some());
}

#[test]
fn given_cleared_store_when_update_user_then_refused() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save("t1", &sample_user()).unwrap();
    store.clear().unwrap();

    let updated = store.update_user("t1", &sample_user()).unwrap();

    assert!(!updated);
    assert!(!store.path().exists());
}

#[test]
fn given_matching_token_when_update_user_then_user_replaced() {
    let temp = TempDir::new().unwrap();
    let store = store_in(&temp);
    store.save("t1", &sample_user()).unwrap();
    let mut refreshed = sample_user();
    refreshed.full_name = Some("Anna Ivanova".to_string());

    assert!(store.update_user("t1", &refreshed).unwrap());

    assert_eq!(store.load().unwrap().user, Some(refreshed));
}

#[test]
fn given_parent_path_is_a_file_when_save_then_dir_creation_error_with_hint() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not-a-dir");
    std::fs::write(&blocker, b"x").unwrap();
    let store = FileTokenStore::new(blocker.join("session.json"));

    let err = store.save("t1", &sample_user()).unwrap_err();

    assert!(matches!(err, StoreError::DirCreation { .. }));
    assert!(err.recovery_hint().contains("config directory"));
    assert!(store.load().unwrap().is_empty());
}
