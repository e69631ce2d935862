use super::*;

fn user() -> User {
    User {
        id: "1".to_owned(),
        name: "Calil".to_owned(),
        email: "user1@email.com".to_owned(),
        avatar_url: String::new(),
    }
}

fn storage() -> (Arc<MemoryStorage>, SessionStorage) {
    let memory = Arc::new(MemoryStorage::new());
    let session_storage = SessionStorage::new(memory.clone(), "@GoBarber");
    (memory, session_storage)
}

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_set_get_remove() {
    let memory = MemoryStorage::new();
    assert_eq!(memory.get("k").unwrap(), None);
    memory.set("k", "v").unwrap();
    assert_eq!(memory.get("k").unwrap().as_deref(), Some("v"));
    memory.remove("k").unwrap();
    assert!(!memory.contains("k"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_outside_browser() {
    assert_eq!(BrowserStorage.get("k"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.set("k", "v"), Err(StorageError::Unavailable));
    assert_eq!(BrowserStorage.remove("k"), Err(StorageError::Unavailable));
}

// =============================================================
// SessionStorage
// =============================================================

#[test]
fn keys_are_namespaced() {
    let (_, storage) = storage();
    assert_eq!(storage.token_key(), "@GoBarber:token");
    assert_eq!(storage.user_key(), "@GoBarber:user");
}

#[test]
fn save_then_load_reproduces_session() {
    let (memory, storage) = storage();
    let session = Session { token: "abc".to_owned(), user: user() };
    storage.save(&session).unwrap();

    assert_eq!(memory.get("@GoBarber:token").unwrap().as_deref(), Some("abc"));
    assert_eq!(storage.load().unwrap(), Some(session));
}

#[test]
fn load_without_token_is_none() {
    let (_, storage) = storage();
    storage.save_user(&user()).unwrap();
    assert_eq!(storage.load().unwrap(), None);
}

#[test]
fn load_without_user_is_none() {
    let (memory, storage) = storage();
    memory.set("@GoBarber:token", "abc").unwrap();
    assert_eq!(storage.load().unwrap(), None);
}

#[test]
fn load_with_malformed_user_is_corrupt_session() {
    let (memory, storage) = storage();
    memory.set("@GoBarber:token", "abc").unwrap();
    memory.set("@GoBarber:user", "{not json").unwrap();

    let err = storage.load().unwrap_err();
    assert!(matches!(err, SessionError::CorruptSession { ref key, .. } if key == "@GoBarber:user"));
}

#[test]
fn clear_removes_both_keys() {
    let (memory, storage) = storage();
    storage.save(&Session { token: "abc".to_owned(), user: user() }).unwrap();
    storage.clear().unwrap();
    assert!(!memory.contains("@GoBarber:token"));
    assert!(!memory.contains("@GoBarber:user"));
}

#[test]
fn user_is_stored_as_json() {
    let (memory, storage) = storage();
    storage.save_user(&user()).unwrap();
    let raw = memory.get("@GoBarber:user").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["email"], "user1@email.com");
}
