/// Persistence of the session fields in the popup's local storage

use crate::error::StorageError;
use crate::event::SessionFields;

/// Minimal string key/value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Storage keys of the persisted session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    ProjectId,
    ApiKey,
    Username,
}

impl SessionKey {
    #[cfg(test)]
    pub const ALL: [SessionKey; 3] = [SessionKey::ProjectId, SessionKey::ApiKey, SessionKey::Username];

    pub fn as_str(self) -> &'static str {
        match self {
            SessionKey::ProjectId => "projectId",
            SessionKey::ApiKey => "apiKey",
            SessionKey::Username => "username",
        }
    }
}

/// Read the session fields. Missing keys load as empty strings.
pub fn load_session<S: KeyValueStore>(store: &S) -> SessionFields {
    let read = |key: SessionKey| store.get(key.as_str()).unwrap_or_default();

    SessionFields {
        project_id: read(SessionKey::ProjectId),
        api_key: read(SessionKey::ApiKey),
        username: read(SessionKey::Username),
    }
}

/// Write one session field, replacing the previous value
pub fn save_field<S: KeyValueStore>(store: &S, key: SessionKey, value: &str) -> Result<(), StorageError> {
    store.set(key.as_str(), value)
}

/// `window.localStorage`. Reads nothing and refuses writes when unavailable.
#[derive(Clone)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

impl LocalStorage {
    pub fn open() -> LocalStorage {
        let storage = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("{}", StorageError::Unavailable);
        }
        LocalStorage { storage }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// In-memory store for host tests
    #[derive(Default)]
    pub(crate) struct MemoryStore {
        pub(crate) values: RefCell<HashMap<String, String>>,
        pub(crate) fail_writes: bool,
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    message: "quota exceeded".to_string(),
                });
            }
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_keys() {
        let keys: Vec<&str> = SessionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["projectId", "apiKey", "username"]);
    }

    #[test]
    fn test_load_empty_store() {
        let store = MemoryStore::default();
        assert_eq!(load_session(&store), SessionFields::default());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::default();
        save_field(&store, SessionKey::ProjectId, "p1").unwrap();
        save_field(&store, SessionKey::ApiKey, "k1").unwrap();
        save_field(&store, SessionKey::Username, "u1").unwrap();

        let session = load_session(&store);

        assert_eq!(session.project_id, "p1");
        assert_eq!(session.api_key, "k1");
        assert_eq!(session.username, "u1");
    }

    #[test]
    fn test_save_replaces_previous_value() {
        let store = MemoryStore::default();
        save_field(&store, SessionKey::Username, "old").unwrap();
        save_field(&store, SessionKey::Username, "new").unwrap();

        assert_eq!(store.get("username"), Some("new".to_string()));
        assert_eq!(store.values.borrow().len(), 1);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = MemoryStore {
            fail_writes: true,
            ..Default::default()
        };

        let result = save_field(&store, SessionKey::ApiKey, "k1");

        assert!(matches!(result, Err(StorageError::Write { ref key, .. }) if key == "apiKey"));
    }
}
