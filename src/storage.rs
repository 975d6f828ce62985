//! Browser Storage
//!
//! Key-value persistence for the auth token and the local story draft.
//! Writes are best effort: failures are logged and otherwise ignored.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::TOKEN_KEY;

/// Minimal string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::error!("[Storage] Failed to write key {}", key);
                }
            }
            None => log::warn!("[Storage] localStorage unavailable, dropping write to {}", key),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::error!("[Storage] Failed to load {}: {}", key, e);
            None
        }
    }
}

pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(json) => store.set(key, &json),
        Err(e) => log::error!("[Storage] Failed to serialize {}: {}", key, e),
    }
}

// ========================
// Auth Token
// ========================

pub fn stored_token() -> Option<String> {
    LocalStorage.get(TOKEN_KEY).filter(|t| !t.is_empty())
}

pub fn store_token(token: &str) {
    LocalStorage.set(TOKEN_KEY, token);
}

pub fn clear_token() {
    LocalStorage.remove(TOKEN_KEY);
}

#[cfg(test)]
pub(crate) mod memory {
    use super::KeyValueStore;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    /// In-memory store that counts writes
    #[derive(Default)]
    pub struct MemoryStore {
        entries: RefCell<HashMap<String, String>>,
        writes: Cell<usize>,
    }

    impl MemoryStore {
        pub fn writes(&self) -> usize {
            self.writes.get()
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.writes.set(self.writes.get() + 1);
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        }

        fn remove(&self, key: &str) {
            self.entries.borrow_mut().remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::MemoryStore;
    use super::*;
    use crate::models::Draft;

    #[test]
    fn test_json_round_trip_through_store() {
        let store = MemoryStore::default();
        let draft = Draft {
            title: "Garden".to_string(),
            content: "Tomatoes **everywhere**".to_string(),
            ..Default::default()
        };

        save_json(&store, "draft", &draft);
        assert_eq!(load_json::<Draft>(&store, "draft"), Some(draft));
    }

    #[test]
    fn test_corrupt_entry_loads_as_none() {
        let store = MemoryStore::default();
        store.set("draft", "{not json");
        assert_eq!(load_json::<Draft>(&store, "draft"), None);
        assert_eq!(load_json::<Draft>(&store, "missing"), None);
    }
}
