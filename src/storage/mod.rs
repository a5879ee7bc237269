use crate::models::CollectionSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// localStorage key holding the serialized collection set.
pub(crate) const COLLECTIONS_KEY: &str = "collections";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub(crate) enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}`: {message}")]
    Read { key: String, message: String },

    #[error("failed to write `{key}`: {message}")]
    Write { key: String, message: String },

    #[error("failed to serialize value: {0}")]
    Serialize(String),
}

/// String key/value backend for persisted state.
pub(crate) trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    // Only tests clear keys.
    #[cfg_attr(not(test), allow(dead_code))]
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// The window's `localStorage`. Looked up on every call so the handle stays `Send + Sync`.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(key)
            .map_err(|e| StorageError::Read {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write {
                key: key.to_string(),
                message: format!("{e:?}"),
            })
    }
}

/// In-process store. Clones share the same map.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    items: std::rc::Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::new();
        s.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        s
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub(crate) fn load_json_from_storage<T: for<'de> Deserialize<'de>>(
    storage: &impl KeyValueStore,
    key: &str,
) -> Option<T> {
    let json = match storage.get_item(key) {
        Ok(Some(json)) => json,
        Ok(None) => return None,
        Err(e) => {
            log::debug!("{e}");
            return None;
        }
    };

    match serde_json::from_str(&json) {
        Ok(v) => Some(v),
        Err(e) => {
            log::debug!("ignoring unparsable `{key}`: {e}");
            None
        }
    }
}

pub(crate) fn save_json_to_storage<T: Serialize>(
    storage: &impl KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set_item(key, &json)
}

/// Absent and corrupt data both read as an empty set.
pub(crate) fn load_collections(storage: &impl KeyValueStore) -> CollectionSet {
    load_json_from_storage::<CollectionSet>(storage, COLLECTIONS_KEY).unwrap_or_default()
}

/// Overwrites the stored blob. Write failures are logged, never raised.
pub(crate) fn save_collections(storage: &impl KeyValueStore, set: &CollectionSet) {
    if let Err(e) = save_json_to_storage(storage, COLLECTIONS_KEY, set) {
        log::warn!("collections not persisted: {e}");
    }
}
