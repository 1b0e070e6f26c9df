//! In-memory implementation of the token store for testing.
//!
//! This implementation is NOT secure for production use. It exists so the
//! provider can be exercised in unit tests and on CI hosts without a real
//! platform keystore.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::error::StoreError;

use super::TokenStore;

/// In-memory token store backed by a mutex-guarded map.
///
/// **FOR TESTING ONLY** — values live only as long as the process and are
/// not protected at rest.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryTokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns `true` if the store holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self, key: String) -> Result<Option<String>, StoreError> {
        let guard = self.values.lock().map_err(|_| StoreError::Unavailable {
            reason: "mutex poisoned".to_string(),
        })?;
        Ok(guard.get(&key).cloned())
    }

    fn set(&self, key: String, value: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Unavailable {
                reason: "mutex poisoned".to_string(),
            })?
            .insert(key, value);
        Ok(())
    }

    fn remove(&self, key: String) -> Result<(), StoreError> {
        self.values
            .lock()
            .map_err(|_| StoreError::Unavailable {
                reason: "mutex poisoned".to_string(),
            })?
            .remove(&key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove_round_trip() {
        let store = InMemoryTokenStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k".to_string()).expect("get"), None);

        store.set("k".to_string(), "v1".to_string()).expect("set");
        assert_eq!(
            store.get("k".to_string()).expect("get"),
            Some("v1".to_string())
        );
        assert_eq!(store.len(), 1);

        // last writer wins
        store.set("k".to_string(), "v2".to_string()).expect("set");
        assert_eq!(
            store.get("k".to_string()).expect("get"),
            Some("v2".to_string())
        );
        assert_eq!(store.len(), 1);

        store.remove("k".to_string()).expect("remove");
        assert!(store.is_empty());
    }
}
