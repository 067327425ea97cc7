//! InMemoryKeyValueStore - HashMap-backed store for tests and embedding.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, KvError};

/// In-memory key-value store backed by `Arc<RwLock<HashMap>>`.
///
/// Clone-friendly (cloning shares the same underlying storage), so a test can
/// keep one handle to inspect what another handle persisted.
///
/// An optional byte quota models a capacity-bounded store: a `set` that would
/// push the total size of keys plus values past the quota is rejected with
/// [`KvError::QuotaExceeded`] and the previous value is left in place.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that holds at most `bytes` of keys and values.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
            quota: Some(bytes),
        }
    }

    /// Total bytes currently held (keys + values).
    pub fn used_bytes(&self) -> Result<usize, KvError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| KvError::LockPoisoned("read"))?;
        Ok(storage.iter().map(|(k, v)| k.len() + v.len()).sum())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| KvError::LockPoisoned("read"))?;
        Ok(storage.get(key).cloned())
    }

    fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| KvError::LockPoisoned("write"))?;

        if let Some(quota) = self.quota {
            let others: usize = storage
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > quota {
                return Err(KvError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    quota,
                });
            }
        }

        storage.insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool, KvError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| KvError::LockPoisoned("write"))?;
        Ok(storage.remove(key).is_some())
    }
}
