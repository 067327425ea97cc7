//! JsonSlot - JSON load/save over a KeyValueStore that never fails the caller.

use log::{debug, error};
use serde::{de::DeserializeOwned, Serialize};

use super::KeyValueStore;

/// Typed JSON access to a [`KeyValueStore`].
///
/// Reads fall back to a caller-supplied default when the key is absent, the
/// store errors, or the stored text does not parse. Writes log and swallow
/// failures. Neither operation ever returns an error.
#[derive(Clone, Debug, Default)]
pub struct JsonSlot<S> {
    store: S,
}

impl<S: KeyValueStore> JsonSlot<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load and decode the value stored under `key`, or `default`.
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("no stored value for key \"{}\", using default", key);
                return default;
            }
            Err(e) => {
                error!("error reading key \"{}\": {}", key, e);
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                error!("error decoding key \"{}\": {}", key, e);
                default
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// Returns whether the write reached the store.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let text = match serde_json::to_string(value) {
            Ok(text) => text,
            Err(e) => {
                error!("error encoding key \"{}\": {}", key, e);
                return false;
            }
        };

        match self.store.set(key, text) {
            Ok(()) => true,
            Err(e) => {
                error!("error setting key \"{}\": {}", key, e);
                false
            }
        }
    }
}
