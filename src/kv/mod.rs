//! Key-value storage - the persistence collaborator of the collection store.
//!
//! A [`KeyValueStore`] is a synchronous, string-keyed, string-valued slot
//! store: think of a browser's local storage, a directory of files, or a
//! table with a single text column. The collection never talks to a store
//! directly; it goes through [`JsonSlot`], which handles (de)serialization
//! and turns every failure into a logged fallback.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf_rust::{InMemoryKeyValueStore, JsonSlot, KeyValueStore};
//!
//! let store = InMemoryKeyValueStore::new();
//! let slot = JsonSlot::new(store.clone());
//!
//! slot.save("numbers", &vec![1, 2, 3]);
//! let numbers: Vec<u32> = slot.load("numbers", Vec::new());
//! assert_eq!(numbers, vec![1, 2, 3]);
//! ```

#[cfg(feature = "fs")]
mod file;
mod in_memory;
mod json_slot;

use std::fmt;

/// Abstract synchronous string storage.
pub trait KeyValueStore {
    /// Read the raw text stored under `key`. Returns None if absent.
    fn get(&self, key: &str) -> Result<Option<String>, KvError>;

    /// Write `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: String) -> Result<(), KvError>;

    /// Remove `key`. Returns true if it existed.
    fn remove(&self, key: &str) -> Result<bool, KvError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, KvError> {
        (**self).remove(key)
    }
}

/// Error type for key-value store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KvError {
    /// A shared storage lock was poisoned by a panicking writer.
    LockPoisoned(&'static str),
    /// The write would grow the store past its capacity.
    QuotaExceeded {
        key: String,
        needed: usize,
        quota: usize,
    },
    /// Underlying I/O failure.
    Io(String),
    /// The key cannot be represented by this backend.
    InvalidKey(String),
}

impl fmt::Display for KvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KvError::LockPoisoned(operation) => {
                write!(f, "key-value store lock poisoned during {}", operation)
            }
            KvError::QuotaExceeded { key, needed, quota } => write!(
                f,
                "quota exceeded writing {} ({} bytes needed, quota {})",
                key, needed, quota
            ),
            KvError::Io(msg) => write!(f, "key-value store I/O error: {}", msg),
            KvError::InvalidKey(key) => write!(f, "invalid key: {:?}", key),
        }
    }
}

impl std::error::Error for KvError {}

impl From<std::io::Error> for KvError {
    fn from(err: std::io::Error) -> Self {
        KvError::Io(err.to_string())
    }
}

#[cfg(feature = "fs")]
pub use file::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
pub use json_slot::JsonSlot;
