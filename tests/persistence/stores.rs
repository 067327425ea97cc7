use std::cell::Cell;
use std::rc::Rc;

use bookshelf_rust::{InMemoryKeyValueStore, KeyValueStore, KvError};

/// Wraps an in-memory store; writes fail while the shared switch is on.
#[derive(Clone, Default)]
pub struct FlakyStore {
    inner: InMemoryKeyValueStore,
    failing: Rc<Cell<bool>>,
}

impl FlakyStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.set(failing);
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, KvError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: String) -> Result<(), KvError> {
        if self.failing.get() {
            return Err(KvError::Io("simulated write failure".into()));
        }
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<bool, KvError> {
        self.inner.remove(key)
    }
}
