//! Shelf configuration, loadable from TOML.
//!
//! ```toml
//! storage_key = "personalBookList"
//! data_dir = "/home/me/.local/share/bookshelf"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use serde::Deserialize;
use std::fmt;
#[cfg(feature = "fs")]
use std::path::Path;
use std::path::PathBuf;

use crate::collection::DEFAULT_STORAGE_KEY;
#[cfg(feature = "fs")]
use crate::kv::{FileKeyValueStore, KvError};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShelfConfig {
    /// Key the collection snapshot is stored under.
    pub storage_key: String,
    /// Directory for the file-backed store.
    pub data_dir: Option<PathBuf>,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
    /// `open_file_store` was called without a `data_dir`.
    MissingDataDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(msg) => write!(f, "config I/O error: {}", msg),
            ConfigError::Parse(msg) => write!(f, "config parse error: {}", msg),
            ConfigError::MissingDataDir => write!(f, "no data_dir configured"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ShelfConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Read config from `path`. A missing file yields the defaults.
    #[cfg(feature = "fs")]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&text)
    }

    /// Open the file-backed store in `data_dir`.
    #[cfg(feature = "fs")]
    pub fn open_file_store(&self) -> Result<FileKeyValueStore, ConfigError> {
        let dir = self.data_dir.as_ref().ok_or(ConfigError::MissingDataDir)?;
        FileKeyValueStore::open(dir).map_err(|e: KvError| ConfigError::Io(e.to_string()))
    }
}
