//! Local book-collection tracker core.
//!
//! Books (title, author, ownership status) live in a [`BookCollection`] that
//! is loaded from and written back to a single [`KeyValueStore`] slot as JSON.
//! The management and statistics screens are pure projections over the
//! collection and the current [`ViewState`]; [`Shelf`] bundles everything a
//! presentation layer needs into one explicitly owned value.
//!
//! ```ignore
//! use bookshelf_rust::{BookStatus, InMemoryKeyValueStore, Shelf, ShelfConfig, StatusFilter};
//!
//! let mut shelf = Shelf::open(InMemoryKeyValueStore::new(), &ShelfConfig::default());
//! shelf.add("Filosofi Teras", "Henry Manampiring", BookStatus::Owned);
//! shelf.set_status_filter(StatusFilter::Owned);
//! assert_eq!(shelf.filtered().len(), 1);
//! assert_eq!(shelf.statistics().owned, 1);
//! ```

pub mod book;
pub mod collection;
pub mod config;
#[cfg(feature = "emitter")]
pub mod emitter;
pub mod form;
pub mod kv;
pub mod navigation;
pub mod projection;
pub mod shelf;
pub mod view;

pub use book::{Book, BookDraft, BookId, BookStatus, UnknownStatus, ValidBook, ValidationError};
pub use collection::{BookCollection, IdGenerator, DEFAULT_STORAGE_KEY};
pub use config::{ConfigError, ShelfConfig};
#[cfg(feature = "emitter")]
pub use emitter::{ChangeEmitter, CollectionEvent, ListenerId};
pub use form::{BookForm, Submitted};
#[cfg(feature = "fs")]
pub use kv::FileKeyValueStore;
pub use kv::{InMemoryKeyValueStore, JsonSlot, KeyValueStore, KvError};
pub use navigation::{Navigator, Page};
pub use projection::{compare_titles, filter_books, CollationKey, Statistics, StatusShare};
pub use shelf::Shelf;
pub use view::{StatusFilter, ViewState};
