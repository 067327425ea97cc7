//! The book collection - single source of truth for every view.
//!
//! [`BookCollection`] owns the ordered list of books, loads it once from a
//! [`KeyValueStore`](crate::KeyValueStore) slot and writes the full list back
//! after every mutation.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf_rust::{BookCollection, BookStatus, InMemoryKeyValueStore};
//!
//! let mut books = BookCollection::open(InMemoryKeyValueStore::new(), "personalBookList");
//! let dune = books.add("Dune", "Frank Herbert", BookStatus::Owned);
//!
//! let mut reading = dune.clone();
//! reading.status = BookStatus::Reading;
//! books.update(reading);
//!
//! books.delete(&dune.id);
//! assert!(books.is_empty());
//! ```

mod id;
mod store;

pub use id::IdGenerator;
pub use store::{BookCollection, DEFAULT_STORAGE_KEY};
