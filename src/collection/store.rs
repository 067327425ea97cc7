use log::{debug, warn};

use crate::book::{Book, BookId, BookStatus, ValidBook};
#[cfg(feature = "emitter")]
use crate::emitter::{ChangeEmitter, CollectionEvent, ListenerId};
use crate::kv::{JsonSlot, KeyValueStore};

use super::IdGenerator;

/// Storage key the collection is persisted under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "personalBookList";

/// Ordered, persisted list of books.
///
/// Every mutator writes the entire list through the [`JsonSlot`] before
/// returning. A failed write is logged by the slot and the in-memory list
/// keeps the change.
pub struct BookCollection<S> {
    slot: JsonSlot<S>,
    key: String,
    books: Vec<Book>,
    ids: IdGenerator,
    #[cfg(feature = "emitter")]
    emitter: ChangeEmitter,
}

impl<S: KeyValueStore> BookCollection<S> {
    /// Load the collection stored under `key`, or start empty if it is absent
    /// or unreadable.
    pub fn open(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let slot = JsonSlot::new(store);
        let books: Vec<Book> = slot.load(&key, Vec::new());
        debug!("loaded {} books from \"{}\"", books.len(), key);

        Self {
            slot,
            key,
            books,
            ids: IdGenerator::new(),
            #[cfg(feature = "emitter")]
            emitter: ChangeEmitter::new(),
        }
    }

    pub fn storage_key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        self.slot.store()
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: &BookId) -> Option<&Book> {
        self.books.iter().find(|b| &b.id == id)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Append a new book with a freshly generated id.
    ///
    /// Title and author are stored as given; validate them first (see
    /// [`BookDraft`](crate::BookDraft)).
    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        status: BookStatus,
    ) -> Book {
        let book = Book {
            id: self.fresh_id(),
            title: title.into(),
            author: author.into(),
            status,
        };
        self.books.push(book.clone());
        self.persist();

        #[cfg(feature = "emitter")]
        self.emitter.emit(&CollectionEvent::Added(book.clone()));

        book
    }

    pub fn add_valid(&mut self, valid: ValidBook) -> Book {
        let (title, author, status) = valid.into_parts();
        self.add(title, author, status)
    }

    /// Replace the book with the same id, keeping its position.
    ///
    /// Returns false (and changes nothing) if no such book exists.
    pub fn update(&mut self, book: Book) -> bool {
        let replaced = match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(existing) => {
                *existing = book.clone();
                true
            }
            None => {
                debug!("update ignored, no book with id {}", book.id);
                false
            }
        };
        self.persist();

        #[cfg(feature = "emitter")]
        {
            if replaced {
                self.emitter.emit(&CollectionEvent::Updated(book));
            }
        }

        replaced
    }

    /// Remove the book with `id`. Returns false if it was not present.
    pub fn delete(&mut self, id: &BookId) -> bool {
        let before = self.books.len();
        self.books.retain(|b| &b.id != id);
        let removed = self.books.len() != before;
        if !removed {
            debug!("delete ignored, no book with id {}", id);
        }
        self.persist();

        #[cfg(feature = "emitter")]
        {
            if removed {
                self.emitter.emit(&CollectionEvent::Deleted(id.clone()));
            }
        }

        removed
    }

    /// Register a listener that runs after every effective mutation.
    #[cfg(feature = "emitter")]
    pub fn on_change<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&CollectionEvent) + 'static,
    {
        self.emitter.on(listener)
    }

    #[cfg(feature = "emitter")]
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.emitter.remove_listener(id)
    }

    fn fresh_id(&mut self) -> BookId {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
            warn!("generated id {} already in use, retrying", id);
        }
    }

    fn persist(&self) {
        if !self.slot.save(&self.key, &self.books) {
            warn!(
                "collection change kept in memory only; {} books not persisted",
                self.books.len()
            );
        }
    }
}

impl<S> std::fmt::Debug for BookCollection<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BookCollection")
            .field("key", &self.key)
            .field("books", &self.books)
            .finish_non_exhaustive()
    }
}
