//! Shelf - the application state object handed to the presentation layer.
//!
//! Bundles the persisted collection with the ephemeral view state, the page
//! navigator and the add/edit form. Every mutator runs to completion before
//! returning, and every read re-derives from current state, so "mutate, then
//! redraw" always observes the mutation.

use crate::book::{Book, BookId, BookStatus, ValidationError};
use crate::collection::BookCollection;
use crate::config::ShelfConfig;
use crate::form::{BookForm, Submitted};
use crate::kv::KeyValueStore;
use crate::navigation::{Navigator, Page};
use crate::projection::{filter_books, Statistics};
use crate::view::{StatusFilter, ViewState};

pub struct Shelf<S> {
    books: BookCollection<S>,
    view: ViewState,
    nav: Navigator,
    form: BookForm,
}

impl<S: KeyValueStore> Shelf<S> {
    pub fn open(store: S, config: &ShelfConfig) -> Self {
        Self {
            books: BookCollection::open(store, config.storage_key.clone()),
            view: ViewState::new(),
            nav: Navigator::new(),
            form: BookForm::new(),
        }
    }

    pub fn collection(&self) -> &BookCollection<S> {
        &self.books
    }

    /// Direct access, e.g. to register change listeners.
    pub fn collection_mut(&mut self) -> &mut BookCollection<S> {
        &mut self.books
    }

    pub fn books(&self) -> &[Book] {
        self.books.books()
    }

    pub fn filtered(&self) -> Vec<&Book> {
        filter_books(self.books.books(), &self.view)
    }

    pub fn statistics(&self) -> Statistics {
        Statistics::from_books(self.books.books())
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn page(&self) -> Page {
        self.nav.current()
    }

    pub fn form(&self) -> &BookForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut BookForm {
        &mut self.form
    }

    pub fn add(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        status: BookStatus,
    ) -> Book {
        self.books.add(title, author, status)
    }

    pub fn update(&mut self, book: Book) -> bool {
        self.books.update(book)
    }

    /// Deleting the book being edited also abandons the edit.
    pub fn delete(&mut self, id: &BookId) -> bool {
        if self.form.editing() == Some(id) {
            self.form.cancel();
        }
        self.books.delete(id)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.view.set_status_filter(filter);
    }

    pub fn go_to(&mut self, page: Page) {
        self.nav.go_to(page);
    }

    /// Load the book with `id` into the form. Returns false if unknown.
    pub fn edit(&mut self, id: &BookId) -> bool {
        match self.books.get(id) {
            Some(book) => {
                self.form.edit(book);
                true
            }
            None => false,
        }
    }

    pub fn submit_form(&mut self) -> Result<Submitted, ValidationError> {
        self.form.submit(&mut self.books)
    }

    pub fn cancel_edit(&mut self) {
        self.form.cancel();
    }
}

impl<S> std::fmt::Debug for Shelf<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shelf")
            .field("books", &self.books)
            .field("view", &self.view)
            .field("nav", &self.nav)
            .field("form", &self.form)
            .finish()
    }
}
