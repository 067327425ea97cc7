//! Add/edit form state.
//!
//! The form is the validation boundary: it trims and checks title and author
//! before anything reaches the collection, and keeps the last validation
//! error around for inline display.

use log::debug;

use crate::book::{Book, BookDraft, BookId, BookStatus, ValidationError};
use crate::collection::BookCollection;
use crate::kv::KeyValueStore;

/// Outcome of a successful [`BookForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submitted {
    Added(Book),
    Updated(Book),
    /// The book being edited was removed before the form was submitted;
    /// nothing was written.
    Missing(Book),
}

impl Submitted {
    pub fn book(&self) -> &Book {
        match self {
            Submitted::Added(book) | Submitted::Updated(book) | Submitted::Missing(book) => {
                book
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
    editing: Option<BookId>,
    error: Option<ValidationError>,
}

impl BookForm {
    /// Blank form in add mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefill from `book` and switch to edit mode.
    pub fn edit(&mut self, book: &Book) {
        self.title = book.title.clone();
        self.author = book.author.clone();
        self.status = book.status;
        self.editing = Some(book.id.clone());
        self.error = None;
    }

    /// Drop any edit in progress and return to a blank add form.
    pub fn cancel(&mut self) {
        *self = Self::new();
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing(&self) -> Option<&BookId> {
        self.editing.as_ref()
    }

    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn draft(&self) -> BookDraft {
        BookDraft::new(self.title.clone(), self.author.clone(), self.status)
    }

    /// Validate and write the form into `books`.
    ///
    /// On a validation error the error is recorded, the fields are kept for
    /// correction and the collection is untouched. On success the form resets
    /// to a blank add form.
    pub fn submit<S: KeyValueStore>(
        &mut self,
        books: &mut BookCollection<S>,
    ) -> Result<Submitted, ValidationError> {
        self.error = None;

        let valid = match self.draft().validate() {
            Ok(valid) => valid,
            Err(e) => {
                debug!("form rejected: {:?}", e);
                self.error = Some(e);
                return Err(e);
            }
        };

        let submitted = match self.editing.take() {
            Some(id) => {
                let (title, author, status) = valid.into_parts();
                let book = Book {
                    id,
                    title,
                    author,
                    status,
                };
                if books.update(book.clone()) {
                    Submitted::Updated(book)
                } else {
                    debug!("edited book {} no longer exists", book.id);
                    Submitted::Missing(book)
                }
            }
            None => Submitted::Added(books.add_valid(valid)),
        };

        self.cancel();
        Ok(submitted)
    }
}
