use std::fmt;

use super::BookStatus;

/// Unvalidated book input, as typed into a form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

/// A draft whose title and author are trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidBook {
    title: String,
    author: String,
    status: BookStatus,
}

impl ValidBook {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn status(&self) -> BookStatus {
        self.status
    }

    pub fn into_parts(self) -> (String, String, BookStatus) {
        (self.title, self.author, self.status)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmptyTitle,
    EmptyAuthor,
    EmptyTitleAndAuthor,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One message for every variant; the form shows it inline.
        write!(f, "Title and author must not be empty.")
    }
}

impl std::error::Error for ValidationError {}

impl BookDraft {
    pub fn new(title: impl Into<String>, author: impl Into<String>, status: BookStatus) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            status,
        }
    }

    pub fn validate(&self) -> Result<ValidBook, ValidationError> {
        let title = self.title.trim();
        let author = self.author.trim();

        match (title.is_empty(), author.is_empty()) {
            (true, true) => Err(ValidationError::EmptyTitleAndAuthor),
            (true, false) => Err(ValidationError::EmptyTitle),
            (false, true) => Err(ValidationError::EmptyAuthor),
            (false, false) => Ok(ValidBook {
                title: title.to_string(),
                author: author.to_string(),
                status: self.status,
            }),
        }
    }
}
