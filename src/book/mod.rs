//! Book records and their ownership status.

mod draft;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use draft::{BookDraft, ValidBook, ValidationError};

/// Opaque unique identifier of a book, assigned once at creation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Ownership status of a book.
///
/// Serialized as `"milik"`, `"baca"` and `"beli"` to stay compatible with
/// collections persisted by earlier versions of the tracker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    #[serde(rename = "milik")]
    Owned,
    #[serde(rename = "baca")]
    Reading,
    #[serde(rename = "beli")]
    Wishlist,
}

impl BookStatus {
    pub const ALL: [BookStatus; 3] = [BookStatus::Owned, BookStatus::Reading, BookStatus::Wishlist];

    /// Persisted wire name.
    pub fn as_str(self) -> &'static str {
        match self {
            BookStatus::Owned => "milik",
            BookStatus::Reading => "baca",
            BookStatus::Wishlist => "beli",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            BookStatus::Owned => "Owned",
            BookStatus::Reading => "Reading",
            BookStatus::Wishlist => "Wishlist",
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string is not a known status name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown book status: {:?}", self.0)
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for BookStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "milik" => Ok(BookStatus::Owned),
            "baca" => Ok(BookStatus::Reading),
            "beli" => Ok(BookStatus::Wishlist),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// A single record in the collection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub status: BookStatus,
}

impl Book {
    pub fn new(
        id: impl Into<BookId>,
        title: impl Into<String>,
        author: impl Into<String>,
        status: BookStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            status,
        }
    }
}
