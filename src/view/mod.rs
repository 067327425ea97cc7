//! Ephemeral view state: the search box and the status filter.

use std::fmt;
use std::str::FromStr;

use crate::book::{BookStatus, UnknownStatus};

/// Status filter of the management screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Owned,
    Reading,
    Wishlist,
}

impl StatusFilter {
    pub fn matches(self, status: BookStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Owned => status == BookStatus::Owned,
            StatusFilter::Reading => status == BookStatus::Reading,
            StatusFilter::Wishlist => status == BookStatus::Wishlist,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Owned => BookStatus::Owned.as_str(),
            StatusFilter::Reading => BookStatus::Reading.as_str(),
            StatusFilter::Wishlist => BookStatus::Wishlist.as_str(),
        }
    }
}

impl From<BookStatus> for StatusFilter {
    fn from(status: BookStatus) -> Self {
        match status {
            BookStatus::Owned => StatusFilter::Owned,
            BookStatus::Reading => StatusFilter::Reading,
            BookStatus::Wishlist => StatusFilter::Wishlist,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(StatusFilter::All);
        }
        s.parse::<BookStatus>().map(StatusFilter::from)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current search term and status filter. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    search_term: String,
    status_filter: StatusFilter,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn status_filter(&self) -> StatusFilter {
        self.status_filter
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }
}
