use serde::Serialize;

use crate::book::{Book, BookStatus};

/// Aggregate counts for the statistics screen.
///
/// `owned + reading + wishlist == total` for every collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub owned: usize,
    pub reading: usize,
    pub wishlist: usize,
}

/// One segment of the status distribution bar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: BookStatus,
    pub count: usize,
    /// `count / total`, in `(0, 1]`.
    pub fraction: f64,
    /// `fraction` as a whole percentage, rounded half up.
    pub percent: u32,
}

impl Statistics {
    pub fn from_books(books: &[Book]) -> Self {
        let mut stats = Statistics {
            total: books.len(),
            ..Statistics::default()
        };
        for book in books {
            match book.status {
                BookStatus::Owned => stats.owned += 1,
                BookStatus::Reading => stats.reading += 1,
                BookStatus::Wishlist => stats.wishlist += 1,
            }
        }
        stats
    }

    pub fn count(&self, status: BookStatus) -> usize {
        match status {
            BookStatus::Owned => self.owned,
            BookStatus::Reading => self.reading,
            BookStatus::Wishlist => self.wishlist,
        }
    }

    /// Share of `status`, or None when no book has it.
    pub fn share(&self, status: BookStatus) -> Option<StatusShare> {
        let count = self.count(status);
        if count == 0 || self.total == 0 {
            return None;
        }
        let fraction = count as f64 / self.total as f64;
        Some(StatusShare {
            status,
            count,
            fraction,
            percent: (fraction * 100.0).round() as u32,
        })
    }

    /// Non-empty status segments in Owned, Reading, Wishlist order.
    ///
    /// Statuses with no books are left out entirely, so an empty collection
    /// has an empty distribution.
    pub fn distribution(&self) -> Vec<StatusShare> {
        BookStatus::ALL
            .iter()
            .filter_map(|status| self.share(*status))
            .collect()
    }
}
