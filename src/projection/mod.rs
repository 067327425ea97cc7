//! Derived views - pure projections over the collection and view state.
//!
//! Nothing here is stored. Every function recomputes from its inputs, so a
//! caller that redraws after each mutation always sees post-mutation data.
//!
//! ## Example
//!
//! ```ignore
//! use bookshelf_rust::{filter_books, Statistics, StatusFilter, ViewState};
//!
//! let mut view = ViewState::new();
//! view.set_status_filter(StatusFilter::Reading);
//!
//! let visible = filter_books(collection.books(), &view);
//! let stats = Statistics::from_books(collection.books());
//! for segment in stats.distribution() {
//!     println!("{}: {}%", segment.status, segment.percent);
//! }
//! ```

mod collate;
mod filtered;
mod stats;

pub use collate::{compare_titles, CollationKey};
pub use filtered::filter_books;
pub use stats::{Statistics, StatusShare};
