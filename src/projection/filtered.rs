use crate::book::Book;
use crate::view::ViewState;

use super::collate::CollationKey;

/// The management screen's list: books passing the status filter and the
/// search term, sorted by title.
///
/// The search is a case-insensitive substring match on title OR author; an
/// empty term matches everything. Books with equal titles keep their
/// collection order.
pub fn filter_books<'a>(books: &'a [Book], view: &ViewState) -> Vec<&'a Book> {
    let filter = view.status_filter();
    let needle = view.search_term().to_lowercase();

    let mut visible: Vec<&Book> = books
        .iter()
        .filter(|book| filter.matches(book.status))
        .filter(|book| matches_search(book, &needle))
        .collect();

    visible.sort_by_cached_key(|book| CollationKey::new(&book.title));
    visible
}

/// `needle` must already be lowercase.
fn matches_search(book: &Book, needle: &str) -> bool {
    needle.is_empty()
        || book.title.to_lowercase().contains(needle)
        || book.author.to_lowercase().contains(needle)
}
