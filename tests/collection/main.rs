//! Integration tests for the collection store and the views derived from it.


use std::cmp::Ordering;
use std::collections::HashSet;

use bookshelf_rust::{
    compare_titles, filter_books, Book, BookStatus, InMemoryKeyValueStore, Statistics,
    StatusFilter, ViewState,
};
use fixtures::{open, random_collection, Lcg, SEARCHES};

#[test]
fn add_grows_by_one_with_fresh_id() {
    for seed in 0..10 {
        let mut books = random_collection(seed, seed as usize * 3);
        let before: HashSet<_> = books.books().iter().map(|b| b.id.clone()).collect();
        let len = books.len();

        let added = books.add("New", "Author", BookStatus::Wishlist);

        assert_eq!(books.len(), len + 1);
        assert!(!before.contains(&added.id));
        assert_eq!(books.books().last(), Some(&added));
    }
}

#[test]
fn ids_stay_unique_across_many_adds() {
    let books = random_collection(7, 500);
    let ids: HashSet<_> = books.books().iter().map(|b| b.id.clone()).collect();
    assert_eq!(ids.len(), 500);
}

#[test]
fn update_touches_only_the_target() {
    let mut books = random_collection(3, 12);

    for index in 0..books.len() {
        let before = books.books().to_vec();
        let edited = Book {
            title: format!("{} (2nd ed.)", before[index].title),
            status: BookStatus::Reading,
            ..before[index].clone()
        };
        assert!(books.update(edited.clone()));

        assert_eq!(books.len(), before.len());
        for (j, book) in books.books().iter().enumerate() {
            if j == index {
                assert_eq!(book, &edited);
            } else {
                assert_eq!(book, &before[j]);
            }
        }
    }
}

#[test]
fn delete_present_and_absent() {
    let mut books = random_collection(11, 6);
    let target = books.books()[2].clone();

    assert!(books.delete(&target.id));
    assert_eq!(books.len(), 5);
    assert!(books.books().iter().all(|b| b.id != target.id));

    let after = books.books().to_vec();
    assert!(!books.delete(&target.id));
    assert_eq!(books.books(), after.as_slice());
}

#[test]
fn filtered_list_is_exactly_the_matching_books_in_title_order() {
    let filters = [
        StatusFilter::All,
        StatusFilter::Owned,
        StatusFilter::Reading,
        StatusFilter::Wishlist,
    ];

    for seed in 0..20 {
        let books = random_collection(seed, 15);
        for filter in filters {
            for term in SEARCHES {
                let mut view = ViewState::new();
                view.set_status_filter(filter);
                view.set_search_term(term);

                let out = filter_books(books.books(), &view);

                let needle = term.to_lowercase();
                let expected: Vec<&Book> = books
                    .books()
                    .iter()
                    .filter(|b| filter.matches(b.status))
                    .filter(|b| {
                        needle.is_empty()
                            || b.title.to_lowercase().contains(&needle)
                            || b.author.to_lowercase().contains(&needle)
                    })
                    .collect();

                assert_eq!(out.len(), expected.len());
                for book in &expected {
                    assert_eq!(out.iter().filter(|b| b.id == book.id).count(), 1);
                }
                for pair in out.windows(2) {
                    assert_ne!(
                        compare_titles(&pair[0].title, &pair[1].title),
                        Ordering::Greater
                    );
                }
            }
        }
    }
}

#[test]
fn statistics_always_add_up() {
    assert_eq!(Statistics::from_books(&[]), Statistics::default());

    let mut rng = Lcg::new(99);
    let mut books = open(&InMemoryKeyValueStore::new());
    for _ in 0..50 {
        if books.is_empty() || rng.next(3) > 0 {
            let status = rng.status();
            books.add("T", "A", status);
        } else {
            let id = books.books()[rng.next(books.len())].id.clone();
            books.delete(&id);
        }
        let stats = Statistics::from_books(books.books());
        assert_eq!(stats.total, books.len());
        assert_eq!(stats.owned + stats.reading + stats.wishlist, stats.total);
    }
}

#[cfg(feature = "emitter")]
#[test]
fn listener_redraws_from_post_mutation_state() {
    use bookshelf_rust::CollectionEvent;
    use std::cell::RefCell;
    use std::rc::Rc;

    let store = InMemoryKeyValueStore::new();
    let mut books = open(&store);

    // The listener re-derives from what was persisted, as a UI reloading
    // its view model would.
    let frames: Rc<RefCell<Vec<usize>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&frames);
    let reader = store.clone();
    books.on_change(move |event| {
        let reopened = open(&reader);
        let total = Statistics::from_books(reopened.books()).total;
        if let CollectionEvent::Deleted(id) = event {
            assert!(reopened.get(id).is_none());
        }
        sink.borrow_mut().push(total);
    });

    let a = books.add("A", "X", BookStatus::Owned);
    books.add("B", "Y", BookStatus::Reading);
    books.delete(&a.id);

    assert_eq!(*frames.borrow(), vec![1, 2, 1]);
}
