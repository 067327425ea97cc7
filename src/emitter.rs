//! Synchronous change notifications for the book collection.
//!
//! Listeners run inline, in registration order, after the mutation has been
//! applied and persisted. A presentation layer registers one listener that
//! re-derives its views and redraws.

use crate::book::{Book, BookId};

/// What changed in the collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CollectionEvent {
    Added(Book),
    Updated(Book),
    Deleted(BookId),
}

impl CollectionEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            CollectionEvent::Added(_) => "BookAdded",
            CollectionEvent::Updated(_) => "BookUpdated",
            CollectionEvent::Deleted(_) => "BookDeleted",
        }
    }
}

/// Handle returned by [`ChangeEmitter::on`], used to unregister.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&CollectionEvent)>;

#[derive(Default)]
pub struct ChangeEmitter {
    listeners: Vec<(ListenerId, Listener)>,
    next_id: u64,
}

impl ChangeEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&CollectionEvent) + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn emit(&self, event: &CollectionEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }

    /// Returns true if a listener was registered under `id`.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}

impl std::fmt::Debug for ChangeEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeEmitter")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
