use ulid::{Generator, Ulid};

use crate::book::BookId;

/// Produces ULID-based book ids: a millisecond timestamp plus 80 random bits.
///
/// The generator is monotonic, so ids minted within the same millisecond are
/// still strictly increasing.
pub struct IdGenerator {
    inner: Generator,
}

impl std::fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdGenerator").finish_non_exhaustive()
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    pub fn new() -> Self {
        Self {
            inner: Generator::new(),
        }
    }

    pub fn next_id(&mut self) -> BookId {
        // Overflow only happens after 2^80 ids in one millisecond.
        let ulid = self.inner.generate().unwrap_or_else(|_| Ulid::new());
        BookId::new(ulid.to_string().to_lowercase())
    }
}
