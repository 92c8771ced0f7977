//! Thread-safe wrapper around [`LibraryCatalog`].
//!
//! Every catalog operation touches the tree and the sequence counter, so
//! callers take one exclusive lock per call. `parking_lot` supplies the
//! non-poisoning guards.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::catalog::LibraryCatalog;

/// A cloneable handle to a catalog shared across threads.
///
/// # Example
/// ```
/// use shelfdb::{Availability, BookId, SharedCatalog};
///
/// let shared = SharedCatalog::new();
/// shared
///     .lock()
///     .insert_book(
///         BookId::new(1),
///         "Dune".to_string(),
///         "Herbert".to_string(),
///         Availability::Available,
///     )
///     .unwrap();
/// assert_eq!(shared.lock().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedCatalog {
    inner: Arc<Mutex<LibraryCatalog>>,
}

impl SharedCatalog {
    /// Wrap a fresh empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(LibraryCatalog::new())),
        }
    }

    /// Lock the catalog for a batch of operations.
    ///
    /// Hold the guard across related calls (say a borrow and the check
    /// after it) to make the batch atomic.
    pub fn lock(&self) -> MutexGuard<'_, LibraryCatalog> {
        self.inner.lock()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;
    use crate::catalog::{Availability, BorrowOutcome};
    use crate::common::{BookId, PatronId};

    #[test]
    fn test_concurrent_borrowers_agree_on_one_holder() {
        const PATRONS: u32 = 8;

        let shared = SharedCatalog::new();
        shared
            .lock()
            .insert_book(
                BookId::new(1),
                "contended".to_string(),
                "author".to_string(),
                Availability::Available,
            )
            .unwrap();

        let mut handles = Vec::new();
        for patron in 0..PATRONS {
            let shared_clone = shared.clone();
            handles.push(thread::spawn(move || {
                shared_clone
                    .lock()
                    .borrow_book(PatronId::new(patron), BookId::new(1), 1)
            }));
        }

        let outcomes: Vec<BorrowOutcome> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        let lent = outcomes
            .iter()
            .filter(|outcome| **outcome == BorrowOutcome::Lent)
            .count();
        let reserved = outcomes
            .iter()
            .filter(|outcome| **outcome == BorrowOutcome::Reserved)
            .count();
        assert_eq!(lent, 1);
        assert_eq!(reserved, PATRONS as usize - 1);

        let catalog = shared.lock();
        let view = catalog.book(BookId::new(1)).unwrap();
        assert_eq!(view.reservations.len(), PATRONS as usize - 1);
    }

    #[test]
    fn test_clone_shares_state() {
        let shared = SharedCatalog::new();
        let alias = shared.clone();

        shared
            .lock()
            .insert_book(
                BookId::new(7),
                "shared".to_string(),
                "author".to_string(),
                Availability::Available,
            )
            .unwrap();

        assert_eq!(alias.lock().len(), 1);
        assert!(alias.lock().book(BookId::new(7)).is_some());
    }
}
