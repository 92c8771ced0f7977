//! The library catalog facade.
//!
//! [`LibraryCatalog`] is the one front door: it owns the ordered index and
//! the catalog-wide reservation sequence counter, and exposes the whole
//! operation surface - record management, range and nearest queries, the
//! borrow/return protocol, and the rebalancing counters.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                LibraryCatalog                 │
//! │  ┌─────────────────────┐  ┌────────────────┐  │
//! │  │ index: LibraryIndex │  │ next_sequence  │  │
//! │  │  (red-black tree,   │  │ (u64, advances │  │
//! │  │   books + queues)   │  │  per enrollment│  │
//! │  └─────────────────────┘  └────────────────┘  │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Mutators take `&mut self`; the type is single-threaded by construction.
//! [`SharedCatalog`](crate::catalog::SharedCatalog) adds the coarse lock
//! for hosts that need one.

use tracing::debug;

use crate::catalog::{Availability, Book, BookView, BorrowOutcome, ReturnOutcome};
use crate::common::{BookId, PatronId, Result};
use crate::index::{IndexStats, LibraryIndex};

/// In-memory library catalog.
///
/// # Example
/// ```
/// use shelfdb::{Availability, BookId, BorrowOutcome, LibraryCatalog, PatronId};
///
/// let mut catalog = LibraryCatalog::new();
/// catalog
///     .insert_book(
///         BookId::new(1),
///         "Dune".to_string(),
///         "Herbert".to_string(),
///         Availability::Available,
///     )
///     .unwrap();
///
/// let outcome = catalog.borrow_book(PatronId::new(7), BookId::new(1), 1);
/// assert_eq!(outcome, BorrowOutcome::Lent);
/// ```
#[derive(Debug)]
pub struct LibraryCatalog {
    index: LibraryIndex,
    next_sequence: u64,
}

impl Default for LibraryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LibraryCatalog {
    /// Create an empty catalog.
    ///
    /// Sequence numbers start at 1; 0 never appears in a queue.
    pub fn new() -> Self {
        Self {
            index: LibraryIndex::new(),
            next_sequence: 1,
        }
    }

    /// Number of books in the catalog.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the catalog holds no books.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ========================================================================
    // Record management
    // ========================================================================

    /// Add a book to the catalog.
    ///
    /// # Errors
    /// Returns `Error::DuplicateBook` if the id is taken; the existing
    /// record is untouched.
    pub fn insert_book(
        &mut self,
        id: BookId,
        title: String,
        author: String,
        availability: Availability,
    ) -> Result<()> {
        self.index.insert(Book::new(id, title, author, availability))?;
        debug!(book_id = %id, "book added");
        Ok(())
    }

    /// Remove a book, cancelling its pending reservations.
    ///
    /// Returns the cancelled patrons in queue (heap) order. The current
    /// holder, if any, is not part of the queue and is simply dropped with
    /// the record.
    ///
    /// # Errors
    /// Returns `Error::BookNotFound` if the id is absent.
    pub fn delete_book(&mut self, id: BookId) -> Result<Vec<PatronId>> {
        let book = self.index.remove(id)?;
        let cancelled = book.reservations().patrons();
        debug!(book_id = %id, cancelled = cancelled.len(), "book deleted");
        Ok(cancelled)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Snapshot one book.
    pub fn book(&self, id: BookId) -> Option<BookView> {
        self.index.get(id).map(Book::snapshot)
    }

    /// Snapshot every book with `lo <= id <= hi`, ascending.
    pub fn books_in_range(&self, lo: BookId, hi: BookId) -> Vec<BookView> {
        self.index
            .books_in_range(lo, hi)
            .into_iter()
            .map(Book::snapshot)
            .collect()
    }

    /// Snapshot the book(s) nearest to `id` along the search path,
    /// ascending; two on a distance tie.
    pub fn nearest_books(&self, id: BookId) -> Vec<BookView> {
        self.index
            .nearest_books(id)
            .into_iter()
            .map(Book::snapshot)
            .collect()
    }

    // ========================================================================
    // Lending
    // ========================================================================

    /// Borrow `id` for `patron`, or join its reservation queue.
    ///
    /// `priority` only matters when the attempt queues (lower is more
    /// urgent). The sequence counter advances only when an enrollment
    /// actually happens, so rejected attempts never burn a number.
    pub fn borrow_book(&mut self, patron: PatronId, id: BookId, priority: u32) -> BorrowOutcome {
        let Some(book) = self.index.get_mut(id) else {
            return BorrowOutcome::NotFound;
        };

        let outcome = book.borrow(patron, priority, self.next_sequence);
        if outcome == BorrowOutcome::Reserved {
            self.next_sequence += 1;
        }
        debug!(book_id = %id, patron = %patron, ?outcome, "borrow attempt");
        outcome
    }

    /// Return `id` from `patron`.
    ///
    /// On success the book goes to the most urgent queued patron, or back
    /// on the shelf when nobody waits.
    pub fn return_book(&mut self, patron: PatronId, id: BookId) -> ReturnOutcome {
        let Some(book) = self.index.get_mut(id) else {
            return ReturnOutcome::NotFound;
        };

        let outcome = book.give_back(patron);
        debug!(book_id = %id, patron = %patron, ?outcome, "return attempt");
        outcome
    }

    // ========================================================================
    // Instrumentation
    // ========================================================================

    /// Total recolor events since the catalog was created.
    ///
    /// Counts every node whose stored color changed during rebalancing,
    /// across all inserts and deletes. Monotonic, never reset.
    pub fn color_flip_count(&self) -> u64 {
        self.index.stats().color_flips
    }

    /// Snapshot of all index counters.
    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }
}
