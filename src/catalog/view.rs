//! Owned snapshots of catalog records.

use crate::catalog::{Availability, Book};
use crate::common::{BookId, PatronId};

/// A point-in-time copy of one book's visible state.
///
/// Unlike [`Book`], this borrows nothing from the catalog and can be held,
/// printed, or compared after the catalog has moved on (or after the book
/// has been deleted). Reservations appear in raw heap order, the same order
/// cancellation reports use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookView {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub availability: Availability,
    pub borrowed_by: Option<PatronId>,
    pub reservations: Vec<PatronId>,
}

impl Book {
    /// Snapshot this record into an owned view.
    pub fn snapshot(&self) -> BookView {
        BookView {
            id: self.id(),
            title: self.title().to_string(),
            author: self.author().to_string(),
            availability: self.availability(),
            borrowed_by: self.borrowed_by(),
            reservations: self.reservations().patrons(),
        }
    }
}
