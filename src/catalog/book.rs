//! The book record and its per-book lending state machine.

use std::fmt;

use crate::catalog::{BorrowOutcome, ReturnOutcome};
use crate::common::{BookId, PatronId};
use crate::reservation::{ReservationEntry, ReservationQueue};

/// Whether a book is on the shelf or lent out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// On the shelf; the next borrow succeeds immediately.
    Available,
    /// Lent out (or inserted as unavailable); borrows queue up.
    Borrowed,
}

impl Availability {
    /// Parse the script-level availability flag ("Yes"/"No", any case).
    pub fn parse(flag: &str) -> Option<Self> {
        if flag.eq_ignore_ascii_case("yes") {
            Some(Availability::Available)
        } else if flag.eq_ignore_ascii_case("no") {
            Some(Availability::Borrowed)
        } else {
            None
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => write!(f, "Yes"),
            Availability::Borrowed => write!(f, "No"),
        }
    }
}

/// A single catalog record.
///
/// The id is immutable after construction. Lending state lives entirely on
/// the record: the current holder (if any) and the queue of patrons waiting
/// for it. Tree linkage does not live here; the ordered index wraps records
/// in its own nodes.
#[derive(Debug)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    availability: Availability,
    borrowed_by: Option<PatronId>,
    reservations: ReservationQueue,
}

impl Book {
    /// Create a record with no holder and no reservations.
    pub fn new(id: BookId, title: String, author: String, availability: Availability) -> Self {
        Self {
            id,
            title,
            author,
            availability,
            borrowed_by: None,
            reservations: ReservationQueue::new(),
        }
    }

    /// The record's identifier.
    pub fn id(&self) -> BookId {
        self.id
    }

    /// The book's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The book's author.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Shelf status.
    pub fn availability(&self) -> Availability {
        self.availability
    }

    /// The current holder, if the book is lent out.
    pub fn borrowed_by(&self) -> Option<PatronId> {
        self.borrowed_by
    }

    /// The book's waiting list.
    pub fn reservations(&self) -> &ReservationQueue {
        &self.reservations
    }

    // ========================================================================
    // Lending protocol
    // ========================================================================

    /// Attempt to lend this book to `patron`.
    ///
    /// `sequence` is the catalog's next enrollment number; it is consumed
    /// only when the outcome is [`BorrowOutcome::Reserved`], which the
    /// caller detects to advance its counter.
    pub(crate) fn borrow(
        &mut self,
        patron: PatronId,
        priority: u32,
        sequence: u64,
    ) -> BorrowOutcome {
        if self.availability == Availability::Available {
            self.availability = Availability::Borrowed;
            self.borrowed_by = Some(patron);
            return BorrowOutcome::Lent;
        }

        if self.borrowed_by == Some(patron) {
            return BorrowOutcome::AlreadyHeldByCaller;
        }

        if self.reservations.contains(patron) {
            return BorrowOutcome::AlreadyQueued;
        }

        let entry = ReservationEntry::new(patron, priority, sequence);
        match self.reservations.enroll(entry) {
            Ok(()) => BorrowOutcome::Reserved,
            Err(_) => BorrowOutcome::QueueFull,
        }
    }

    /// Attempt to take this book back from `patron`.
    ///
    /// On success the book either goes to the most urgent queued patron
    /// (staying lent out) or back on the shelf.
    pub(crate) fn give_back(&mut self, patron: PatronId) -> ReturnOutcome {
        if self.borrowed_by != Some(patron) {
            return ReturnOutcome::NotHeldByCaller;
        }

        match self.reservations.dequeue_min() {
            Some(next) => {
                self.borrowed_by = Some(next.patron());
                ReturnOutcome::ReturnedWithSuccessor(next.patron())
            }
            None => {
                self.borrowed_by = None;
                self.availability = Availability::Available;
                ReturnOutcome::ReturnedNoSuccessor
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(availability: Availability) -> Book {
        Book::new(
            BookId::new(1),
            "Dune".to_string(),
            "Herbert".to_string(),
            availability,
        )
    }

    #[test]
    fn test_availability_parse() {
        assert_eq!(Availability::parse("Yes"), Some(Availability::Available));
        assert_eq!(Availability::parse("yes"), Some(Availability::Available));
        assert_eq!(Availability::parse("No"), Some(Availability::Borrowed));
        assert_eq!(Availability::parse("NO"), Some(Availability::Borrowed));
        assert_eq!(Availability::parse("maybe"), None);
    }

    #[test]
    fn test_availability_display() {
        assert_eq!(format!("{}", Availability::Available), "Yes");
        assert_eq!(format!("{}", Availability::Borrowed), "No");
    }

    #[test]
    fn test_borrow_available_book() {
        let mut book = book(Availability::Available);

        assert_eq!(book.borrow(PatronId::new(7), 1, 1), BorrowOutcome::Lent);
        assert_eq!(book.availability(), Availability::Borrowed);
        assert_eq!(book.borrowed_by(), Some(PatronId::new(7)));
        assert!(book.reservations().is_empty());
    }

    #[test]
    fn test_borrow_twice_is_flagged() {
        let mut book = book(Availability::Available);
        book.borrow(PatronId::new(7), 1, 1);

        assert_eq!(
            book.borrow(PatronId::new(7), 1, 2),
            BorrowOutcome::AlreadyHeldByCaller
        );
        assert!(book.reservations().is_empty());
    }

    #[test]
    fn test_borrow_held_book_queues() {
        let mut book = book(Availability::Available);
        book.borrow(PatronId::new(7), 1, 1);

        assert_eq!(book.borrow(PatronId::new(8), 2, 1), BorrowOutcome::Reserved);
        assert_eq!(
            book.borrow(PatronId::new(8), 2, 2),
            BorrowOutcome::AlreadyQueued
        );
        assert_eq!(book.reservations().len(), 1);
    }

    #[test]
    fn test_unavailable_book_with_no_holder_queues() {
        // Inserted as "No": nobody holds it, but it is not on the shelf.
        let mut book = book(Availability::Borrowed);

        assert_eq!(book.borrow(PatronId::new(7), 1, 1), BorrowOutcome::Reserved);
        assert_eq!(book.borrowed_by(), None);
    }

    #[test]
    fn test_give_back_without_holding() {
        let mut book = book(Availability::Available);

        assert_eq!(
            book.give_back(PatronId::new(7)),
            ReturnOutcome::NotHeldByCaller
        );

        book.borrow(PatronId::new(7), 1, 1);
        assert_eq!(
            book.give_back(PatronId::new(8)),
            ReturnOutcome::NotHeldByCaller
        );
        assert_eq!(book.borrowed_by(), Some(PatronId::new(7)));
    }

    #[test]
    fn test_give_back_with_empty_queue() {
        let mut book = book(Availability::Available);
        book.borrow(PatronId::new(7), 1, 1);

        assert_eq!(
            book.give_back(PatronId::new(7)),
            ReturnOutcome::ReturnedNoSuccessor
        );
        assert_eq!(book.availability(), Availability::Available);
        assert_eq!(book.borrowed_by(), None);
    }

    #[test]
    fn test_give_back_promotes_most_urgent() {
        let mut book = book(Availability::Available);
        book.borrow(PatronId::new(7), 1, 1);
        book.borrow(PatronId::new(8), 5, 1);
        book.borrow(PatronId::new(9), 2, 2);

        assert_eq!(
            book.give_back(PatronId::new(7)),
            ReturnOutcome::ReturnedWithSuccessor(PatronId::new(9))
        );
        assert_eq!(book.availability(), Availability::Borrowed);
        assert_eq!(book.borrowed_by(), Some(PatronId::new(9)));
        assert_eq!(book.reservations().len(), 1);
    }
}
