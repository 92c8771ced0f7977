//! Typed results of the borrow and return protocol.

use crate::common::PatronId;

/// What happened to a borrow attempt.
///
/// Exactly one variant applies per call, decided in declaration order:
/// existence first, then availability, then the caller's standing with the
/// book, then queue capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// No book with the requested id exists.
    NotFound,

    /// The book was available and is now lent to the caller.
    Lent,

    /// The caller already holds this book; nothing changed.
    AlreadyHeldByCaller,

    /// The caller is already in this book's reservation queue; nothing
    /// changed.
    AlreadyQueued,

    /// The reservation queue is at capacity; the attempt left no trace.
    QueueFull,

    /// The book is held by someone else; the caller joined the queue.
    Reserved,
}

/// What happened to a return attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// No book with the requested id exists.
    NotFound,

    /// The caller is not the current holder (including books that are on
    /// the shelf, and callers who are merely queued); nothing changed.
    NotHeldByCaller,

    /// The book came back and the shelf has it: no reservations were
    /// pending.
    ReturnedNoSuccessor,

    /// The book came back and went straight to the queue's most urgent
    /// patron, who now holds it.
    ReturnedWithSuccessor(PatronId),
}
