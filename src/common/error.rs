//! Error types for shelfdb.

use thiserror::Error;

use crate::common::BookId;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in shelfdb.
///
/// Only genuine failures live here. Borrow and return attempts that merely
/// bounce off the protocol (book already held, queue full, and so on) are
/// reported as outcome values, not errors, because the catalog stays fully
/// consistent after them.
#[derive(Debug, Error)]
pub enum Error {
    /// Insert of an identifier the catalog already holds.
    ///
    /// The existing record is untouched; the rejected one is dropped.
    #[error("{0} already exists in the catalog")]
    DuplicateBook(BookId),

    /// Delete or lookup of an identifier the catalog does not hold.
    #[error("{0} not found in the catalog")]
    BookNotFound(BookId),

    /// A reservation queue is at capacity.
    #[error("reservation queue is at capacity")]
    ReservationsFull,

    /// I/O error from script file operations.
    ///
    /// This wraps `std::io::Error` from file read/write operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A script line that does not parse as any known command.
    #[error("unrecognized command: {0}")]
    BadCommand(String),
}
