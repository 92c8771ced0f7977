//! Per-book reservation queues.
//!
//! When a borrow attempt finds a book already lent out, the patron joins
//! the book's [`ReservationQueue`]: a bounded array-backed min-heap keyed
//! by `(priority, sequence)`. Returning the book hands it to the queue's
//! most urgent entry.

mod entry;
mod queue;

pub use entry::ReservationEntry;
pub use queue::ReservationQueue;
