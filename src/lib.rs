//! ShelfDB - A library catalog engine with a red-black ordered index and
//! priority reservations.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                         ShelfDB                         │
//! ├─────────────────────────────────────────────────────────┤
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │               Script Layer (ops/)                 │  │
//! │  │        Command parser → Runner → Reports          │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                           ↓                             │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │             Catalog Layer (catalog/)              │  │
//! │  │   LibraryCatalog + Book + borrow/return states    │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                           ↓                             │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │               Index Layer (index/)                │  │
//! │  │   Red-black LibraryIndex + node arena + queries   │  │
//! │  └───────────────────────────────────────────────────┘  │
//! │                           ↓                             │
//! │  ┌───────────────────────────────────────────────────┐  │
//! │  │         Reservation Layer (reservation/)          │  │
//! │  │      Bounded min-heap of ReservationEntry         │  │
//! │  └───────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (BookId, PatronId, Error, config)
//! - [`reservation`] - Per-book bounded priority queues
//! - [`index`] - The red-black tree over book records
//! - [`catalog`] - Book records, lending outcomes, and the facade
//! - [`ops`] - Script parsing, execution, and report formatting
//!
//! # Quick Start
//! ```
//! use shelfdb::{Availability, BookId, BorrowOutcome, LibraryCatalog, PatronId};
//!
//! let mut catalog = LibraryCatalog::new();
//! catalog
//!     .insert_book(
//!         BookId::new(1),
//!         "Dune".to_string(),
//!         "Herbert".to_string(),
//!         Availability::Available,
//!     )
//!     .unwrap();
//!
//! assert_eq!(
//!     catalog.borrow_book(PatronId::new(7), BookId::new(1), 1),
//!     BorrowOutcome::Lent,
//! );
//! assert_eq!(catalog.books_in_range(BookId::new(1), BookId::new(9)).len(), 1);
//! ```

// Core modules
pub mod catalog;
pub mod common;
pub mod index;
pub mod ops;
pub mod reservation;

// Re-export commonly used items at crate root for convenience
pub use common::config::RESERVATION_CAPACITY;
pub use common::{BookId, Error, PatronId, Result};

pub use catalog::{
    Availability, Book, BookView, BorrowOutcome, LibraryCatalog, ReturnOutcome, SharedCatalog,
};
pub use index::{IndexStats, LibraryIndex};
pub use reservation::{ReservationEntry, ReservationQueue};
