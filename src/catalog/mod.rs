//! Catalog layer: book records, lending outcomes, and the facade.

mod book;
mod library;
mod outcome;
mod shared;
mod view;

pub use book::{Availability, Book};
pub use library::LibraryCatalog;
pub use outcome::{BorrowOutcome, ReturnOutcome};
pub use shared::SharedCatalog;
pub use view::BookView;
