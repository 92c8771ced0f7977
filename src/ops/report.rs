//! Report formatting for script transcripts.
//!
//! Every function renders one command's output body without a trailing
//! newline; the runner owns line termination and the separator rule.

use crate::catalog::{BookView, BorrowOutcome, ReturnOutcome};
use crate::common::{BookId, PatronId};

/// Rule printed after every command's output.
pub const SEPARATOR: &str = "---------------------------------------";

/// The six-line block describing one book.
pub fn book_block(view: &BookView) -> String {
    let borrowed_by = match view.borrowed_by {
        Some(patron) => patron.0.to_string(),
        None => "None".to_string(),
    };
    let reservations = view
        .reservations
        .iter()
        .map(|patron| patron.0.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "BookID = {}\nTitle = {}\nAuthor = {}\nAvailability = {}\nBorrowedBy = {}\nReservations = [{}]",
        view.id.0, view.title, view.author, view.availability, borrowed_by, reservations,
    )
}

/// Body for `PrintBook`.
pub fn print_book_report(view: Option<&BookView>) -> String {
    match view {
        Some(view) => book_block(view),
        None => "No book exists.".to_string(),
    }
}

/// Body for `PrintBooks`: blocks separated by a blank line, or a notice
/// when the range is empty.
pub fn range_report(views: &[BookView], lo: BookId, hi: BookId) -> String {
    if views.is_empty() {
        return format!(
            "No books found in library in the range of {} to {}",
            lo.0, hi.0
        );
    }
    join_blocks(views)
}

/// Body for `FindClosestBook`: one block, or two blank-line-separated
/// blocks on a distance tie. Empty on an empty catalog.
pub fn closest_report(views: &[BookView]) -> String {
    join_blocks(views)
}

fn join_blocks(views: &[BookView]) -> String {
    views
        .iter()
        .map(book_block)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Body for `BorrowBook`.
pub fn borrow_report(outcome: BorrowOutcome, patron: PatronId, id: BookId) -> String {
    match outcome {
        BorrowOutcome::NotFound => "Book not found to add reservation".to_string(),
        BorrowOutcome::Lent => format!("Book {} borrowed by Patron {}", id.0, patron.0),
        BorrowOutcome::AlreadyHeldByCaller => {
            format!("Book {} already borrowed by Patron {}", id.0, patron.0)
        }
        BorrowOutcome::AlreadyQueued => {
            format!("Book {} already reserved by Patron {}", id.0, patron.0)
        }
        BorrowOutcome::QueueFull => format!("Reservations for book {} is full", id.0),
        BorrowOutcome::Reserved => format!("Book {} reserved by Patron {}", id.0, patron.0),
    }
}

/// Body for `ReturnBook`. A promotion adds the allotment line after a
/// blank line.
pub fn return_report(outcome: ReturnOutcome, patron: PatronId, id: BookId) -> String {
    match outcome {
        ReturnOutcome::NotFound | ReturnOutcome::NotHeldByCaller => {
            format!("Patron {} never borrowed book {}", patron.0, id.0)
        }
        ReturnOutcome::ReturnedNoSuccessor => {
            format!("Book {} returned by Patron {}", id.0, patron.0)
        }
        ReturnOutcome::ReturnedWithSuccessor(next) => format!(
            "Book {} returned by Patron {}\n\nBook {} allotted to Patron {}",
            id.0, patron.0, id.0, next.0,
        ),
    }
}

/// Body for a successful `DeleteBook`.
pub fn delete_report(id: BookId, cancelled: &[PatronId]) -> String {
    if cancelled.is_empty() {
        return format!("Book {} is no longer available", id.0);
    }
    let patrons = cancelled
        .iter()
        .map(|patron| patron.0.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Book {} is no longer available. Reservations made by Patrons {} have been cancelled!",
        id.0, patrons,
    )
}

/// Body for `ColorFlipCount`.
pub fn flip_report(count: u64) -> String {
    format!("Color Flip Count: {}", count)
}

/// Body for `Quit`.
pub fn quit_report() -> &'static str {
    "Program Terminated!!"
}
