//! Common types and utilities shared across shelfdb.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - Identifiers (BookId, PatronId)

pub mod config;
pub mod error;
mod book_id;
mod patron_id;

pub use book_id::BookId;
pub use error::{Error, Result};
pub use patron_id::PatronId;
