//! Book identifier type.

use std::fmt;

/// Identifies a book in the catalog.
///
/// Identifiers are assigned by the caller and never change after insertion.
/// The ordered index sorts records by this value.
///
/// # Example
/// ```
/// use shelfdb::BookId;
///
/// let id = BookId::new(42);
/// assert_eq!(id.0, 42);
/// assert!(BookId::new(1) < BookId::new(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId(pub u32);

impl BookId {
    /// Create a new BookId.
    #[inline]
    pub fn new(id: u32) -> Self {
        BookId(id)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_id_new() {
        let id = BookId::new(42);
        assert_eq!(id.0, 42);
    }

    #[test]
    fn test_book_id_ordering() {
        assert!(BookId::new(1) < BookId::new(2));
        assert!(BookId::new(5) > BookId::new(3));
    }

    #[test]
    fn test_book_id_display() {
        assert_eq!(format!("{}", BookId::new(42)), "Book(42)");
    }
}
