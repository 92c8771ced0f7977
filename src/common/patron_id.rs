//! Patron identifier type.

use std::fmt;

/// Identifies a library patron.
///
/// Patrons appear as borrowers and as reservation holders. The catalog
/// never stores patron records; the identifier is the whole identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatronId(pub u32);

impl PatronId {
    /// Create a new PatronId.
    #[inline]
    pub fn new(id: u32) -> Self {
        PatronId(id)
    }
}

impl fmt::Display for PatronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Patron({})", self.0)
    }
}
