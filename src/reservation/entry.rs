//! A single pending reservation.

use crate::common::PatronId;

/// One patron's place in a book's reservation queue.
///
/// Urgency is decided by `priority` (lower wins) and, between equal
/// priorities, by `sequence` (earlier wins). The sequence number is handed
/// out by the catalog at enrollment time and is unique across the whole
/// catalog, so ties never cascade past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReservationEntry {
    patron: PatronId,
    priority: u32,
    sequence: u64,
}

impl ReservationEntry {
    /// Create a new entry.
    pub fn new(patron: PatronId, priority: u32, sequence: u64) -> Self {
        Self {
            patron,
            priority,
            sequence,
        }
    }

    /// The patron holding this reservation.
    pub fn patron(&self) -> PatronId {
        self.patron
    }

    /// The requested priority (lower is more urgent).
    pub fn priority(&self) -> u32 {
        self.priority
    }

    /// The catalog-wide enrollment sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Whether this entry outranks `other` in the queue.
    ///
    /// The patron id never participates in the comparison.
    pub(crate) fn outranks(&self, other: &ReservationEntry) -> bool {
        (self.priority, self.sequence) < (other.priority, other.sequence)
    }
}
