//! Bounded min-heap of pending reservations.

use crate::common::config::RESERVATION_CAPACITY;
use crate::common::{Error, PatronId, Result};
use crate::reservation::ReservationEntry;

/// A book's waiting list, ordered by urgency.
///
/// The queue is a binary min-heap laid out in an array: the entry at `i`
/// outranks the entries at `2i + 1` and `2i + 2`. The root is the next
/// patron to receive the book. Capacity is fixed at
/// [`RESERVATION_CAPACITY`]; an enrollment against a full queue is
/// rejected without side effects.
///
/// # Example
/// ```
/// use shelfdb::{PatronId, ReservationEntry, ReservationQueue};
///
/// let mut queue = ReservationQueue::new();
/// queue.enroll(ReservationEntry::new(PatronId::new(2), 5, 1)).unwrap();
/// queue.enroll(ReservationEntry::new(PatronId::new(9), 1, 2)).unwrap();
///
/// // Patron 9 asked with the lower priority number, so it dequeues first.
/// assert_eq!(queue.dequeue_min().unwrap().patron(), PatronId::new(9));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReservationQueue {
    entries: Vec<ReservationEntry>,
}

impl ReservationQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Number of pending reservations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no reservations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the queue is at capacity.
    pub fn is_full(&self) -> bool {
        self.entries.len() >= RESERVATION_CAPACITY
    }

    /// Whether `patron` already holds a reservation here.
    ///
    /// Linear scan; the capacity bound keeps it trivially cheap.
    pub fn contains(&self, patron: PatronId) -> bool {
        self.entries.iter().any(|entry| entry.patron() == patron)
    }

    /// Patron ids in raw heap order (not urgency order).
    pub fn patrons(&self) -> Vec<PatronId> {
        self.entries.iter().map(ReservationEntry::patron).collect()
    }

    /// Add a reservation to the queue.
    ///
    /// # Errors
    /// Returns `Error::ReservationsFull` when the queue is at capacity.
    /// The queue is unchanged in that case.
    pub fn enroll(&mut self, entry: ReservationEntry) -> Result<()> {
        if self.is_full() {
            return Err(Error::ReservationsFull);
        }

        self.entries.push(entry);
        self.sift_up(self.entries.len() - 1);
        Ok(())
    }

    /// Remove and return the most urgent reservation.
    ///
    /// The last entry is swapped into the root and sifted down, so the call
    /// is O(log n) with the heap invariant restored on return.
    pub fn dequeue_min(&mut self) -> Option<ReservationEntry> {
        if self.entries.is_empty() {
            return None;
        }

        let last = self.entries.len() - 1;
        self.entries.swap(0, last);
        let min = self.entries.pop();
        if !self.entries.is_empty() {
            self.sift_down(0);
        }
        min
    }

    // ========================================================================
    // Heap maintenance
    // ========================================================================

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.entries[idx].outranks(&self.entries[parent]) {
                break;
            }
            self.entries.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * idx + 1;
            let right = 2 * idx + 2;
            let mut top = idx;

            if left < len && self.entries[left].outranks(&self.entries[top]) {
                top = left;
            }
            if right < len && self.entries[right].outranks(&self.entries[top]) {
                top = right;
            }
            if top == idx {
                break;
            }
            self.entries.swap(idx, top);
            idx = top;
        }
    }
}
