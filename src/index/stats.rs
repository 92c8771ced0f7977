//! Rebalancing instrumentation for the ordered index.

use std::fmt;

/// Counters tracked by the ordered index.
///
/// `color_flips` is the interesting one: it advances exactly once for each
/// node whose stored color actually changes during a recolor, no matter
/// which rebalancing case asked for the write. Re-asserting a color a node
/// already has counts nothing. The counter is monotonic for the life of
/// the index and is never reset.
///
/// The struct is a plain copyable value; [`LibraryIndex::stats`] hands out
/// a snapshot to display or diff.
///
/// [`LibraryIndex::stats`]: crate::index::LibraryIndex::stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexStats {
    /// Nodes whose stored color changed during rebalancing.
    pub color_flips: u64,

    /// Rotations performed (single rotations; a double counts twice).
    pub rotations: u64,

    /// Successful insertions.
    pub inserts: u64,

    /// Successful removals.
    pub removals: u64,
}

impl IndexStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Display for IndexStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IndexStats {{ flips: {}, rotations: {}, inserts: {}, removals: {} }}",
            self.color_flips, self.rotations, self.inserts, self.removals
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = IndexStats::new();
        assert_eq!(stats.color_flips, 0);
        assert_eq!(stats.rotations, 0);
        assert_eq!(stats.inserts, 0);
        assert_eq!(stats.removals, 0);
    }

    #[test]
    fn test_stats_display() {
        let stats = IndexStats {
            color_flips: 3,
            rotations: 2,
            inserts: 5,
            removals: 1,
        };
        let display = format!("{}", stats);

        assert!(display.contains("flips: 3"));
        assert!(display.contains("rotations: 2"));
        assert!(display.contains("inserts: 5"));
        assert!(display.contains("removals: 1"));
    }
}
