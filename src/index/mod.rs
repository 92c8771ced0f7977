//! The ordered book index.
//!
//! A red-black tree over an arena of nodes, keyed by book id, with
//! instrumented rebalancing and the catalog's query walkers:
//! - [`LibraryIndex`] - insert/remove/search plus the balancing machinery
//! - [`IndexStats`] - flip, rotation and churn counters
//! - range and nearest-key queries (see `query`)

mod arena;
mod node;
mod query;
mod stats;
mod tree;

pub use stats::IndexStats;
pub use tree::LibraryIndex;
