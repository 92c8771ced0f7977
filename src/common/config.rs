//! Configuration constants for shelfdb.

/// Maximum number of pending reservations per book.
///
/// A borrow attempt against a book whose queue already holds this many
/// entries is rejected outright; the attempt leaves no trace in the queue
/// and consumes no sequence number.
pub const RESERVATION_CAPACITY: usize = 20;

/// Suffix appended to a script file's stem to form its report file name.
///
/// `catalog_ops.txt` is reported into `catalog_ops_output_file.txt`, next
/// to the input.
pub const OUTPUT_SUFFIX: &str = "_output_file.txt";
