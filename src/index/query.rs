//! Read-only queries over the ordered index.
//!
//! Two walkers live here, both deliberately simple:
//!
//! - [`LibraryIndex::books_in_range`] visits the whole tree in order and
//!   filters, rather than pruning subtrees by the bounds. The output is
//!   ascending for free.
//! - [`LibraryIndex::nearest_books`] descends one root-to-absence search
//!   path, keeping every path node at the smallest distance seen. Nothing
//!   off the path is ever examined; the walk leans on the search path
//!   bracketing the target between its in-order neighbors. An exact hit
//!   wins alone and stops the walk.

use crate::catalog::Book;
use crate::common::BookId;
use crate::index::arena::NodeId;
use crate::index::LibraryIndex;

fn distance(a: BookId, b: BookId) -> u32 {
    a.0.abs_diff(b.0)
}

impl LibraryIndex {
    /// All books with `lo <= id <= hi`, ascending by id.
    ///
    /// Reversed bounds produce an empty result. The traversal is always
    /// full, so cost is O(n) regardless of how narrow the range is.
    pub fn books_in_range(&self, lo: BookId, hi: BookId) -> Vec<&Book> {
        let mut hits = Vec::new();
        self.collect_in_range(self.root_id(), lo, hi, &mut hits);
        hits
    }

    fn collect_in_range<'a>(
        &'a self,
        node: Option<NodeId>,
        lo: BookId,
        hi: BookId,
        hits: &mut Vec<&'a Book>,
    ) {
        let Some(node) = node else {
            return;
        };
        self.collect_in_range(self.left(node), lo, hi, hits);
        let book = self.book_at(node);
        if book.id() >= lo && book.id() <= hi {
            hits.push(book);
        }
        self.collect_in_range(self.right(node), lo, hi, hits);
    }

    /// The books nearest to `id` along the search path, ascending by id.
    ///
    /// The walk starts at the root and follows the ordinary search
    /// direction for `id` until it runs off the tree. A strictly closer
    /// node replaces the candidate set; an equally close node joins it; a
    /// node holding `id` itself becomes the sole answer immediately. Ties
    /// can therefore return two books (one on each side of `id`).
    ///
    /// Empty index: empty result.
    pub fn nearest_books(&self, id: BookId) -> Vec<&Book> {
        let Some(root) = self.root_id() else {
            return Vec::new();
        };

        let mut best = distance(self.book_at(root).id(), id);
        let mut hits: Vec<NodeId> = Vec::new();
        let mut cursor = Some(root);

        while let Some(node) = cursor {
            let node_id = self.book_at(node).id();
            if node_id == id {
                hits.clear();
                hits.push(node);
                break;
            }

            let d = distance(node_id, id);
            if d < best {
                best = d;
                hits.clear();
                hits.push(node);
            } else if d == best {
                hits.push(node);
            }

            cursor = if id < node_id {
                self.left(node)
            } else {
                self.right(node)
            };
        }

        let mut books: Vec<&Book> = hits.into_iter().map(|node| self.book_at(node)).collect();
        books.sort_unstable_by_key(|book| book.id());
        books
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{Availability, Book};
    use crate::common::BookId;
    use crate::index::LibraryIndex;

    fn book(id: u32) -> Book {
        Book::new(
            BookId::new(id),
            format!("title {}", id),
            format!("author {}", id),
            Availability::Available,
        )
    }

    fn index_of(ids: &[u32]) -> LibraryIndex {
        let mut index = LibraryIndex::new();
        for &id in ids {
            index.insert(book(id)).unwrap();
        }
        index
    }

    fn ids(books: Vec<&Book>) -> Vec<u32> {
        books.iter().map(|b| b.id().0).collect()
    }

    #[test]
    fn test_range_is_inclusive_and_ascending() {
        let index = index_of(&[40, 20, 60, 10, 30, 50, 70]);

        let hits = index.books_in_range(BookId::new(20), BookId::new(50));
        assert_eq!(ids(hits), vec![20, 30, 40, 50]);
    }

    #[test]
    fn test_range_subsets() {
        let index = index_of(&[40, 20, 60, 10, 30, 50, 70]);

        assert_eq!(
            ids(index.books_in_range(BookId::new(0), BookId::new(200))),
            vec![10, 20, 30, 40, 50, 60, 70]
        );
        assert_eq!(
            ids(index.books_in_range(BookId::new(31), BookId::new(39))),
            Vec::<u32>::new()
        );
        assert_eq!(
            ids(index.books_in_range(BookId::new(70), BookId::new(70))),
            vec![70]
        );
    }

    #[test]
    fn test_range_with_reversed_bounds_is_empty() {
        let index = index_of(&[40, 20, 60]);
        assert!(index.books_in_range(BookId::new(60), BookId::new(20)).is_empty());
    }

    #[test]
    fn test_range_on_empty_index() {
        let index = LibraryIndex::new();
        assert!(index.books_in_range(BookId::new(0), BookId::new(100)).is_empty());
    }

    #[test]
    fn test_nearest_exact_match_wins_alone() {
        let index = index_of(&[40, 20, 60, 10, 30]);
        assert_eq!(ids(index.nearest_books(BookId::new(30))), vec![30]);
    }

    #[test]
    fn test_nearest_single_side() {
        let index = index_of(&[40, 20, 60]);
        assert_eq!(ids(index.nearest_books(BookId::new(55))), vec![60]);
        assert_eq!(ids(index.nearest_books(BookId::new(5))), vec![20]);
    }

    #[test]
    fn test_nearest_tie_returns_both_sides_sorted() {
        let index = index_of(&[40, 20, 60]);
        // 30 is 10 away from both 20 and 40, and both sit on the path.
        assert_eq!(ids(index.nearest_books(BookId::new(30))), vec![20, 40]);
    }

    #[test]
    fn test_nearest_keeps_the_closest_path_node() {
        // Tree shape: 40 at the root, 20B{10R, 30R} on the left.
        let index = index_of(&[40, 20, 60, 10, 30]);

        // Searching 34: path is 40 -> 20 -> 30; 30 wins at distance 4.
        assert_eq!(ids(index.nearest_books(BookId::new(34))), vec![30]);

        // Searching 49: path is 40 -> 60; 60 is visited and loses to 40.
        assert_eq!(ids(index.nearest_books(BookId::new(49))), vec![40]);
    }

    #[test]
    fn test_nearest_on_empty_index() {
        let index = LibraryIndex::new();
        assert!(index.nearest_books(BookId::new(10)).is_empty());
    }
}
