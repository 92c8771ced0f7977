//! Tree node storage: payload plus linkage.

use crate::catalog::Book;
use crate::index::arena::NodeId;

/// Node color for the red-black balancing rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// One tree node: a book plus its linkage and color.
///
/// Links are arena indices rather than pointers; `None` stands for the
/// absent child (there is no sentinel node). A freshly allocated node is a
/// red leaf with every link unset, which is exactly how insertion attaches
/// it.
#[derive(Debug)]
pub struct Node {
    pub book: Book,
    pub color: Color,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    /// Create a detached red leaf holding `book`.
    pub fn new(book: Book) -> Self {
        Self {
            book,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Availability;
    use crate::common::BookId;

    #[test]
    fn test_new_node_is_detached_red_leaf() {
        let book = Book::new(
            BookId::new(1),
            "t".to_string(),
            "a".to_string(),
            Availability::Available,
        );
        let node = Node::new(book);

        assert_eq!(node.color, Color::Red);
        assert!(node.parent.is_none());
        assert!(node.left.is_none());
        assert!(node.right.is_none());
        assert_eq!(node.book.id(), BookId::new(1));
    }
}
