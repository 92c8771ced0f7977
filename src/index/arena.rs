//! Slot arena backing the ordered index.
//!
//! Nodes live in a `Vec` of slots and refer to each other by [`NodeId`]
//! (a slot index), which sidesteps owning-pointer cycles entirely: parent
//! links are plain indices, and removing a node frees its slot for reuse
//! through a LIFO free list.

use std::fmt;

use crate::catalog::Book;
use crate::index::node::Node;

/// Index of a node slot in the arena.
///
/// Valid only against the arena that issued it; the tree never lets one
/// escape its own arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

/// Arena of tree nodes with slot reuse.
#[derive(Debug, Default)]
pub struct NodeArena {
    /// Slot storage; `None` marks a freed slot awaiting reuse.
    slots: Vec<Option<Node>>,

    /// Stack of freed slot indices (LIFO for locality).
    free: Vec<NodeId>,
}

impl NodeArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Whether the arena holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Allocate a detached red leaf for `book`, reusing a freed slot when
    /// one is available.
    pub fn alloc(&mut self, book: Book) -> NodeId {
        let node = Node::new(book);
        match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(node);
                id
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Free `id`'s slot and return the node that occupied it.
    pub fn free(&mut self, id: NodeId) -> Node {
        let node = self.slots[id.0].take().expect("freeing a vacant arena slot");
        self.free.push(id);
        node
    }

    /// Borrow the node at `id`.
    ///
    /// # Panics
    /// Panics if `id` refers to a freed slot; a live tree never holds such
    /// a link.
    pub fn node(&self, id: NodeId) -> &Node {
        self.slots[id.0].as_ref().expect("vacant arena slot")
    }

    /// Mutably borrow the node at `id`.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.slots[id.0].as_mut().expect("vacant arena slot")
    }

    /// Swap the book payloads of two distinct nodes, leaving color and
    /// linkage where they are.
    pub fn swap_books(&mut self, a: NodeId, b: NodeId) {
        assert_ne!(a, b, "swap_books requires distinct nodes");

        let (low, high) = if a.0 < b.0 { (a.0, b.0) } else { (b.0, a.0) };
        let (head, tail) = self.slots.split_at_mut(high);
        let first = head[low].as_mut().expect("vacant arena slot");
        let second = tail[0].as_mut().expect("vacant arena slot");
        std::mem::swap(&mut first.book, &mut second.book);
    }
}
