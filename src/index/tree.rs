//! The ordered book index - a red-black tree over an arena.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       LibraryIndex                          │
//! │  ┌──────────────┐  ┌───────────────────────────────────┐   │
//! │  │ root         │  │      arena: Vec<Option<Node>>     │   │
//! │  │ Option<NId > │─▶│  [10,B]  [5,R]  [15,R]  (free)    │   │
//! │  └──────────────┘  └───────────────────────────────────┘   │
//! │  ┌──────────────────────────────────────────────────────┐  │
//! │  │ stats: IndexStats (flips, rotations, inserts, ...)   │  │
//! │  └──────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nodes refer to each other by arena index; an absent child is `None`
//! rather than a sentinel node. The tree maintains the usual invariants:
//! keys strictly ordered left-to-right, no red node with a red child,
//! equal black counts on every root-to-absence path, and a black root.
//!
//! Every recolor funnels through [`LibraryIndex::set_color`], which
//! advances the flip counter only when a node's stored color actually
//! changes. Re-asserting an existing color is free. This makes the flip
//! count a pure function of the operation sequence.

use crate::catalog::Book;
use crate::common::{BookId, Error, Result};
use crate::index::arena::{NodeArena, NodeId};
use crate::index::node::Color;
use crate::index::IndexStats;

/// Ordered index of books keyed by [`BookId`].
///
/// # Example
/// ```
/// use shelfdb::{Availability, Book, BookId, LibraryIndex};
///
/// let mut index = LibraryIndex::new();
/// let book = Book::new(
///     BookId::new(7),
///     "Dune".to_string(),
///     "Herbert".to_string(),
///     Availability::Available,
/// );
/// index.insert(book).unwrap();
///
/// assert_eq!(index.len(), 1);
/// assert_eq!(index.get(BookId::new(7)).unwrap().title(), "Dune");
/// ```
#[derive(Debug, Default)]
pub struct LibraryIndex {
    arena: NodeArena,
    root: Option<NodeId>,
    stats: IndexStats,
}

impl LibraryIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
            stats: IndexStats::new(),
        }
    }

    /// Number of books in the index.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the index holds no books.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Snapshot of the rebalancing counters.
    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    // ========================================================================
    // Public API: Search
    // ========================================================================

    /// Look up a book by id.
    pub fn get(&self, id: BookId) -> Option<&Book> {
        self.find(id).map(|node| &self.arena.node(node).book)
    }

    /// Look up a book by id for mutation.
    ///
    /// Only the payload is handed out; linkage and color stay private, so
    /// the caller cannot disturb the tree shape. The id inside the payload
    /// is immutable by construction.
    pub fn get_mut(&mut self, id: BookId) -> Option<&mut Book> {
        let node = self.find(id)?;
        Some(&mut self.arena.node_mut(node).book)
    }

    // ========================================================================
    // Public API: Insert
    // ========================================================================

    /// Insert a book, keeping the tree balanced.
    ///
    /// The new node is attached red at its ordered position, then the
    /// red-red repair loop walks up classifying the uncle: a red uncle
    /// pushes blackness down from the grandparent (which stays black when
    /// it is the root); a black uncle resolves with one or two rotations.
    ///
    /// # Errors
    /// Returns `Error::DuplicateBook` when the id is already present. The
    /// duplicate is detected during descent, before any mutation, so the
    /// existing record and the flip counter are untouched.
    pub fn insert(&mut self, book: Book) -> Result<()> {
        let id = book.id();

        let mut parent = None;
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let current_id = self.arena.node(current).book.id();
            if id == current_id {
                return Err(Error::DuplicateBook(id));
            }
            parent = Some(current);
            cursor = if id < current_id {
                self.left(current)
            } else {
                self.right(current)
            };
        }

        let node = self.arena.alloc(book);
        self.arena.node_mut(node).parent = parent;
        match parent {
            Some(p) => {
                if id < self.arena.node(p).book.id() {
                    self.arena.node_mut(p).left = Some(node);
                } else {
                    self.arena.node_mut(p).right = Some(node);
                }
            }
            None => self.root = Some(node),
        }

        self.insert_fixup(node);
        self.stats.inserts += 1;
        Ok(())
    }

    // ========================================================================
    // Public API: Remove
    // ========================================================================

    /// Remove a book by id, returning its record.
    ///
    /// A node with two children first trades payloads with its in-order
    /// predecessor (the rightmost node of its left subtree); the
    /// predecessor position, which has at most one child, is then the one
    /// unlinked. Colors and linkage never move with the payload. Removing
    /// a black position triggers the sibling-based repair walk.
    ///
    /// # Errors
    /// Returns `Error::BookNotFound` when the id is absent.
    pub fn remove(&mut self, id: BookId) -> Result<Book> {
        let found = self.find(id).ok_or(Error::BookNotFound(id))?;

        let target = match (self.left(found), self.right(found)) {
            (Some(left), Some(_)) => {
                let predecessor = self.rightmost(left);
                self.arena.swap_books(found, predecessor);
                predecessor
            }
            _ => found,
        };

        let child = self.left(target).or_else(|| self.right(target));
        let parent = self.parent(target);
        let removed_black = self.arena.node(target).color == Color::Black;

        self.replace_child(target, child);
        let node = self.arena.free(target);

        if removed_black {
            self.remove_fixup(child, parent);
        }

        self.stats.removals += 1;
        Ok(node.book)
    }

    // ========================================================================
    // Query hooks (see query.rs for the walkers built on these)
    // ========================================================================

    pub(super) fn root_id(&self) -> Option<NodeId> {
        self.root
    }

    pub(super) fn left(&self, id: NodeId) -> Option<NodeId> {
        self.arena.node(id).left
    }

    pub(super) fn right(&self, id: NodeId) -> Option<NodeId> {
        self.arena.node(id).right
    }

    pub(super) fn book_at(&self, id: NodeId) -> &Book {
        &self.arena.node(id).book
    }

    // ========================================================================
    // Internal: navigation helpers
    // ========================================================================

    fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.node(id).parent
    }

    /// Color test over an optional link: an absent child counts as black.
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|node| self.arena.node(node).color == Color::Red)
    }

    fn is_black(&self, id: Option<NodeId>) -> bool {
        !self.is_red(id)
    }

    fn find(&self, id: BookId) -> Option<NodeId> {
        let mut cursor = self.root;
        while let Some(current) = cursor {
            let current_id = self.arena.node(current).book.id();
            if id == current_id {
                return Some(current);
            }
            cursor = if id < current_id {
                self.left(current)
            } else {
                self.right(current)
            };
        }
        None
    }

    fn rightmost(&self, mut node: NodeId) -> NodeId {
        while let Some(right) = self.right(node) {
            node = right;
        }
        node
    }

    /// Recolor a node through the flip counter.
    ///
    /// The single choke point for color writes: the counter moves only
    /// when the stored color differs from the requested one.
    fn set_color(&mut self, id: NodeId, color: Color) {
        let node = self.arena.node_mut(id);
        if node.color != color {
            node.color = color;
            self.stats.color_flips += 1;
        }
    }

    /// Point `old`'s parent (or the root) at `new` instead.
    fn replace_child(&mut self, old: NodeId, new: Option<NodeId>) {
        let parent = self.parent(old);
        match parent {
            Some(p) => {
                if self.left(p) == Some(old) {
                    self.arena.node_mut(p).left = new;
                } else {
                    self.arena.node_mut(p).right = new;
                }
            }
            None => self.root = new,
        }
        if let Some(n) = new {
            self.arena.node_mut(n).parent = parent;
        }
    }

    // ========================================================================
    // Internal: rotations
    // ========================================================================

    fn rotate_left(&mut self, node: NodeId) {
        let pivot = match self.right(node) {
            Some(p) => p,
            // Fixups only rotate toward an existing child.
            None => return,
        };

        let inner = self.left(pivot);
        self.arena.node_mut(node).right = inner;
        if let Some(i) = inner {
            self.arena.node_mut(i).parent = Some(node);
        }

        let parent = self.parent(node);
        self.arena.node_mut(pivot).parent = parent;
        match parent {
            Some(p) => {
                if self.left(p) == Some(node) {
                    self.arena.node_mut(p).left = Some(pivot);
                } else {
                    self.arena.node_mut(p).right = Some(pivot);
                }
            }
            None => self.root = Some(pivot),
        }

        self.arena.node_mut(pivot).left = Some(node);
        self.arena.node_mut(node).parent = Some(pivot);

        self.stats.rotations += 1;
    }

    fn rotate_right(&mut self, node: NodeId) {
        let pivot = match self.left(node) {
            Some(p) => p,
            None => return,
        };

        let inner = self.right(pivot);
        self.arena.node_mut(node).left = inner;
        if let Some(i) = inner {
            self.arena.node_mut(i).parent = Some(node);
        }

        let parent = self.parent(node);
        self.arena.node_mut(pivot).parent = parent;
        match parent {
            Some(p) => {
                if self.right(p) == Some(node) {
                    self.arena.node_mut(p).right = Some(pivot);
                } else {
                    self.arena.node_mut(p).left = Some(pivot);
                }
            }
            None => self.root = Some(pivot),
        }

        self.arena.node_mut(pivot).right = Some(node);
        self.arena.node_mut(node).parent = Some(pivot);

        self.stats.rotations += 1;
    }

    // ========================================================================
    // Internal: insert repair
    // ========================================================================

    fn insert_fixup(&mut self, mut node: NodeId) {
        while self.is_red(self.parent(node)) {
            let parent = match self.parent(node) {
                Some(p) => p,
                None => break,
            };
            let grandparent = match self.parent(parent) {
                Some(g) => g,
                None => break,
            };

            if Some(parent) == self.left(grandparent) {
                let uncle = self.right(grandparent);

                if self.is_red(uncle) {
                    // Red uncle: pull the blackness down one level. The
                    // root keeps its black, absorbing the extra level.
                    self.set_color(parent, Color::Black);
                    if let Some(u) = uncle {
                        self.set_color(u, Color::Black);
                    }
                    if Some(grandparent) != self.root {
                        self.set_color(grandparent, Color::Red);
                    }
                    node = grandparent;
                } else {
                    if Some(node) == self.right(parent) {
                        // Inner grandchild: straighten into the outer case.
                        node = parent;
                        self.rotate_left(node);
                    }
                    if let Some(p) = self.parent(node) {
                        self.set_color(p, Color::Black);
                        if let Some(g) = self.parent(p) {
                            self.set_color(g, Color::Red);
                            self.rotate_right(g);
                        }
                    }
                }
            } else {
                let uncle = self.left(grandparent);

                if self.is_red(uncle) {
                    self.set_color(parent, Color::Black);
                    if let Some(u) = uncle {
                        self.set_color(u, Color::Black);
                    }
                    if Some(grandparent) != self.root {
                        self.set_color(grandparent, Color::Red);
                    }
                    node = grandparent;
                } else {
                    if Some(node) == self.left(parent) {
                        node = parent;
                        self.rotate_right(node);
                    }
                    if let Some(p) = self.parent(node) {
                        self.set_color(p, Color::Black);
                        if let Some(g) = self.parent(p) {
                            self.set_color(g, Color::Red);
                            self.rotate_left(g);
                        }
                    }
                }
            }
        }

        // The root is always black; the first insert pays one flip here.
        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    // ========================================================================
    // Internal: remove repair
    // ========================================================================

    /// Restore the black count after a black position was removed.
    ///
    /// `node` is the child spliced into the removed position (possibly
    /// absent) and `parent` its parent. The walk classifies the sibling:
    /// a red sibling rotates into a black one; a black sibling with black
    /// children recolors red and pushes the deficit up; a black sibling
    /// with a red child resolves terminally with one or two rotations.
    fn remove_fixup(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while let Some(p) = parent {
            if !self.is_black(node) {
                break;
            }

            if node == self.left(p) {
                let mut sibling = match self.right(p) {
                    Some(s) => s,
                    // A removed black position always leaves a sibling.
                    None => break,
                };

                if self.is_red(Some(sibling)) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_left(p);
                    sibling = match self.right(p) {
                        Some(s) => s,
                        None => break,
                    };
                }

                if self.is_black(self.left(sibling)) && self.is_black(self.right(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.is_black(self.right(sibling)) {
                        if let Some(near) = self.left(sibling) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.rotate_right(sibling);
                        sibling = match self.right(p) {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    let parent_color = self.arena.node(p).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.right(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_left(p);
                    node = self.root;
                    parent = None;
                }
            } else {
                let mut sibling = match self.left(p) {
                    Some(s) => s,
                    None => break,
                };

                if self.is_red(Some(sibling)) {
                    self.set_color(sibling, Color::Black);
                    self.set_color(p, Color::Red);
                    self.rotate_right(p);
                    sibling = match self.left(p) {
                        Some(s) => s,
                        None => break,
                    };
                }

                if self.is_black(self.right(sibling)) && self.is_black(self.left(sibling)) {
                    self.set_color(sibling, Color::Red);
                    node = Some(p);
                    parent = self.parent(p);
                } else {
                    if self.is_black(self.left(sibling)) {
                        if let Some(near) = self.right(sibling) {
                            self.set_color(near, Color::Black);
                        }
                        self.set_color(sibling, Color::Red);
                        self.rotate_left(sibling);
                        sibling = match self.left(p) {
                            Some(s) => s,
                            None => break,
                        };
                    }
                    let parent_color = self.arena.node(p).color;
                    self.set_color(sibling, parent_color);
                    self.set_color(p, Color::Black);
                    if let Some(far) = self.left(sibling) {
                        self.set_color(far, Color::Black);
                    }
                    self.rotate_right(p);
                    node = self.root;
                    parent = None;
                }
            }
        }

        if let Some(n) = node {
            self.set_color(n, Color::Black);
        }
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Walk the whole tree asserting every structural invariant.
    ///
    /// Checks key ordering, parent back-links, the no-red-red rule, equal
    /// black counts per path, and the black root. Intended for tests and
    /// diagnostics.
    ///
    /// # Panics
    /// Panics on the first violated invariant.
    pub fn validate(&self) {
        if let Some(root) = self.root {
            assert!(
                self.arena.node(root).color == Color::Black,
                "root must be black"
            );
            assert!(
                self.parent(root).is_none(),
                "root must not have a parent link"
            );
            let counted = self.validate_node(root, None, None).1;
            assert_eq!(counted, self.len(), "reachable nodes must match len");
        } else {
            assert_eq!(self.len(), 0, "empty tree must have no live nodes");
        }
    }

    /// Returns (black height, reachable node count) of the subtree.
    fn validate_node(&self, node: NodeId, lo: Option<BookId>, hi: Option<BookId>) -> (usize, usize) {
        let n = self.arena.node(node);
        let id = n.book.id();

        if let Some(lo) = lo {
            assert!(id > lo, "key order violated at {}", id);
        }
        if let Some(hi) = hi {
            assert!(id < hi, "key order violated at {}", id);
        }
        if n.color == Color::Red {
            assert!(
                self.is_black(n.left) && self.is_black(n.right),
                "red node {} has a red child",
                id
            );
        }
        if let Some(left) = n.left {
            assert_eq!(self.parent(left), Some(node), "broken parent link");
        }
        if let Some(right) = n.right {
            assert_eq!(self.parent(right), Some(node), "broken parent link");
        }

        let (left_black, left_count) = match n.left {
            Some(left) => self.validate_node(left, lo, Some(id)),
            None => (1, 0),
        };
        let (right_black, right_count) = match n.right {
            Some(right) => self.validate_node(right, Some(id), hi),
            None => (1, 0),
        };
        assert_eq!(left_black, right_black, "black height mismatch at {}", id);

        let own_black = usize::from(n.color == Color::Black);
        (left_black + own_black, left_count + right_count + 1)
    }
}
