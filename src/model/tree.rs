//! Provides the arena-backed binary tree.
//!
//! Provides core data structures for representing a hill:
//! * [`BinaryTree<T>`] - Main tree structure using the arena pattern,
//!   generic over the payload stored at each node.
//! * [SkiHill] as realization with [Segment] payloads
//! * [NodeIndex] as type used to index nodes in tree

use crate::model::node::{Node, Side};
use crate::model::segment::Segment;
use std::collections::VecDeque;
use std::fmt;

/// Index of a node in a tree (arena).
pub type NodeIndex = usize;

// =#========================================================================#=
// TREE
// =#========================================================================#=
/// A binary tree represented using the arena pattern on [Node].
///
/// Nodes are stored in a contiguous vector and referenced by [NodeIndex].
/// The tree exclusively owns all nodes; nodes refer to their children (and
/// parent) only by index, so there is no shared ownership and no cycles.
///
/// # Structure
/// - All nodes are stored in the arena, the root (if any) at index 0.
/// - Every non-root node has exactly one parent, set when it is attached.
/// - Each node has an optional left and an optional right child.
///
/// # Construction
/// Usually built in level order via
/// [build_level_order](crate::model::build_level_order). Trees can also be
/// assembled top-down with [add_root](BinaryTree::add_root) and
/// [add_child](BinaryTree::add_child); attached nodes are never re-linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    /// Nodes of this tree (arena pattern)
    nodes: Vec<Node<T>>,

    /// Index of the root of this tree, `None` if empty
    root_index: Option<NodeIndex>,

    /// Number of input elements the builder could not place
    num_unplaced: usize,
}

/// A ski hill: binary tree of [Segment]s.
pub type SkiHill = BinaryTree<Segment>;

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> BinaryTree<T> {
    /// Creates a new, empty tree.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        BinaryTree {
            nodes: Vec::with_capacity(capacity),
            root_index: None,
            num_unplaced: 0,
        }
    }

    /// Adds the root to an empty tree, returning its index.
    ///
    /// # Panics
    /// Panics if the tree already has a root.
    pub fn add_root(&mut self, payload: T) -> NodeIndex {
        assert!(self.root_index.is_none(), "Tree already has a root");
        let index = self.push(payload);
        self.root_index = Some(index);
        index
    }

    /// Adds a new node as child of `parent` on the given `side`, returning its index.
    ///
    /// # Panics
    /// Panics if `parent` is out of bounds or already has a child on that side.
    pub fn add_child(&mut self, parent: NodeIndex, side: Side, payload: T) -> NodeIndex {
        assert!(parent < self.nodes.len(), "No node with index {parent}");
        let index = self.push(payload);
        self.nodes[parent].set_child(side, index);
        self.nodes[index].set_parent(parent);
        index
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root_index.is_none()
    }

    /// Returns a reference to the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root_index.map(|index| &self[index])
    }

    /// Returns the index of the root, or `None` if the tree is empty.
    pub fn root_index(&self) -> Option<NodeIndex> {
        self.root_index
    }

    /// Returns a reference to the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn node(&self, index: NodeIndex) -> &Node<T> {
        &self[index]
    }

    /// Returns a reference to the node at the given index, or `None` if out of bounds.
    pub fn get(&self, index: NodeIndex) -> Option<&Node<T>> {
        self.nodes.get(index)
    }

    /// Returns the payload of the node at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn payload(&self, index: NodeIndex) -> &T {
        self[index].payload()
    }

    /// Returns the number of nodes in this tree.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of leaves (childless nodes) in this tree.
    pub fn num_leaves(&self) -> usize {
        self.nodes.iter().filter(|&n| n.is_leaf()).count()
    }

    /// Returns the number of input elements that could not be placed
    /// during level-order construction.
    pub fn num_unplaced(&self) -> usize {
        self.num_unplaced
    }

    /// Returns the height of this tree, counted in levels
    /// (0 for an empty tree, 1 for a single node).
    pub fn height(&self) -> usize {
        let mut depths = vec![0usize; self.nodes.len()];
        let mut height = 0;
        for node in self.level_order_iter() {
            let depth = node.parent_index().map_or(1, |parent| depths[parent] + 1);
            depths[node.index()] = depth;
            height = height.max(depth);
        }
        height
    }

    /// Checks parent/child consistency of the whole arena.
    ///
    /// # Returns
    /// `true` if exactly the root lacks a parent, every child refers back to
    /// its parent and all nodes are reachable from the root.
    pub fn is_valid(&self) -> bool {
        let Some(root_index) = self.root_index else {
            return self.nodes.is_empty();
        };

        for node in &self.nodes {
            match node.parent_index() {
                None if node.index() != root_index => return false,
                Some(parent) => {
                    let Some(parent) = self.nodes.get(parent) else {
                        return false;
                    };
                    if parent.left() != Some(node.index()) && parent.right() != Some(node.index()) {
                        return false;
                    }
                }
                None => {}
            }

            for child in [node.left(), node.right()].into_iter().flatten() {
                if self.nodes.get(child).and_then(|c| c.parent_index()) != Some(node.index()) {
                    return false;
                }
            }
        }

        self.pre_order_iter().count() == self.nodes.len()
    }

    /// Returns an iterator over the tree in pre-order (parents before children,
    /// left before right).
    pub fn pre_order_iter(&self) -> PreOrderIter<'_, T> {
        PreOrderIter::new(self)
    }

    /// Returns an iterator over the tree in level order (breadth-first,
    /// left before right within a level).
    pub fn level_order_iter(&self) -> LevelOrderIter<'_, T> {
        LevelOrderIter::new(self)
    }

    /// Re-serializes this tree into the level-order encoding it can be built from.
    ///
    /// Every visited node contributes the slots of its two children, `None`
    /// marking an absent child. Trailing `None`s are trimmed.
    ///
    /// # Example
    /// ```
    /// use skihill::model::build_level_order;
    ///
    /// let tree = build_level_order([Some('a'), None, Some('b'), None, None]);
    /// assert_eq!(tree.to_level_order(), vec![Some(&'a'), None, Some(&'b')]);
    /// ```
    pub fn to_level_order(&self) -> Vec<Option<&T>> {
        let mut encoding = Vec::with_capacity(2 * self.nodes.len() + 1);
        let Some(root) = self.root() else {
            return encoding;
        };
        encoding.push(Some(root.payload()));

        for node in self.level_order_iter() {
            encoding.push(node.left().map(|i| self.payload(i)));
            encoding.push(node.right().map(|i| self.payload(i)));
        }

        while matches!(encoding.last(), Some(None)) {
            encoding.pop();
        }
        encoding
    }
}

// ============================================================================
// Construction helpers (private / crate)
// ============================================================================
impl<T> BinaryTree<T> {
    fn push(&mut self, payload: T) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new(index, payload));
        index
    }

    pub(crate) fn record_unplaced(&mut self, count: usize) {
        self.num_unplaced += count;
    }
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<NodeIndex> for BinaryTree<T> {
    type Output = Node<T>;

    fn index(&self, index: NodeIndex) -> &Self::Output {
        &self.nodes[index]
    }
}

// ============================================================================
// Printing
// ============================================================================
/// Levels after which the rendered indentation stops growing.
const MAX_RENDER_INDENT: usize = 16;

/// Line to render: a node, or the marker for an absent sibling.
enum RenderItem {
    Node(NodeIndex),
    Missing,
}

/// Renders the tree with one node per line, in pre-order.
///
/// Indentation grows for the first 16 levels only; deeper nodes keep the
/// indentation of level 16 so output stays linear in the number of nodes.
///
/// # Example Output
/// ```text
/// [0] ""
///   ├─ [1] "jump-3"
///   └─ [2] "slalom-L"
///       ├─ [3] ""
///       └─ [4] "jump-9"
/// ```
impl<T: fmt::Display> fmt::Display for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root_index else {
            return writeln!(f, "(empty)");
        };

        // (item, prefix, is_last, depth); stack instead of recursion
        let mut stack = vec![(RenderItem::Node(root), String::new(), true, 0usize)];

        while let Some((item, prefix, is_last, depth)) = stack.pop() {
            let connector = if depth == 0 { "" } else if is_last { "└─ " } else { "├─ " };

            let index = match item {
                RenderItem::Missing => {
                    writeln!(f, "{}{}(none)", prefix, connector)?;
                    continue;
                }
                RenderItem::Node(index) => index,
            };

            let node = &self[index];
            writeln!(f, "{}{}[{}] \"{}\"", prefix, connector, index, node.payload())?;

            if node.is_leaf() {
                continue;
            }

            let child_prefix = if depth == 0 {
                "  ".to_string()
            } else if depth >= MAX_RENDER_INDENT {
                prefix
            } else {
                format!("{}{}   ", prefix, if is_last { " " } else { "│" })
            };

            // Right first, so left is rendered first
            let right = node.right().map_or(RenderItem::Missing, RenderItem::Node);
            let left = node.left().map_or(RenderItem::Missing, RenderItem::Node);
            stack.push((right, child_prefix.clone(), true, depth + 1));
            stack.push((left, child_prefix, false, depth + 1));
        }

        Ok(())
    }
}

// =#========================================================================#=
// ITERATORS
// =#========================================================================#=
/// Iterator for pre-order traversal (parents before children).
///
/// This iterator uses a stack-based approach to traverse the tree without recursion.
/// Each node is visited before any of its descendants.
pub struct PreOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    stack: Vec<NodeIndex>,
}

impl<'a, T> PreOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        PreOrderIter {
            tree,
            stack: tree.root_index.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let node = &self.tree[index];

        // Push children onto stack (right first, so left is processed first)
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

/// Iterator for level-order traversal (breadth-first).
///
/// Uses a FIFO queue; nodes of depth `k` are visited before nodes of depth `k + 1`.
pub struct LevelOrderIter<'a, T> {
    tree: &'a BinaryTree<T>,
    queue: VecDeque<NodeIndex>,
}

impl<'a, T> LevelOrderIter<'a, T> {
    fn new(tree: &'a BinaryTree<T>) -> Self {
        LevelOrderIter {
            tree,
            queue: tree.root_index.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrderIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.queue.pop_front()?;
        let node = &self.tree[index];

        self.queue.extend(node.left());
        self.queue.extend(node.right());

        Some(node)
    }
}
