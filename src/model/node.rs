//! Node module for the arena-backed binary tree.

use crate::model::tree::NodeIndex;

// =#========================================================================#=
// SIDE
// =#========================================================================#=
/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left child
    Left,
    /// Right child
    Right,
}

// =#========================================================================#=
// NODE
// =#========================================================================#=
/// Represents a node in a [BinaryTree](crate::model::BinaryTree).
///
/// A node owns exactly one payload and refers to at most two children by
/// their [NodeIndex] in the tree arena.
///
/// # Invariants
/// - `index` is the index of this node in the arena
/// - `parent` is `None` exactly for the root; set once when attached
/// - `left`/`right` point at nodes whose `parent` is this node
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Node<T> {
    /// Index of this node in the tree arena
    index: NodeIndex,
    /// Index of the parent node, `None` for the root
    parent: Option<NodeIndex>,
    /// Index of the left child
    left: Option<NodeIndex>,
    /// Index of the right child
    right: Option<NodeIndex>,
    /// Data stored at this node
    payload: T,
}

impl<T> Node<T> {
    /// Creates a new node without parent or children.
    ///
    /// # Arguments
    /// * `index` - The unique index of this node in the tree (arena)
    /// * `payload` - The data stored at this node
    pub(crate) fn new(index: NodeIndex, payload: T) -> Self {
        Node {
            index,
            parent: None,
            left: None,
            right: None,
            payload,
        }
    }

    /// Returns the index of this node.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// Returns a reference to the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Returns the index of the left child, if any.
    pub fn left(&self) -> Option<NodeIndex> {
        self.left
    }

    /// Returns the index of the right child, if any.
    pub fn right(&self) -> Option<NodeIndex> {
        self.right
    }

    /// Returns the index of the child on the given side, if any.
    pub fn child(&self, side: Side) -> Option<NodeIndex> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns both child slots as `(left, right)`.
    pub fn children(&self) -> (Option<NodeIndex>, Option<NodeIndex>) {
        (self.left, self.right)
    }

    /// Returns the number of present children (0, 1 or 2).
    pub fn num_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Returns `true` if this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Returns the index of the parent, or `None` for the root.
    pub fn parent_index(&self) -> Option<NodeIndex> {
        self.parent
    }

    /// Returns `true` if this node has a parent set.
    pub fn has_parent(&self) -> bool {
        self.parent.is_some()
    }

    /// Sets the parent of this node.
    ///
    /// # Panics
    /// Panics if a parent has already been set.
    pub(crate) fn set_parent(&mut self, parent: NodeIndex) {
        assert!(self.parent.is_none(), "Node {} already has a parent", self.index);
        self.parent = Some(parent);
    }

    /// Sets the child on the given side.
    ///
    /// # Panics
    /// Panics if that side is already occupied.
    pub(crate) fn set_child(&mut self, side: Side, child: NodeIndex) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        assert!(slot.is_none(), "Node {} already has a {:?} child", self.index, side);
        *slot = Some(child);
    }
}
