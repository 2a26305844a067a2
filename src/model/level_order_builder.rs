//! Level-order construction of a [BinaryTree] from a flat, gap-annotated sequence.
//!
//! The input is read as a breadth-first encoding where `None` marks an absent
//! node:
//!
//! ```text
//! [a, b, c, None, None, d, e]
//!
//!         a
//!       /   \
//!      b     c
//!           / \
//!          d   e
//! ```
//!
//! The first element becomes the root. After that, elements are consumed in
//! pairs, each pair providing the (left, right) children of the next parent
//! waiting in a FIFO queue. Present children join the back of that queue.
//!
//! ```text
//! step 0: consume 1 element, no parent      → root
//! step k: consume 2 elements, dequeue parent → attach left/right, enqueue them
//! ```

use crate::model::node::Side;
use crate::model::tree::{BinaryTree, NodeIndex};
use std::collections::VecDeque;
use tracing::warn;

/// Builds a [BinaryTree] from its level-order encoding.
///
/// - Empty input yields an empty tree.
/// - `None` slots produce no node and take no place in the parent queue.
/// - A sequence ending mid-pair treats the missing right element as `None`.
/// - Parents still queued when the input runs out stay leaves.
///
/// Elements that cannot be placed, because the root slot is `None` or the
/// parent queue ran dry, are dropped; see [BinaryTree::num_unplaced].
///
/// # Example
/// ```
/// use skihill::model::build_level_order;
///
/// let tree = build_level_order([Some(1), Some(2), Some(3), None, None, Some(4), Some(5)]);
/// let root = tree.root().unwrap();
/// let right = tree.node(root.right().unwrap());
/// assert_eq!(*right.payload(), 3);
/// assert_eq!(*tree.payload(right.left().unwrap()), 4);
/// ```
pub fn build_level_order<T, I>(items: I) -> BinaryTree<T>
where
    I: IntoIterator<Item = Option<T>>,
{
    let mut items = items.into_iter();
    let mut tree = BinaryTree::with_capacity(items.size_hint().0);

    let root = match items.next() {
        None => return tree,
        Some(None) => {
            let dropped = items.filter(Option::is_some).count();
            if dropped > 0 {
                warn!(dropped, "level-order input starts with a gap, no root to attach to");
            }
            tree.record_unplaced(dropped);
            return tree;
        }
        Some(Some(payload)) => tree.add_root(payload),
    };

    let mut parents: VecDeque<NodeIndex> = VecDeque::from([root]);

    while let Some(left) = items.next() {
        let right = items.next().flatten();

        let Some(parent) = parents.pop_front() else {
            let dropped = usize::from(left.is_some()) + usize::from(right.is_some());
            let dropped = dropped + items.by_ref().filter(Option::is_some).count();
            if dropped > 0 {
                warn!(dropped, "level-order input longer than the tree it encodes");
            }
            tree.record_unplaced(dropped);
            break;
        };

        for (side, candidate) in [(Side::Left, left), (Side::Right, right)] {
            if let Some(payload) = candidate {
                let child = tree.add_child(parent, side, payload);
                parents.push_back(child);
            }
        }
    }

    tree
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_tail_is_left_child_only() {
        let tree = build_level_order([Some('r'), Some('l')]);
        let root = tree.root().unwrap();
        assert_eq!(root.left(), Some(1));
        assert_eq!(root.right(), None);
    }

    #[test]
    fn root_gap_yields_empty_tree() {
        let tree = build_level_order([None, Some('a'), Some('b')]);
        assert!(tree.is_empty());
        assert_eq!(tree.num_unplaced(), 2);
    }

    #[test]
    fn exhausted_parent_queue_drops_rest() {
        // root has no children, so the second pair has no parent
        let tree = build_level_order([Some(0), None, None, Some(3), None]);
        assert_eq!(tree.num_nodes(), 1);
        assert_eq!(tree.num_unplaced(), 1);
    }
}
