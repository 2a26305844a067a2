//! Greedy descent through a [SkiHill].
//!
//! Starting at a node, the descent records the node's segment and moves to one
//! of its children until it reaches a node without children. A single child
//! is always taken. Between two children, [choose_child] decides:
//!
//! | left \ right | Plain             | Jump                  | Slalom                      |
//! |--------------|-------------------|-----------------------|-----------------------------|
//! | **Plain**    | right             | right                 | right iff leeward           |
//! | **Jump**     | left              | higher, ties to right | left                        |
//! | **Slalom**   | left iff leeward  | right                 | right iff right is leeward  |
//!
//! Jump rules take precedence over slalom rules.
//! The descent is a loop over a cursor, so its depth is not bounded by the stack.

use crate::model::{Node, NodeIndex, Segment, SegmentKind, Side, SkiHill};
use tracing::trace;

/// Decides which of two present children the descent continues with.
///
/// # Example
/// ```
/// use skihill::descent::choose_child;
/// use skihill::model::{Direction, Segment, Side};
///
/// let jump = Segment::jump(1, 1);
/// let slalom = Segment::slalom(2, Direction::Leeward);
/// assert_eq!(choose_child(&jump, &slalom), Side::Left);
/// ```
pub fn choose_child(left: &Segment, right: &Segment) -> Side {
    use SegmentKind::{Jump, Plain, Slalom};

    match (left.kind(), right.kind()) {
        (Jump { height: l }, Jump { height: r }) => {
            if r >= l {
                Side::Right
            } else {
                Side::Left
            }
        }
        (Jump { .. }, _) => Side::Left,
        (_, Jump { .. }) => Side::Right,
        (Slalom { .. }, Slalom { direction }) => {
            if direction.is_leeward() {
                Side::Right
            } else {
                Side::Left
            }
        }
        (Slalom { direction }, Plain) => {
            if direction.is_leeward() {
                Side::Left
            } else {
                Side::Right
            }
        }
        (Plain, Slalom { direction }) => {
            if direction.is_leeward() {
                Side::Right
            } else {
                Side::Left
            }
        }
        (Plain, Plain) => Side::Right,
    }
}

// =#========================================================================#=
// DESCENT
// =#========================================================================#=
/// Lazy iterator over the segments visited by the descent.
///
/// Yields the start segment first and the terminal (childless) segment last.
/// Created by [Descent::new] or [Descent::from_node].
pub struct Descent<'a> {
    hill: &'a SkiHill,
    cursor: Option<NodeIndex>,
}

impl<'a> Descent<'a> {
    /// Starts a descent at the root of `hill`; empty for an empty hill.
    pub fn new(hill: &'a SkiHill) -> Self {
        Descent {
            hill,
            cursor: hill.root_index(),
        }
    }

    /// Starts a descent at the node with the given index.
    ///
    /// # Panics
    /// Panics when iterated if `start` is out of bounds.
    pub fn from_node(hill: &'a SkiHill, start: NodeIndex) -> Self {
        Descent {
            hill,
            cursor: Some(start),
        }
    }

    /// Returns the next node index after `node`, or `None` at a terminal node.
    fn step(&self, node: &Node<Segment>) -> Option<NodeIndex> {
        match node.children() {
            (None, None) => None,
            (Some(only), None) | (None, Some(only)) => Some(only),
            (Some(left), Some(right)) => {
                let side = choose_child(self.hill.payload(left), self.hill.payload(right));
                trace!(node = node.index(), ?side, "choosing between two children");
                match side {
                    Side::Left => Some(left),
                    Side::Right => Some(right),
                }
            }
        }
    }
}

impl<'a> Iterator for Descent<'a> {
    type Item = &'a Segment;

    fn next(&mut self) -> Option<Self::Item> {
        let hill = self.hill;
        let node = &hill[self.cursor?];
        self.cursor = self.step(node);
        Some(node.payload())
    }
}

/// Computes the descent path from the root of `hill`.
///
/// Returns the visited segments in order, root first; empty for an empty hill.
///
/// # Example
/// ```
/// use skihill::{build_hill, select_path};
/// use skihill::model::Segment;
///
/// let hill = build_hill([Some(""), Some("jump-3"), Some("slalom-L")])?;
/// assert_eq!(select_path(&hill), vec![Segment::plain(0), Segment::jump(1, 3)]);
/// # Ok::<(), skihill::parser::ParsingError>(())
/// ```
pub fn select_path(hill: &SkiHill) -> Vec<Segment> {
    Descent::new(hill).copied().collect()
}

/// Computes the descent path starting at the node with index `start`.
///
/// # Panics
/// Panics if `start` is out of bounds.
pub fn select_path_from(hill: &SkiHill, start: NodeIndex) -> Vec<Segment> {
    Descent::from_node(hill, start).copied().collect()
}
