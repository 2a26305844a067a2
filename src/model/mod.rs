//! Data model for ski hills.
//!
//! # Tree representation
//! Trees are represented by [BinaryTree], which uses the arena pattern to
//! store [Node]s, referenced by [NodeIndex]. Each node holds one payload
//! and an optional left and right child.
//!
//! A hill is the concrete tree type [SkiHill], a [BinaryTree] of [Segment]s.
//! Each segment is either plain, a jump with a height, or a slalom with a
//! [Direction].
//!
//! # Building trees
//! [build_level_order] builds any [BinaryTree] from its breadth-first
//! encoding with `None` gaps. Use [HillBuilder](crate::HillBuilder) to go
//! straight from descriptor strings to a [SkiHill].

pub mod level_order_builder;
pub mod node;
pub mod segment;
pub mod tree;

// Tree (generic)
pub use level_order_builder::build_level_order;
pub use node::Node;
pub use node::Side;
pub use tree::BinaryTree;
pub use tree::NodeIndex;
// Ski hill
pub use segment::Direction;
pub use segment::Segment;
pub use segment::SegmentId;
pub use segment::SegmentKind;
pub use tree::SkiHill;
