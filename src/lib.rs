//! Skihill is a library to build ski hills from level-order segment
//! descriptors and to find the greedy descent through them.
//!
//! Core functionality provided:
//! - Segments: Descriptor tokens are classified into plain segments (`""`),
//!   jumps (`"jump-<height>"`) and slaloms (`"slalom-L"`, `"slalom-W"`).
//!   Malformed jump or slalom tokens are rejected with their position.
//! - Tree builder: A flat, breadth-first encoding with `None` gaps is turned
//!   into a binary tree, see [model::build_level_order].
//! - Tree model: [SkiHill] is a [BinaryTree] of [Segment]s using the arena
//!   pattern, so no direct node references are stored, only node indices.
//!   See [crate::model] for more details.
//! - Descent: From the root, the descent repeatedly moves to one child,
//!   preferring jumps (higher ones, ties to the right), then leeward slaloms,
//!   until it reaches a node without children. See [crate::descent].
//! - Configurability: Unrecognized non-empty tokens are plain by default or
//!   rejected on request, see [HillBuilder].
//!
//! # Usage patterns
//! 1. [build_hill] and [select_path] for default settings.
//! 2. Configure a [HillBuilder] for control over token classification, and use
//!    [Descent](descent::Descent) to walk the path lazily.
//!
//! ## Example
//! ```
//! use skihill::{build_hill, select_path};
//! use skihill::model::{Direction, Segment};
//!
//! let hill = build_hill([
//!     Some(""),
//!     Some("slalom-W"), Some("slalom-L"),
//!     None, None, Some(""), Some("jump-9"),
//! ])?;
//!
//! let path = select_path(&hill);
//! assert_eq!(path, vec![
//!     Segment::plain(0),
//!     Segment::slalom(2, Direction::Leeward),
//!     Segment::jump(6, 9),
//! ]);
//! # Ok::<(), skihill::parser::ParsingError>(())
//! ```
//!
//! Limitations:
//! - Hills are built once and not modified afterwards
//! - Descent is greedy; subtrees not chosen are never explored

pub mod descent;
pub mod hill;
pub mod model;
pub mod parser;

pub use crate::descent::select_path;
pub use crate::hill::HillBuilder;
pub use crate::model::{BinaryTree, Segment, SkiHill};
use crate::parser::parsing_error::ParsingError;

// ============================================================================
// Quick API
// ============================================================================
/// Builds a [SkiHill] from level-order descriptors using default settings.
///
/// `None` marks the absence of a node. Unrecognized non-empty tokens are
/// treated as plain segments.
///
/// See [`HillBuilder::build`] for full documentation.
pub fn build_hill<I, S>(descriptors: I) -> Result<SkiHill, ParsingError>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    HillBuilder::new().build(descriptors)
}
