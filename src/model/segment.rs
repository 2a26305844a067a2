//! Segment module for ski hill representation.

use std::fmt;

/// Position of a descriptor in the input array, kept on each [Segment].
pub type SegmentId = usize;

// =#========================================================================#=
// DIRECTION
// =#========================================================================#=
/// Turn direction of a slalom segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Leeward turn, encoded as `L`
    Leeward,
    /// Windward turn, encoded as `W`
    Windward,
}

impl Direction {
    /// Returns the single-letter code of this direction.
    pub fn code(&self) -> &'static str {
        match self {
            Direction::Leeward => "L",
            Direction::Windward => "W",
        }
    }

    /// Returns the direction for a single-letter code (`L` or `W`), else `None`.
    pub fn from_code(code: &str) -> Option<Direction> {
        match code {
            "L" => Some(Direction::Leeward),
            "W" => Some(Direction::Windward),
            _ => None,
        }
    }

    /// Returns `true` for [Direction::Leeward].
    pub fn is_leeward(&self) -> bool {
        matches!(self, Direction::Leeward)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// =#========================================================================#=
// SEGMENT KIND
// =#========================================================================#=
/// What a segment of the hill is.
///
/// - **Plain**: regular stretch without attributes
/// - **Jump**: carries the jump `height`
/// - **Slalom**: carries the turn `direction`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Regular segment
    Plain,
    /// Jump segment
    Jump {
        /// Height of the jump
        height: i64,
    },
    /// Slalom segment
    Slalom {
        /// Turn direction of the slalom
        direction: Direction,
    },
}

// =#========================================================================#=
// SEGMENT
// =#========================================================================#=
/// A single segment of the hill, i.e. the payload of one tree node.
///
/// # Invariants
/// - `id` is the index of the descriptor this segment was parsed from;
///   it is informational only and never compared during descent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    id: SegmentId,
    kind: SegmentKind,
}

impl Segment {
    /// Creates a new segment of the given kind.
    pub fn new(id: SegmentId, kind: SegmentKind) -> Self {
        Segment { id, kind }
    }

    /// Creates a plain segment.
    pub fn plain(id: SegmentId) -> Self {
        Self::new(id, SegmentKind::Plain)
    }

    /// Creates a jump segment with the given height.
    pub fn jump(id: SegmentId, height: i64) -> Self {
        Self::new(id, SegmentKind::Jump { height })
    }

    /// Creates a slalom segment with the given direction.
    pub fn slalom(id: SegmentId, direction: Direction) -> Self {
        Self::new(id, SegmentKind::Slalom { direction })
    }

    /// Returns the id (descriptor position) of this segment.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Returns the kind of this segment.
    pub fn kind(&self) -> &SegmentKind {
        &self.kind
    }

    /// Returns `true` if this is a plain segment.
    pub fn is_plain(&self) -> bool {
        matches!(self.kind, SegmentKind::Plain)
    }

    /// Returns `true` if this is a jump segment.
    pub fn is_jump(&self) -> bool {
        matches!(self.kind, SegmentKind::Jump { .. })
    }

    /// Returns `true` if this is a slalom segment.
    pub fn is_slalom(&self) -> bool {
        matches!(self.kind, SegmentKind::Slalom { .. })
    }

    /// Returns the jump height if this is a jump, else `None`.
    pub fn height(&self) -> Option<i64> {
        match self.kind {
            SegmentKind::Jump { height } => Some(height),
            _ => None,
        }
    }

    /// Returns the slalom direction if this is a slalom, else `None`.
    pub fn direction(&self) -> Option<Direction> {
        match self.kind {
            SegmentKind::Slalom { direction } => Some(direction),
            _ => None,
        }
    }
}

/// Writes the canonical descriptor token: `""`, `jump-<h>` or `slalom-<L|W>`.
impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SegmentKind::Plain => Ok(()),
            SegmentKind::Jump { height } => write!(f, "jump-{height}"),
            SegmentKind::Slalom { direction } => write!(f, "slalom-{direction}"),
        }
    }
}
