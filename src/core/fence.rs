//! Fence segments and the set of placed fences.
//!
//! Fences are one cell wide. A fence is registered at an *anchor* coordinate:
//!
//! - Horizontal at `(x, y)`: blocks crossing between row `y - 1` and row `y`
//!   in column `x`.
//! - Vertical at `(x, y)`: blocks crossing between column `x - 1` and column
//!   `x` in row `y`.
//!
//! In both cases the anchor is the cell on the higher-index side of the
//! boundary, so the same rule locates the fence for movement in either
//! direction.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use super::coord::Coord;

/// Fence orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    /// Lies along a row boundary; blocks vertical movement.
    Horizontal,
    /// Lies along a column boundary; blocks horizontal movement.
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "h"),
            Orientation::Vertical => write!(f, "v"),
        }
    }
}

/// A single fence segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fence {
    pub orientation: Orientation,
    pub anchor: Coord,
}

impl Fence {
    #[must_use]
    pub const fn new(orientation: Orientation, anchor: Coord) -> Self {
        Self { orientation, anchor }
    }

    #[must_use]
    pub const fn horizontal(col: i32, row: i32) -> Self {
        Self::new(Orientation::Horizontal, Coord::new(col, row))
    }

    #[must_use]
    pub const fn vertical(col: i32, row: i32) -> Self {
        Self::new(Orientation::Vertical, Coord::new(col, row))
    }

    /// The fence that would sit on the boundary between two orthogonally
    /// adjacent cells. `None` if the cells are not orthogonal neighbours.
    #[must_use]
    pub fn between(a: Coord, b: Coord) -> Option<Fence> {
        match a.delta_to(b) {
            (0, 1) | (0, -1) => Some(Fence::horizontal(a.col, a.row.max(b.row))),
            (1, 0) | (-1, 0) => Some(Fence::vertical(a.col.max(b.col), a.row)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Fence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.orientation, self.anchor)
    }
}

/// All placed fences, one persistent set per orientation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FenceSet {
    horizontal: OrdSet<Coord>,
    vertical: OrdSet<Coord>,
}

impl FenceSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn anchors(&self, orientation: Orientation) -> &OrdSet<Coord> {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }

    #[must_use]
    pub fn contains(&self, fence: Fence) -> bool {
        self.anchors(fence.orientation).contains(&fence.anchor)
    }

    /// True if a fence sits on the boundary between adjacent cells `a` and `b`.
    #[must_use]
    pub fn blocks(&self, a: Coord, b: Coord) -> bool {
        Fence::between(a, b).is_some_and(|fence| self.contains(fence))
    }

    /// Returns false if the fence was already present.
    pub(crate) fn insert(&mut self, fence: Fence) -> bool {
        let set = match fence.orientation {
            Orientation::Horizontal => &mut self.horizontal,
            Orientation::Vertical => &mut self.vertical,
        };
        set.insert(fence.anchor).is_none()
    }

    /// Anchors of one orientation, in coordinate order.
    pub fn iter(&self, orientation: Orientation) -> impl Iterator<Item = Coord> + '_ {
        self.anchors(orientation).iter().copied()
    }

    /// Every placed fence, horizontal first.
    pub fn all(&self) -> impl Iterator<Item = Fence> + '_ {
        self.horizontal
            .iter()
            .map(|&a| Fence::new(Orientation::Horizontal, a))
            .chain(self.vertical.iter().map(|&a| Fence::new(Orientation::Vertical, a)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.horizontal.len() + self.vertical.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
