//! Board coordinates.
//!
//! A `Coord` is a `(column, row)` pair. Any integer pair is representable so
//! that requests pointing off the board can be rejected by the rules instead
//! of being impossible to express at the API boundary.

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 9;

/// Largest valid column or row index.
pub const MAX_INDEX: i32 = BOARD_SIZE - 1;

/// A `(column, row)` board coordinate.
///
/// Ordering is column-major, which gives fence listings a stable order.
///
/// ```
/// use quoridor_engine::core::Coord;
///
/// let c = Coord::new(4, 0);
/// assert!(c.is_on_board());
/// assert_eq!(c.offset(0, 1), Coord::new(4, 1));
/// assert!(!Coord::new(9, 0).is_on_board());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub col: i32,
    pub row: i32,
}

impl Coord {
    #[must_use]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// True if both components lie in `0..BOARD_SIZE`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.col >= 0 && self.col <= MAX_INDEX && self.row >= 0 && self.row <= MAX_INDEX
    }

    /// The coordinate displaced by `(dcol, drow)`.
    #[must_use]
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self::new(self.col + dcol, self.row + drow)
    }

    /// Displacement from `self` to `other` as `(dcol, drow)`.
    #[must_use]
    pub const fn delta_to(self, other: Coord) -> (i32, i32) {
        (other.col - self.col, other.row - self.row)
    }

    /// `(row, col)` array indices. Only meaningful for on-board coordinates.
    pub(crate) fn grid_index(self) -> (usize, usize) {
        debug_assert!(self.is_on_board(), "{self} is off the board");
        (self.row as usize, self.col as usize)
    }

    /// Iterate over every on-board coordinate, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(col, row)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((col, row): (i32, i32)) -> Self {
        Self::new(col, row)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board_bounds() {
        assert!(Coord::new(0, 0).is_on_board());
        assert!(Coord::new(8, 8).is_on_board());
        assert!(!Coord::new(-1, 4).is_on_board());
        assert!(!Coord::new(4, 9).is_on_board());
    }

    #[test]
    fn test_delta_and_offset() {
        let from = Coord::new(4, 3);
        let to = from.offset(-1, 2);
        assert_eq!(to, Coord::new(3, 5));
        assert_eq!(from.delta_to(to), (-1, 2));
    }

    #[test]
    fn test_all_covers_board() {
        let cells: Vec<_> = Coord::all().collect();
        assert_eq!(cells.len(), 81);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[9], Coord::new(0, 1));
        assert!(cells.iter().all(|c| c.is_on_board()));
    }

    #[test]
    fn test_from_tuple_and_display() {
        let c: Coord = (2, 7).into();
        assert_eq!(c, Coord::new(2, 7));
        assert_eq!(format!("{}", c), "(2, 7)");
    }
}
