//! Action representation.
//!
//! An `Action` is what a player asks the engine to do on their turn: move
//! the pawn or place a fence. Actions carry no player; the caller supplies
//! the acting player alongside.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::fence::{Fence, Orientation};

/// A single turn's action.
///
/// ```
/// use quoridor_engine::core::{Action, Coord, Orientation};
///
/// let step = Action::move_pawn((4, 1));
/// assert_eq!(step, Action::MovePawn { to: Coord::new(4, 1) });
///
/// let wall = Action::place_fence(Orientation::Vertical, (3, 2));
/// assert!(wall.is_fence());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the pawn to `to`.
    MovePawn { to: Coord },
    /// Place a fence segment.
    PlaceFence { orientation: Orientation, anchor: Coord },
}

impl Action {
    #[must_use]
    pub fn move_pawn(to: impl Into<Coord>) -> Self {
        Action::MovePawn { to: to.into() }
    }

    #[must_use]
    pub fn place_fence(orientation: Orientation, anchor: impl Into<Coord>) -> Self {
        Action::PlaceFence {
            orientation,
            anchor: anchor.into(),
        }
    }

    #[must_use]
    pub fn is_fence(&self) -> bool {
        matches!(self, Action::PlaceFence { .. })
    }

    /// The fence this action would place, if any.
    #[must_use]
    pub fn fence(&self) -> Option<Fence> {
        match *self {
            Action::PlaceFence { orientation, anchor } => Some(Fence::new(orientation, anchor)),
            Action::MovePawn { .. } => None,
        }
    }
}

impl From<Fence> for Action {
    fn from(fence: Fence) -> Self {
        Action::PlaceFence {
            orientation: fence.orientation,
            anchor: fence.anchor,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::MovePawn { to } => write!(f, "move {}", to),
            Action::PlaceFence { orientation, anchor } => write!(f, "fence {}{}", orientation, anchor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(Action::move_pawn((2, 3)), Action::MovePawn { to: Coord::new(2, 3) });
        assert_eq!(
            Action::place_fence(Orientation::Horizontal, (1, 1)),
            Action::from(Fence::horizontal(1, 1))
        );
    }

    #[test]
    fn test_fence_accessor() {
        assert_eq!(Action::move_pawn((0, 0)).fence(), None);
        assert_eq!(
            Action::place_fence(Orientation::Vertical, (5, 6)).fence(),
            Some(Fence::vertical(5, 6))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Action::move_pawn((4, 1))), "move (4, 1)");
        assert_eq!(
            format!("{}", Action::place_fence(Orientation::Horizontal, (4, 1))),
            "fence h(4, 1)"
        );
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::place_fence(Orientation::Vertical, (8, 0));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();
        assert_eq!(action, deserialized);
    }
}
