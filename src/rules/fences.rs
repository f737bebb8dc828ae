//! Fence placement legality.
//!
//! Only same-orientation duplicates count as overlap. Crossing fences of
//! the other orientation, and placements that wall a pawn off from its goal
//! row, are accepted.

use crate::core::{BoardState, Coord, Fence, Orientation, Player, BOARD_SIZE, MAX_INDEX};

use super::error::Rejection;
use super::victory::check_turn;

/// True if `fence` has an anchor this orientation can use: the crossing axis
/// in `1..=8` (there is no boundary on the outer edge) and the other axis on
/// the board.
#[must_use]
pub fn anchor_in_range(fence: Fence) -> bool {
    let Coord { col, row } = fence.anchor;
    let (crossing, along) = match fence.orientation {
        Orientation::Horizontal => (row, col),
        Orientation::Vertical => (col, row),
    };
    (1..=MAX_INDEX).contains(&crossing) && (0..=MAX_INDEX).contains(&along)
}

/// Check whether `player` may place `fence`. Never mutates.
pub fn validate_fence(state: &BoardState, player: Player, fence: Fence) -> Result<(), Rejection> {
    check_turn(state, player)?;

    if state.fences_remaining(player) == 0 {
        return Err(Rejection::NoFencesRemaining);
    }
    if !anchor_in_range(fence) {
        return Err(Rejection::OutOfBounds);
    }
    if state.fences().contains(fence) {
        return Err(Rejection::DuplicateFence);
    }
    Ok(())
}

/// Every fence `player` could legally place right now.
#[must_use]
pub fn legal_fence_placements(state: &BoardState, player: Player) -> Vec<Fence> {
    if check_turn(state, player).is_err() || state.fences_remaining(player) == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(2 * (BOARD_SIZE * MAX_INDEX) as usize);
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        out.extend(
            Coord::all()
                .map(|anchor| Fence::new(orientation, anchor))
                .filter(|&fence| anchor_in_range(fence) && !state.fences().contains(fence)),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_range() {
        assert!(anchor_in_range(Fence::vertical(1, 0)));
        assert!(anchor_in_range(Fence::vertical(8, 8)));
        assert!(!anchor_in_range(Fence::vertical(0, 4)));
        assert!(!anchor_in_range(Fence::vertical(9, 4)));
        assert!(!anchor_in_range(Fence::vertical(4, 9)));

        assert!(anchor_in_range(Fence::horizontal(0, 1)));
        assert!(!anchor_in_range(Fence::horizontal(4, 0)));
        assert!(!anchor_in_range(Fence::horizontal(4, 9)));
        assert!(!anchor_in_range(Fence::horizontal(-1, 4)));
    }

    #[test]
    fn test_validate_fence() {
        let mut state = BoardState::default();
        assert_eq!(validate_fence(&state, Player::A, Fence::horizontal(4, 1)), Ok(()));
        assert_eq!(
            validate_fence(&state, Player::B, Fence::horizontal(4, 1)),
            Err(Rejection::NotYourTurn)
        );
        assert_eq!(
            validate_fence(&state, Player::A, Fence::horizontal(4, 0)),
            Err(Rejection::OutOfBounds)
        );

        state.add_fence(Player::A, Fence::horizontal(4, 1));
        assert_eq!(
            validate_fence(&state, Player::A, Fence::horizontal(4, 1)),
            Err(Rejection::DuplicateFence)
        );
        // Same anchor, other orientation: not a duplicate.
        assert_eq!(validate_fence(&state, Player::A, Fence::vertical(4, 1)), Ok(()));
    }

    #[test]
    fn test_budget_exhausted() {
        let mut state = BoardState::new(1);
        state.add_fence(Player::A, Fence::vertical(2, 2));
        assert_eq!(
            validate_fence(&state, Player::A, Fence::vertical(3, 3)),
            Err(Rejection::NoFencesRemaining)
        );
        assert!(legal_fence_placements(&state, Player::A).is_empty());
    }

    #[test]
    fn test_legal_fence_placements() {
        let mut state = BoardState::default();
        // 8 crossing positions x 9 along positions, per orientation.
        assert_eq!(legal_fence_placements(&state, Player::A).len(), 144);
        assert!(legal_fence_placements(&state, Player::B).is_empty());

        state.add_fence(Player::A, Fence::vertical(5, 5));
        let placements = legal_fence_placements(&state, Player::A);
        assert_eq!(placements.len(), 143);
        assert!(!placements.contains(&Fence::vertical(5, 5)));
    }
}
