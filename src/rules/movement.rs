//! Pawn move legality.
//!
//! A move is classified by its displacement from the mover's square:
//!
//! | Shape      | Displacement          | Legal when                                    |
//! |------------|-----------------------|-----------------------------------------------|
//! | `Step`     | 1 along one axis      | no fence on the boundary, target empty        |
//! | `Jump`     | 2 along one axis      | opponent on the midpoint, boundaries open     |
//! | `Diagonal` | 1 along both axes     | opponent beside mover with a fence behind it  |
//!
//! Anything else is rejected outright.

use smallvec::SmallVec;

use crate::core::{BoardState, Coord, Player, RulesConfig};

use super::error::Rejection;
use super::victory::check_turn;

/// Displacements a pawn can possibly make: steps, jumps, diagonals.
#[rustfmt::skip]
const CANDIDATE_OFFSETS: [(i32, i32); 12] = [
    (0, 1), (0, -1), (1, 0), (-1, 0),
    (0, 2), (0, -2), (2, 0), (-2, 0),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];

/// Recognised pawn move shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveShape {
    /// One cell along a single axis.
    Step,
    /// Two cells along a single axis, over the opponent.
    Jump,
    /// One cell along both axes, around a fenced-in opponent.
    Diagonal,
}

impl MoveShape {
    /// Classify the displacement `from -> to`. `None` for any other offset,
    /// including zero.
    #[must_use]
    pub fn classify(from: Coord, to: Coord) -> Option<MoveShape> {
        match from.delta_to(to) {
            (0, d) | (d, 0) if d.abs() == 1 => Some(MoveShape::Step),
            (0, d) | (d, 0) if d.abs() == 2 => Some(MoveShape::Jump),
            (dc, dr) if dc.abs() == 1 && dr.abs() == 1 => Some(MoveShape::Diagonal),
            _ => None,
        }
    }
}

/// Check whether `player` may move their pawn to `to`. Never mutates.
pub fn validate_move(
    state: &BoardState,
    config: &RulesConfig,
    player: Player,
    to: Coord,
) -> Result<(), Rejection> {
    check_turn(state, player)?;

    let from = state.pawn(player);
    if to == from {
        return Err(Rejection::SameSquare);
    }
    if !to.is_on_board() {
        return Err(Rejection::OutOfBounds);
    }

    match MoveShape::classify(from, to).ok_or(Rejection::ShapeUnrecognized)? {
        MoveShape::Step => check_step(state, from, to),
        MoveShape::Jump => check_jump(state, config, player, from, to),
        MoveShape::Diagonal => check_diagonal(state, player, from, to),
    }
}

fn check_step(state: &BoardState, from: Coord, to: Coord) -> Result<(), Rejection> {
    if state.fences().blocks(from, to) {
        return Err(Rejection::PathBlocked);
    }
    if state.cell(to).is_some_and(|cell| !cell.is_empty()) {
        return Err(Rejection::SquareOccupied);
    }
    Ok(())
}

fn check_jump(
    state: &BoardState,
    config: &RulesConfig,
    player: Player,
    from: Coord,
    to: Coord,
) -> Result<(), Rejection> {
    let (dc, dr) = from.delta_to(to);
    let mid = from.offset(dc / 2, dr / 2);

    if !state.is_pawn_at(player.opponent(), mid) {
        return Err(Rejection::OpponentMissingForJump);
    }
    let fences = state.fences();
    if fences.blocks(from, mid) {
        return Err(Rejection::PathBlocked);
    }
    if config.jump_checks_far_boundary && fences.blocks(mid, to) {
        return Err(Rejection::PathBlocked);
    }
    Ok(())
}

fn check_diagonal(state: &BoardState, player: Player, from: Coord, to: Coord) -> Result<(), Rejection> {
    let (dc, dr) = from.delta_to(to);
    let opponent = player.opponent();

    // The opponent must sit on one of the two cells between mover and target.
    let Some(pivot) = [from.offset(dc, 0), from.offset(0, dr)]
        .into_iter()
        .find(|&c| state.is_pawn_at(opponent, c))
    else {
        return Err(Rejection::OpponentMissingForJump);
    };

    let fences = state.fences();
    let (pc, pr) = from.delta_to(pivot);
    if !fences.blocks(pivot, pivot.offset(pc, pr)) {
        return Err(Rejection::StraightJumpOpen);
    }
    if fences.blocks(pivot, to) {
        return Err(Rejection::PathBlocked);
    }
    Ok(())
}

/// Every destination `player` could legally move to right now.
///
/// Empty when it is not `player`'s turn or the game is over.
#[must_use]
pub fn legal_pawn_moves(state: &BoardState, config: &RulesConfig, player: Player) -> SmallVec<[Coord; 8]> {
    let from = state.pawn(player);
    CANDIDATE_OFFSETS
        .iter()
        .map(|&(dc, dr)| from.offset(dc, dr))
        .filter(|&to| validate_move(state, config, player, to).is_ok())
        .collect()
}
