//! Rejection reasons.

use thiserror::Error;

/// Why the engine refused an action.
///
/// Every refusal leaves the game state untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("the game is already over")]
    GameOver,
    #[error("it is not this player's turn")]
    NotYourTurn,
    #[error("the pawn is already on that square")]
    SameSquare,
    #[error("coordinate is outside the valid range")]
    OutOfBounds,
    #[error("displacement is not a step, jump or diagonal")]
    ShapeUnrecognized,
    #[error("a fence blocks the path")]
    PathBlocked,
    #[error("the destination square is occupied")]
    SquareOccupied,
    #[error("no opponent pawn to jump over")]
    OpponentMissingForJump,
    #[error("diagonal steps need a fence behind the opponent")]
    StraightJumpOpen,
    #[error("no fences remaining")]
    NoFencesRemaining,
    #[error("a fence is already placed there")]
    DuplicateFence,
}
