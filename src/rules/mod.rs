//! Legality checks for pawn moves and fence placements.
//!
//! Everything here is read-only: validators inspect a `BoardState` and
//! return `Ok(())` or the `Rejection` that applies. The `Game` orchestrator
//! mutates state only after a validator has accepted the action.

pub mod error;
pub mod victory;
pub mod movement;
pub mod fences;

pub use error::Rejection;
pub use fences::{anchor_in_range, legal_fence_placements, validate_fence};
pub use movement::{legal_pawn_moves, validate_move, MoveShape};
pub use victory::{check_turn, has_reached_goal};
