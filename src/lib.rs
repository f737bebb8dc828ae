//! # quoridor-engine
//!
//! Rules engine for a two-player Quoridor variant on a 9×9 board with
//! single-cell fences.
//!
//! Each player advances a pawn from their home row toward the opposite edge
//! and may instead spend one of a limited supply of fences to obstruct the
//! opponent. The engine validates proposed actions, applies legal ones, and
//! reports the winner. Rendering, input and transport are left to the
//! caller.
//!
//! ## Design Principles
//!
//! 1. **Single writer**: `Game` is the only code that mutates `BoardState`,
//!    and only after a validator has accepted the action.
//!
//! 2. **Closed inputs**: players and fence orientations are enums, so
//!    malformed identifiers cannot reach the rules.
//!
//! 3. **Reasons, not just booleans**: validators return a `Rejection`. The
//!    boolean `move_pawn` / `place_fence` API is a thin wrapper.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, fences, actions, configuration, board state
//! - `rules`: Pure legality checks for moves, fences, turn and win
//! - `game`: The orchestrator owning one game's state

pub mod core;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Action, BoardState, Cell, Coord, Fence, FenceSet, Grid, Orientation, Player, PlayerMap, RulesConfig,
    BOARD_SIZE,
};

pub use crate::rules::{MoveShape, Rejection};

pub use crate::game::{new_game, Game};
