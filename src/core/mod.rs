//! Core engine types: coordinates, players, fences, actions, configuration,
//! and the board state they make up.
//!
//! Nothing in this module decides legality; see `rules` for that.

pub mod coord;
pub mod player;
pub mod fence;
pub mod config;
pub mod action;
pub mod state;

pub use coord::{Coord, BOARD_SIZE, MAX_INDEX};
pub use player::{Player, PlayerMap};
pub use fence::{Fence, FenceSet, Orientation};
pub use config::RulesConfig;
pub use action::Action;
pub use state::{BoardState, Cell, Grid};
