//! Board state: the canonical mutable game data.
//!
//! `BoardState` holds:
//! - Grid occupancy (redundant with the pawn positions, kept in sync)
//! - Pawn positions
//! - Placed fences and remaining fence budgets
//! - Turn holder, winner / game-over flag, accepted-action count
//!
//! Reads are public. Writes are `pub(crate)` and only the `Game`
//! orchestrator calls them, after the rules have accepted an action.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::fence::{Fence, FenceSet};
use super::player::{Player, PlayerMap};

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Pawn(Player),
}

impl Cell {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 9×9 occupancy grid, indexed `[row][col]`.
pub type Grid = [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize];

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    grid: Grid,
    pawns: PlayerMap<Coord>,
    fences: FenceSet,
    fences_remaining: PlayerMap<u8>,
    turn: Player,
    winner: Option<Player>,
    ply: u32,
}

impl BoardState {
    /// Initial position: pawns on their start cells, no fences, A to move.
    #[must_use]
    pub fn new(fence_budget: u8) -> Self {
        let pawns = PlayerMap::new(Player::start);
        let mut grid = Grid::default();
        for (player, &pos) in pawns.iter() {
            let (r, c) = pos.grid_index();
            grid[r][c] = Cell::Pawn(player);
        }

        Self {
            grid,
            pawns,
            fences: FenceSet::new(),
            fences_remaining: PlayerMap::with_value(fence_budget),
            turn: Player::A,
            winner: None,
            ply: 0,
        }
    }

    // === Reads ===

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Occupancy at `coord`, or `None` if it is off the board.
    #[must_use]
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        if !coord.is_on_board() {
            return None;
        }
        let (r, c) = coord.grid_index();
        Some(self.grid[r][c])
    }

    /// True if `player`'s pawn stands on `coord`.
    #[must_use]
    pub fn is_pawn_at(&self, player: Player, coord: Coord) -> bool {
        self.cell(coord) == Some(Cell::Pawn(player))
    }

    #[must_use]
    pub fn pawn(&self, player: Player) -> Coord {
        self.pawns[player]
    }

    #[must_use]
    pub fn fences(&self) -> &FenceSet {
        &self.fences
    }

    #[must_use]
    pub fn fences_remaining(&self, player: Player) -> u8 {
        self.fences_remaining[player]
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn turn(&self) -> Player {
        self.turn
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Number of accepted actions so far.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    // === Writes (orchestrator only) ===

    /// Move `player`'s pawn, updating the grid and the coordinate together.
    pub(crate) fn relocate_pawn(&mut self, player: Player, to: Coord) {
        let (fr, fc) = self.pawns[player].grid_index();
        let (tr, tc) = to.grid_index();
        self.grid[fr][fc] = Cell::Empty;
        self.grid[tr][tc] = Cell::Pawn(player);
        self.pawns[player] = to;
    }

    /// Record a fence and charge it to `player`'s budget.
    pub(crate) fn add_fence(&mut self, player: Player, fence: Fence) {
        debug_assert!(self.fences_remaining[player] > 0);
        self.fences.insert(fence);
        self.fences_remaining[player] -= 1;
    }

    /// Pass the turn and count the action.
    pub(crate) fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        self.ply += 1;
    }

    /// Write-once transition to game over.
    pub(crate) fn declare_winner(&mut self, player: Player) {
        debug_assert!(self.winner.is_none(), "winner already declared");
        self.winner = Some(player);
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(super::config::RulesConfig::default().fence_budget)
    }
}
