//! Action orchestrator.
//!
//! `Game` owns the board state and is the only writer to it. Every action
//! follows the same path: validate, then mutate, then (for pawn moves)
//! check for a winner, then pass the turn. A rejected action changes
//! nothing.

use log::{debug, info, trace};
use smallvec::SmallVec;

use crate::core::{Action, BoardState, Cell, Coord, Fence, FenceSet, Grid, Orientation, Player, RulesConfig};
use crate::rules::{self, Rejection};

/// Start a game with the default rules.
#[must_use]
pub fn new_game() -> Game {
    Game::new()
}

/// A single game in progress.
///
/// ```
/// use quoridor_engine::{new_game, Player, Orientation};
///
/// let mut game = new_game();
/// assert!(game.move_pawn(Player::A, (4, 1)));
/// assert!(!game.move_pawn(Player::A, (4, 2))); // B's turn
/// assert!(game.place_fence(Player::B, Orientation::Horizontal, (4, 2)));
/// assert_eq!(game.fences_remaining(Player::B), 9);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    config: RulesConfig,
    state: BoardState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        let state = BoardState::new(config.fence_budget);
        Self { config, state }
    }

    // === Actions ===

    /// Move `player`'s pawn to `to`. Returns whether the move was accepted.
    pub fn move_pawn(&mut self, player: Player, to: impl Into<Coord>) -> bool {
        self.try_move_pawn(player, to).is_ok()
    }

    /// Place a fence for `player`. Returns whether the placement was accepted.
    pub fn place_fence(&mut self, player: Player, orientation: Orientation, anchor: impl Into<Coord>) -> bool {
        self.try_place_fence(player, orientation, anchor).is_ok()
    }

    /// Like `move_pawn`, but reports why a move was refused.
    pub fn try_move_pawn(&mut self, player: Player, to: impl Into<Coord>) -> Result<(), Rejection> {
        let to = to.into();
        rules::validate_move(&self.state, &self.config, player, to)
            .inspect_err(|reason| debug!("{player} move to {to} rejected: {reason}"))?;

        let from = self.state.pawn(player);
        self.state.relocate_pawn(player, to);
        trace!("{player} moved {from} -> {to}");

        if rules::has_reached_goal(&self.state, player) {
            self.state.declare_winner(player);
            info!("{player} reached row {} and wins after {} actions", to.row, self.state.ply() + 1);
        }
        self.state.end_turn();
        Ok(())
    }

    /// Like `place_fence`, but reports why a placement was refused.
    pub fn try_place_fence(
        &mut self,
        player: Player,
        orientation: Orientation,
        anchor: impl Into<Coord>,
    ) -> Result<(), Rejection> {
        let fence = Fence::new(orientation, anchor.into());
        rules::validate_fence(&self.state, player, fence)
            .inspect_err(|reason| debug!("{player} fence {fence} rejected: {reason}"))?;

        self.state.add_fence(player, fence);
        trace!(
            "{player} placed fence {fence}, {} remaining",
            self.state.fences_remaining(player)
        );
        self.state.end_turn();
        Ok(())
    }

    /// Apply any action for `player`.
    pub fn apply(&mut self, player: Player, action: &Action) -> Result<(), Rejection> {
        match *action {
            Action::MovePawn { to } => self.try_move_pawn(player, to),
            Action::PlaceFence { orientation, anchor } => self.try_place_fence(player, orientation, anchor),
        }
    }

    // === Queries ===

    /// True if `player`'s pawn stands on their goal row. Pure; the game-over
    /// transition already happened when the winning move was applied.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        rules::has_reached_goal(&self.state, player)
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// Check a move without applying it.
    pub fn validate_move(&self, player: Player, to: impl Into<Coord>) -> Result<(), Rejection> {
        rules::validate_move(&self.state, &self.config, player, to.into())
    }

    /// Check a fence placement without applying it.
    pub fn validate_fence(&self, player: Player, orientation: Orientation, anchor: impl Into<Coord>) -> Result<(), Rejection> {
        rules::validate_fence(&self.state, player, Fence::new(orientation, anchor.into()))
    }

    /// Destinations `player`'s pawn may move to now.
    #[must_use]
    pub fn legal_pawn_moves(&self, player: Player) -> SmallVec<[Coord; 8]> {
        rules::legal_pawn_moves(&self.state, &self.config, player)
    }

    /// Every action `player` may take now: pawn moves first, then fences.
    #[must_use]
    pub fn legal_actions(&self, player: Player) -> Vec<Action> {
        self.legal_pawn_moves(player)
            .into_iter()
            .map(|to| Action::MovePawn { to })
            .chain(rules::legal_fence_placements(&self.state, player).into_iter().map(Action::from))
            .collect()
    }

    // === Introspection ===

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Full read-only state snapshot.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.state.grid()
    }

    #[must_use]
    pub fn cell(&self, coord: impl Into<Coord>) -> Option<Cell> {
        self.state.cell(coord.into())
    }

    #[must_use]
    pub fn pawn(&self, player: Player) -> Coord {
        self.state.pawn(player)
    }

    #[must_use]
    pub fn fences(&self) -> &FenceSet {
        self.state.fences()
    }

    #[must_use]
    pub fn fences_remaining(&self, player: Player) -> u8 {
        self.state.fences_remaining(player)
    }

    #[must_use]
    pub fn turn(&self) -> Player {
        self.state.turn()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn ply(&self) -> u32 {
        self.state.ply()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_creation() {
        let game = new_game();
        assert_eq!(game.pawn(Player::A), Coord::new(4, 0));
        assert_eq!(game.pawn(Player::B), Coord::new(4, 8));
        assert_eq!(game.fences_remaining(Player::A), 10);
        assert_eq!(game.fences_remaining(Player::B), 10);
        assert_eq!(game.turn(), Player::A);
        assert!(!game.is_game_over());
        assert_eq!(game.cell((4, 0)), Some(Cell::Pawn(Player::A)));
    }

    #[test]
    fn test_custom_budget() {
        let game = Game::with_config(RulesConfig::default().with_fence_budget(3));
        assert_eq!(game.fences_remaining(Player::A), 3);
        assert_eq!(game.config().fence_budget, 3);
    }

    #[test]
    fn test_move_updates_state() {
        let mut game = new_game();
        assert_eq!(game.try_move_pawn(Player::A, (4, 1)), Ok(()));

        assert_eq!(game.pawn(Player::A), Coord::new(4, 1));
        assert_eq!(game.cell((4, 0)), Some(Cell::Empty));
        assert_eq!(game.cell((4, 1)), Some(Cell::Pawn(Player::A)));
        assert_eq!(game.turn(), Player::B);
        assert_eq!(game.ply(), 1);
    }

    #[test]
    fn test_rejected_action_changes_nothing() {
        let mut game = new_game();
        let before = game.state().clone();

        assert_eq!(game.try_move_pawn(Player::A, (4, 2)), Err(Rejection::OpponentMissingForJump));
        assert_eq!(
            game.try_place_fence(Player::B, Orientation::Vertical, (3, 3)),
            Err(Rejection::NotYourTurn)
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_fence_updates_state() {
        let mut game = new_game();
        assert!(game.place_fence(Player::A, Orientation::Vertical, (3, 3)));

        assert!(game.fences().contains(Fence::vertical(3, 3)));
        assert_eq!(game.fences_remaining(Player::A), 9);
        assert_eq!(game.turn(), Player::B);
        assert!(!game.is_game_over());
    }

    #[test]
    fn test_apply_dispatch() {
        let mut game = new_game();
        assert_eq!(game.apply(Player::A, &Action::move_pawn((3, 0))), Ok(()));
        assert_eq!(
            game.apply(Player::B, &Action::place_fence(Orientation::Horizontal, (0, 0))),
            Err(Rejection::OutOfBounds)
        );
        assert_eq!(game.apply(Player::B, &Action::place_fence(Orientation::Horizontal, (0, 1))), Ok(()));
        assert_eq!(game.turn(), Player::A);
    }

    #[test]
    fn test_validate_does_not_mutate() {
        let game = new_game();
        assert_eq!(game.validate_move(Player::A, (4, 1)), Ok(()));
        assert_eq!(game.validate_fence(Player::A, Orientation::Horizontal, (4, 1)), Ok(()));
        assert_eq!(game.turn(), Player::A);
        assert_eq!(game.ply(), 0);
    }

    #[test]
    fn test_legal_actions() {
        let game = new_game();
        let actions = game.legal_actions(Player::A);
        assert_eq!(actions.len(), 3 + 144);
        assert!(actions.contains(&Action::move_pawn((4, 1))));
        assert!(actions.contains(&Action::place_fence(Orientation::Vertical, (8, 8))));
        assert!(game.legal_actions(Player::B).is_empty());
    }
}
