//! Turn order and win detection.
//!
//! Turn state is two-valued and only ever flips after an accepted action.
//! Winning is reaching the goal row; these checks are pure and the
//! orchestrator performs the game-over transition itself.

use crate::core::{BoardState, Player};

use super::error::Rejection;

/// Accept only if the game is running and `player` holds the turn.
pub fn check_turn(state: &BoardState, player: Player) -> Result<(), Rejection> {
    if state.is_game_over() {
        return Err(Rejection::GameOver);
    }
    if state.turn() != player {
        return Err(Rejection::NotYourTurn);
    }
    Ok(())
}

/// True if `player`'s pawn stands on their goal row.
#[must_use]
pub fn has_reached_goal(state: &BoardState, player: Player) -> bool {
    state.pawn(player).row == player.goal_row()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Coord;

    #[test]
    fn test_check_turn() {
        let mut state = BoardState::default();
        assert_eq!(check_turn(&state, Player::A), Ok(()));
        assert_eq!(check_turn(&state, Player::B), Err(Rejection::NotYourTurn));

        state.end_turn();
        assert_eq!(check_turn(&state, Player::B), Ok(()));
        assert_eq!(check_turn(&state, Player::A), Err(Rejection::NotYourTurn));
    }

    #[test]
    fn test_game_over_rejects_everyone() {
        let mut state = BoardState::default();
        state.declare_winner(Player::A);
        assert_eq!(check_turn(&state, Player::A), Err(Rejection::GameOver));
        assert_eq!(check_turn(&state, Player::B), Err(Rejection::GameOver));
    }

    #[test]
    fn test_goal_rows() {
        let mut state = BoardState::default();
        assert!(!has_reached_goal(&state, Player::A));
        assert!(!has_reached_goal(&state, Player::B));

        state.relocate_pawn(Player::A, Coord::new(0, 8));
        state.relocate_pawn(Player::B, Coord::new(3, 0));
        assert!(has_reached_goal(&state, Player::A));
        assert!(has_reached_goal(&state, Player::B));
    }
}
