//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Closed two-valued enum. Player A starts on row 0 and races to row 8;
//! Player B starts on row 8 and races to row 0.
//!
//! ## PlayerMap
//!
//! Fixed two-entry storage indexed by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::{Coord, MAX_INDEX};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// Moves first. Starts at `(4, 0)`.
    A,
    /// Starts at `(4, 8)`.
    B,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::A, Player::B];

    /// Storage index (A = 0, B = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }

    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Starting pawn position.
    #[must_use]
    pub const fn start(self) -> Coord {
        match self {
            Player::A => Coord::new(4, 0),
            Player::B => Coord::new(4, MAX_INDEX),
        }
    }

    /// Row this player's pawn must reach to win.
    #[must_use]
    pub const fn goal_row(self) -> i32 {
        match self {
            Player::A => MAX_INDEX,
            Player::B => 0,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::A => write!(f, "Player A"),
            Player::B => write!(f, "Player B"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use quoridor_engine::core::{Player, PlayerMap};
///
/// let mut fences: PlayerMap<u8> = PlayerMap::with_value(10);
/// fences[Player::B] -= 1;
/// assert_eq!(fences[Player::A], 10);
/// assert_eq!(fences[Player::B], 9);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::A), factory(Player::B)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
