//! Core domain types: players and squares.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Dense index for per-player tables (X = 0, O = 1).
    pub(crate) fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }
}

/// A single claimable cell of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unclaimed.
    #[default]
    Empty,
    /// Claimed by a player.
    Occupied(Player),
}

impl Square {
    /// Claims this square for `player`.
    ///
    /// Returns `false` and leaves the square untouched if it is already
    /// occupied. Every higher layer routes its mutations through here and
    /// must not advance the turn on `false`.
    #[instrument(level = "trace")]
    pub fn claim(&mut self, player: Player) -> bool {
        match self {
            Square::Occupied(_) => false,
            Square::Empty => {
                *self = Square::Occupied(player);
                true
            }
        }
    }

    /// The token on this square, if any.
    pub fn token(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is unclaimed.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claim_empty_square() {
        let mut square = Square::default();
        assert!(square.claim(Player::X));
        assert_eq!(square.token(), Some(Player::X));
    }

    #[test]
    fn test_claim_taken_square_is_noop() {
        let mut square = Square::default();
        assert!(square.claim(Player::O));
        assert!(!square.claim(Player::X));
        assert!(!square.claim(Player::O));
        assert_eq!(square.token(), Some(Player::O));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("x".parse::<Player>().ok(), Some(Player::X));
        assert_eq!("O".parse::<Player>().ok(), Some(Player::O));
        assert!("z".parse::<Player>().is_err());
    }
}
