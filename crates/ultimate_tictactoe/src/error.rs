//! Error types for the engine.

use crate::Player;
use derive_more::{Display, Error};

/// Error that can occur when validating or applying a claim.
///
/// Every variant is a rejected input: the game state is left untouched and
/// the caller may simply try another move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// The board is not the one the last move routed to.
    #[display("Board {} is not active", board)]
    InactiveBoard {
        /// Board index.
        board: usize,
    },

    /// The board is already won or full.
    #[display("Board {} is already resolved", board)]
    BoardResolved {
        /// Board index.
        board: usize,
    },

    /// The square is already occupied.
    #[display("Square {} of board {} is already occupied", square, board)]
    SquareTaken {
        /// Board index.
        board: usize,
        /// Square index within the board.
        square: usize,
    },

    /// A board or square index outside 0..9.
    #[display("Index {} is out of range (must be 0-8)", index)]
    OutOfRange {
        /// The offending index.
        index: usize,
    },
}

/// An engine invariant does not hold.
///
/// This is a defect in the engine itself, never a consequence of user input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invariant violation: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}
