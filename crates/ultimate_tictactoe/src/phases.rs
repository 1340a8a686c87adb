//! Where the game stands: whose claim goes where, or how it ended.

use crate::Player;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Where the next claim must land.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Routing {
    /// Exactly this board is active.
    #[display("board {_0}")]
    Board(usize),
    /// Any open board may be played.
    #[display("any open board")]
    AnyOpen,
}

/// How a finished game ended.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Three won boards in a line.
    #[display("{_0} wins the meta-board")]
    Winner(Player),
    /// No board is open and no meta line is complete.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// The meta-board winner, `None` on a draw.
    pub fn winner(&self) -> Option<Player> {
        if let Outcome::Winner(player) = self {
            Some(*player)
        } else {
            None
        }
    }

    /// Whether nobody won.
    pub fn is_draw(&self) -> bool {
        *self == Outcome::Draw
    }
}

/// State of the turn/routing machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the current player to claim a square.
    AwaitingMove(Routing),
    /// Terminal; every further claim is rejected.
    GameOver(Outcome),
}
