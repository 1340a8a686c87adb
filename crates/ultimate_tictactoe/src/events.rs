//! Notifications produced by a successful claim.
//!
//! A claim runs its whole cascade synchronously and hands back a
//! [`MoveReport`] listing what changed, in order. Front ends poll the report
//! (or forward its events to their own subscribers) instead of observing the
//! engine.

use crate::{Outcome, Player, Routing};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Something that changed while a claim resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A square was claimed.
    BoardClaimed {
        /// Board index.
        board: usize,
        /// Square index within the board.
        square: usize,
        /// Who claimed it.
        player: Player,
    },
    /// A board got its winner.
    BoardWon {
        /// Board index.
        board: usize,
        /// The board's winner.
        player: Player,
    },
    /// Routing moved to another board (or opened up).
    ActiveBoardChanged(Routing),
    /// The turn passed to this player.
    TurnChanged(Player),
    /// The AI's move was queued for the scheduler.
    OpponentScheduled,
    /// The game ended.
    GameOver(Outcome),
}

/// Structured result of one successful claim.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct MoveReport {
    /// Board index that was claimed on.
    board: usize,
    /// Square index that was claimed.
    square: usize,
    /// Who claimed it.
    player: Player,
    /// Events in emission order.
    #[new(default)]
    events: Vec<GameEvent>,
}

impl MoveReport {
    pub(crate) fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// The outcome, if this claim ended the game.
    pub fn game_over(&self) -> Option<Outcome> {
        self.events.iter().find_map(|event| match event {
            GameEvent::GameOver(outcome) => Some(*outcome),
            _ => None,
        })
    }

    /// The board this claim won, if any.
    pub fn board_won(&self) -> Option<usize> {
        self.events.iter().find_map(|event| match event {
            GameEvent::BoardWon { board, .. } => Some(*board),
            _ => None,
        })
    }

    /// Whether the claim queued an AI move.
    pub fn opponent_scheduled(&self) -> bool {
        self.events.contains(&GameEvent::OpponentScheduled)
    }
}
