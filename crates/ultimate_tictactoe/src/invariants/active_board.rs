//! Active board invariant: the active flags agree with routing.

use super::Invariant;
use crate::{Game, Phase, Routing};

/// Invariant: the active flags match the phase.
///
/// - Routed to a board: exactly that board is active, and it is open.
/// - Free choice: exactly the open boards are active.
/// - Game over: no board is active.
pub struct ActiveBoardInvariant;

impl Invariant<Game> for ActiveBoardInvariant {
    fn holds(game: &Game) -> bool {
        let boards = game.boards();
        match game.phase() {
            Phase::AwaitingMove(Routing::Board(target)) => {
                boards[target].is_open()
                    && boards
                        .iter()
                        .enumerate()
                        .all(|(i, board)| board.is_active() == (i == target))
            }
            Phase::AwaitingMove(Routing::AnyOpen) => {
                boards.iter().any(|board| board.is_open())
                    && boards.iter().all(|board| board.is_active() == board.is_open())
            }
            Phase::GameOver(_) => boards.iter().all(|board| !board.is_active()),
        }
    }

    fn description() -> &'static str {
        "Active boards match routing (one routed board, every open board, or none)"
    }
}
