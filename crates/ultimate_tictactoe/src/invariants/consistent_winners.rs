//! Consistent winners invariant: recorded winners match the grid.

use super::Invariant;
use crate::{Game, rules};

/// Invariant: winners are recorded exactly when a line is complete.
///
/// A board records a winner iff one of its lines is complete, and the
/// recorded winner owns a complete line. The meta winner, when set, owns a
/// line of board winners.
pub struct ConsistentWinnersInvariant;

impl Invariant<Game> for ConsistentWinnersInvariant {
    fn holds(game: &Game) -> bool {
        let boards_ok = game.boards().iter().all(|board| {
            let tokens = board.tokens();
            match board.winner() {
                None => rules::winning_line(&tokens).is_none(),
                Some(winner) => rules::has_line(&tokens, winner),
            }
        });

        let meta_ok = match game.meta_winner() {
            None => true,
            Some(winner) => rules::has_line(&game.board_winners(), winner),
        };

        boards_ok && meta_ok
    }

    fn description() -> &'static str {
        "Recorded winners own a complete line"
    }
}
