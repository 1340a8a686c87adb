//! Balanced turns invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{Game, Player};

/// Invariant: X has made as many claims as O, or exactly one more.
///
/// While the game is running, the player to move follows from the counts:
/// X on equal counts, O otherwise.
pub struct BalancedTurnsInvariant;

impl Invariant<Game> for BalancedTurnsInvariant {
    fn holds(game: &Game) -> bool {
        let tokens = game.boards().iter().flat_map(|board| board.tokens());
        let (x_count, o_count) = tokens.fold((0usize, 0usize), |(x, o), token| match token {
            Some(Player::X) => (x + 1, o),
            Some(Player::O) => (x, o + 1),
            None => (x, o),
        });

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }
        if game.is_over() {
            return true;
        }
        let expected_next = if x_count == o_count { Player::X } else { Player::O };
        game.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RuleSettings;

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = Game::new(RuleSettings::default());
        game.attempt_claim(4, 1, Player::X).expect("legal move");
        assert!(BalancedTurnsInvariant::holds(&game));
        game.attempt_claim(1, 4, Player::O).expect("legal move");
        assert!(BalancedTurnsInvariant::holds(&game));
    }

    #[test]
    fn test_extra_claim_violates() {
        let mut game = Game::new(RuleSettings::default());
        game.attempt_claim(4, 1, Player::X).expect("legal move");
        assert!(game.boards_mut()[8].claim(0, Player::X).succeeded());
        assert!(!BalancedTurnsInvariant::holds(&game));
    }
}
