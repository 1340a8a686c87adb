//! Preconditions a claim must satisfy before the game mutates anything.

use crate::{BoardRule, Claim, Game, MoveError, Phase, Routing};
use tracing::instrument;

/// Precondition: the game is still awaiting moves.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    pub fn check(_claim: &Claim, game: &Game) -> Result<(), MoveError> {
        match game.phase() {
            Phase::GameOver(_) => Err(MoveError::GameOver),
            Phase::AwaitingMove(_) => Ok(()),
        }
    }
}

/// Precondition: both indices address a real cell.
pub struct InRange;

impl InRange {
    /// Fails with [`MoveError::OutOfRange`] for an index of 9 or more.
    pub fn check(claim: &Claim, _game: &Game) -> Result<(), MoveError> {
        [claim.board, claim.square]
            .into_iter()
            .find(|&index| index >= 9)
            .map_or(Ok(()), |index| Err(MoveError::OutOfRange { index }))
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with [`MoveError::WrongPlayer`] out of turn.
    pub fn check(claim: &Claim, game: &Game) -> Result<(), MoveError> {
        if claim.player != game.current_player() {
            Err(MoveError::WrongPlayer(claim.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the board accepts claims under the configured rule.
pub struct BoardEligible;

impl BoardEligible {
    /// Fails with [`MoveError::InactiveBoard`] or [`MoveError::BoardResolved`].
    pub fn check(claim: &Claim, game: &Game) -> Result<(), MoveError> {
        let board = &game.boards()[claim.board];
        match (game.settings().board_rule, game.routing()) {
            (BoardRule::Routed, Some(Routing::Board(active))) if active != claim.board => {
                Err(MoveError::InactiveBoard { board: claim.board })
            }
            (BoardRule::Routed, Some(Routing::AnyOpen)) if !board.is_open() => {
                Err(MoveError::BoardResolved { board: claim.board })
            }
            (BoardRule::AnyOpenBoard, _) if board.is_won() => {
                Err(MoveError::BoardResolved { board: claim.board })
            }
            _ => Ok(()),
        }
    }
}

/// Precondition: the square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareTaken`] on an occupied square.
    pub fn check(claim: &Claim, game: &Game) -> Result<(), MoveError> {
        let square = game.boards()[claim.board].squares()[claim.square];
        if square.is_empty() {
            Ok(())
        } else {
            Err(MoveError::SquareTaken {
                board: claim.board,
                square: claim.square,
            })
        }
    }
}

/// Composite precondition for a claim, checked in order.
pub struct LegalClaim;

impl LegalClaim {
    /// Validates all preconditions for a claim.
    #[instrument(skip(game))]
    pub fn check(claim: &Claim, game: &Game) -> Result<(), MoveError> {
        GameNotOver::check(claim, game)?;
        InRange::check(claim, game)?;
        PlayersTurn::check(claim, game)?;
        BoardEligible::check(claim, game)?;
        SquareIsEmpty::check(claim, game)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, RuleSettings};

    #[test]
    fn test_opening_claim_on_center_board_is_legal() {
        let game = Game::new(RuleSettings::default());
        assert_eq!(LegalClaim::check(&Claim::new(4, 0, Player::X), &game), Ok(()));
    }

    #[test]
    fn test_out_of_range() {
        let game = Game::new(RuleSettings::default());
        assert_eq!(
            LegalClaim::check(&Claim::new(4, 9, Player::X), &game),
            Err(MoveError::OutOfRange { index: 9 })
        );
        assert_eq!(
            LegalClaim::check(&Claim::new(12, 0, Player::X), &game),
            Err(MoveError::OutOfRange { index: 12 })
        );
    }

    #[test]
    fn test_wrong_turn() {
        let game = Game::new(RuleSettings::default());
        assert_eq!(
            LegalClaim::check(&Claim::new(4, 0, Player::O), &game),
            Err(MoveError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_inactive_board() {
        let game = Game::new(RuleSettings::default());
        assert_eq!(
            LegalClaim::check(&Claim::new(0, 0, Player::X), &game),
            Err(MoveError::InactiveBoard { board: 0 })
        );
    }

    #[test]
    fn test_relaxed_rule_accepts_any_board() {
        let settings = RuleSettings::default().with_board_rule(BoardRule::AnyOpenBoard);
        let game = Game::new(settings);
        assert_eq!(LegalClaim::check(&Claim::new(0, 0, Player::X), &game), Ok(()));
    }
}
