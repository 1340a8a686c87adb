//! A single 3x3 board of the meta-board.

use crate::rules;
use crate::{Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board with its own win state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// The first player to complete a line. Never changes once set.
    winner: Option<Player>,
    /// Whether this board currently accepts claims.
    active: bool,
    /// Index of the most recently claimed square.
    last_claimed: Option<usize>,
}

impl Board {
    /// Creates a board of nine empty squares, inactive and unwon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given index (0-8).
    pub fn square(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Tokens of all squares, in index order.
    pub fn tokens(&self) -> [Option<Player>; 9] {
        self.squares.map(Square::token)
    }

    /// Indices of unclaimed squares in ascending order.
    pub fn available_squares(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.squares[i].is_empty()).collect()
    }

    /// Scans the eight lines for a completed one.
    ///
    /// This checks the squares themselves; use [`Board::is_won`] to ask
    /// whether the board has already recorded a winner.
    pub fn check_for_win(&self) -> bool {
        rules::winning_line(&self.tokens()).is_some()
    }

    /// Claims a square and re-evaluates the board.
    #[instrument(skip(self), fields(winner = ?self.winner))]
    pub fn claim(&mut self, index: usize, player: Player) -> BoardClaim {
        let Some(square) = self.squares.get_mut(index) else {
            return BoardClaim::Rejected;
        };
        if !square.claim(player) {
            return BoardClaim::Rejected;
        }
        if self.on_square_claimed(index) {
            BoardClaim::Won
        } else {
            BoardClaim::Claimed
        }
    }

    /// Re-evaluates the board after the square at `index` was claimed.
    ///
    /// The winner is the claimed square's token: any completed line must
    /// contain the square that completed it. Returns `true` if the winner
    /// was set by this call.
    fn on_square_claimed(&mut self, index: usize) -> bool {
        self.last_claimed = Some(index);
        if self.winner.is_some() || !self.check_for_win() {
            return false;
        }
        self.winner = self.squares[index].token();
        debug!(winner = ?self.winner, square = index, "Board won");
        self.winner.is_some()
    }

    /// The player who won this board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Whether a winner has been recorded.
    pub fn is_won(&self) -> bool {
        self.winner.is_some()
    }

    /// Whether all nine squares are claimed.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.tokens())
    }

    /// Neither won nor full: the board can still take a meaningful claim.
    pub fn is_open(&self) -> bool {
        !self.is_won() && !self.is_full()
    }

    /// Whether this board currently accepts claims.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the most recently claimed square, `None` before any move.
    pub fn last_claimed(&self) -> Option<usize> {
        self.last_claimed
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    #[cfg(test)]
    pub(crate) fn clear_winner_for_test(&mut self) {
        self.winner = None;
    }

    /// One text row (0-2) of this board, e.g. `X.O`.
    pub fn row_string(&self, row: usize) -> String {
        self.squares[row * 3..row * 3 + 3]
            .iter()
            .map(|square| match square {
                Square::Empty => '.',
                Square::Occupied(Player::X) => 'X',
                Square::Occupied(Player::O) => 'O',
            })
            .collect()
    }
}

/// Effect of [`Board::claim`].
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardClaim {
    /// The square was taken or out of range; nothing changed.
    Rejected,
    /// The square was claimed.
    Claimed,
    /// The square was claimed and the claim won the board.
    Won,
}

impl BoardClaim {
    /// Whether the claim changed the board.
    pub fn succeeded(self) -> bool {
        !matches!(self, BoardClaim::Rejected)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            let line: Vec<String> = self.row_string(row).chars().map(String::from).collect();
            write!(f, "{}", line.join("|"))?;
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
