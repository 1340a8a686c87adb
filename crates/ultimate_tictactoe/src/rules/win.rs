//! Win detection shared by boards and the meta-board.

use crate::Player;
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning lines of a 3x3 grid.
///
/// Declaration order is evaluation order: rows, then columns, then
/// diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// Cell indices of this line.
    pub fn cells(self) -> [usize; 3] {
        match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        }
    }

    /// Returns the owner of this line if all three cells share a token.
    pub fn owner(self, cells: &[Option<Player>; 9]) -> Option<Player> {
        let [a, b, c] = self.cells();
        let first = cells[a]?;
        (cells[b] == Some(first) && cells[c] == Some(first)).then_some(first)
    }
}

/// Finds the first completed line in evaluation order.
#[instrument(level = "trace")]
pub fn winning_line(cells: &[Option<Player>; 9]) -> Option<Line> {
    Line::iter().find(|line| line.owner(cells).is_some())
}

/// Checks if any line on the grid is complete and returns its owner.
#[instrument(level = "trace")]
pub fn check_winner(cells: &[Option<Player>; 9]) -> Option<Player> {
    winning_line(cells).and_then(|line| line.owner(cells))
}

/// Checks if `player` owns at least one complete line.
pub fn has_line(cells: &[Option<Player>; 9], player: Player) -> bool {
    Line::iter().any(|line| line.owner(cells) == Some(player))
}
