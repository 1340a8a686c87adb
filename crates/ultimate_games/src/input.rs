//! Parsing of the lines a human types during play.

use derive_more::{Display, Error};
use strum::IntoEnumIterator;
use ultimate_tictactoe::Position;

/// Words accepted in place of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::EnumString, strum::EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Keyword {
    /// Ask the heuristic for a move.
    Hint,
    /// Print the grid again.
    Show,
    /// Leave the game.
    Quit,
}

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Claim `square` on `board`.
    Claim {
        /// Board index.
        board: usize,
        /// Square index.
        square: usize,
    },
    /// A keyword command.
    Command(Keyword),
}

/// Input that names neither a claim nor a keyword.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read {:?}: {}", input, reason)]
pub struct InputError {
    /// The offending line.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl InputError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.trim().to_string(),
            reason: reason.into(),
        }
    }
}

impl Input {
    /// Parses `board square`, where each part is a number 0-8 or a position
    /// label such as `top-left`, or a single keyword.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => Err(InputError::new(line, "empty input")),
            [word] => word
                .parse::<Keyword>()
                .map(Input::Command)
                .map_err(|_| InputError::new(line, format!("expected a move or one of {}", keywords()))),
            [board, square] => {
                let board = Position::from_label_or_number(board)
                    .ok_or_else(|| InputError::new(line, format!("unknown board {:?}", board)))?;
                let square = Position::from_label_or_number(square)
                    .ok_or_else(|| InputError::new(line, format!("unknown square {:?}", square)))?;
                Ok(Input::Claim {
                    board: board.to_index(),
                    square: square.to_index(),
                })
            }
            _ => Err(InputError::new(line, "expected `board square`")),
        }
    }
}

/// Keywords joined for help text.
pub fn keywords() -> String {
    Keyword::iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
