//! Named cells of a 3x3 grid.
//!
//! The same nine names address a square within a board and a board within
//! the meta-board, so terminal input can read `center top-left` as well as
//! `4 0`.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// A cell of a 3x3 grid; declaration order is the row-major index.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Position {
    /// Index 0.
    TopLeft,
    /// Index 1.
    TopCenter,
    /// Index 2.
    TopRight,
    /// Index 3.
    MiddleLeft,
    /// Index 4, the opening board.
    Center,
    /// Index 5.
    MiddleRight,
    /// Index 6.
    BottomLeft,
    /// Index 7.
    BottomCenter,
    /// Index 8.
    BottomRight,
}

impl Position {
    /// Kebab-case name, e.g. `top-left`.
    pub fn label(self) -> &'static str {
        self.into()
    }

    /// Row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// The cell at a row-major index, `None` past 8.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < 9 {
            Self::iter().nth(index)
        } else {
            None
        }
    }

    /// Row (0-2) and column (0-2) of this cell.
    pub fn coordinates(self) -> (usize, usize) {
        (self.to_index() / 3, self.to_index() % 3)
    }

    /// Reads an index (0-8) or a name.
    ///
    /// Names ignore case and punctuation, so `top-left`, `TopLeft` and
    /// `top_left` agree.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();
        match s.parse::<usize>() {
            Ok(index) => Self::from_index(index),
            Err(_) => {
                let wanted = squash(s);
                Self::iter().find(|pos| squash(pos.label()) == wanted)
            }
        }
    }
}

fn squash(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
