//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over 3x3 grids of tokens. A board applies them to its
//! squares and the game applies the very same scan to board winners.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner, has_line, winning_line};
