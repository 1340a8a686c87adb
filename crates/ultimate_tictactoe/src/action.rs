//! The claim intent forwarded by a front end.

use crate::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player's attempt to claim `square` on `board`.
///
/// Claims are validated against the game before anything is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Claim {
    /// Board index (0-8).
    pub board: usize,
    /// Square index within the board (0-8).
    pub square: usize,
    /// The player making the claim.
    pub player: Player,
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> board {} square {}", self.player, self.board, self.square)
    }
}
