//! Rule and opponent settings for a game.

use crate::Player;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};

/// Which boards accept a claim.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BoardRule {
    /// Only the board the previous move routed to.
    #[default]
    Routed,
    /// Any board that is not yet won, regardless of routing.
    AnyOpenBoard,
}

/// Where play goes when the routed-to board is already won or full.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RedirectPolicy {
    /// The next player may pick any open board.
    #[default]
    FreeChoice,
    /// The lowest-index open board becomes the active one.
    FirstOpen,
}

/// Who plays against the human.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum OpponentMode {
    /// A second human at the same table.
    #[default]
    Human,
    /// Random moves.
    Easy,
    /// One-ply lookahead: win, else block, else random.
    Medium,
}

impl OpponentMode {
    /// The heuristic behind this mode, `None` for [`OpponentMode::Human`].
    pub fn difficulty(self) -> Option<Difficulty> {
        match self {
            OpponentMode::Human => None,
            OpponentMode::Easy => Some(Difficulty::Easy),
            OpponentMode::Medium => Some(Difficulty::Medium),
        }
    }
}

/// Strength of the heuristic opponent.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniform random choice among available squares.
    Easy,
    /// Win if possible, else block, else random.
    #[default]
    Medium,
}

/// Settings fixed at game creation (the opponent mode may change later).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct RuleSettings {
    /// Which boards accept a claim.
    pub board_rule: BoardRule,
    /// Where play goes when routed to a resolved board.
    pub redirect: RedirectPolicy,
    /// Who plays the AI side.
    pub opponent: OpponentMode,
    /// The token the AI plays.
    pub ai_player: Player,
    /// Seed for the opponent's random choices; entropy when absent.
    #[setters(strip_option)]
    pub seed: Option<u64>,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            board_rule: BoardRule::default(),
            redirect: RedirectPolicy::default(),
            opponent: OpponentMode::default(),
            ai_player: Player::O,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RuleSettings::default();
        assert_eq!(settings.board_rule, BoardRule::Routed);
        assert_eq!(settings.redirect, RedirectPolicy::FreeChoice);
        assert_eq!(settings.opponent, OpponentMode::Human);
        assert_eq!(settings.ai_player, Player::O);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_setters() {
        let settings = RuleSettings::default()
            .with_opponent(OpponentMode::Medium)
            .with_seed(7);
        assert_eq!(settings.opponent, OpponentMode::Medium);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("medium".parse::<OpponentMode>().ok(), Some(OpponentMode::Medium));
        assert_eq!("any_open_board".parse::<BoardRule>().ok(), Some(BoardRule::AnyOpenBoard));
        assert_eq!(OpponentMode::Easy.difficulty(), Some(Difficulty::Easy));
        assert_eq!(OpponentMode::Human.difficulty(), None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: RuleSettings =
            serde_json::from_str(r#"{"redirect": "first_open"}"#).expect("valid settings");
        assert_eq!(settings.redirect, RedirectPolicy::FirstOpen);
        assert_eq!(settings.board_rule, BoardRule::Routed);
    }
}
