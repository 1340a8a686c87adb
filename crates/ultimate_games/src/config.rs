//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Difficulty, RuleSettings};

/// Configuration for a play or simulate session.
///
/// Every key is optional; omitted keys take their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine rules and the opponent.
    rules: RuleSettings,

    /// Self-play settings.
    simulate: SimulateConfig,
}

/// Settings for AI-vs-AI runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Number of games to play.
    games: usize,

    /// Strength of the X side; O uses the configured opponent.
    x_difficulty: Difficulty,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            x_difficulty: Difficulty::Medium,
        }
    }
}

fn default_games() -> usize {
    100
}

impl GameConfig {
    /// Creates a configuration from explicit parts.
    pub fn new(rules: RuleSettings, simulate: SimulateConfig) -> Self {
        Self { rules, simulate }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            opponent = %config.rules.opponent,
            board_rule = %config.rules.board_rule,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    #[instrument]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Mutable access to the rules, for command-line overrides.
    pub fn rules_mut(&mut self) -> &mut RuleSettings {
        &mut self.rules
    }

    /// Overrides the number of self-play games.
    pub fn set_games(&mut self, games: usize) {
        self.simulate.games = games;
    }
}

impl SimulateConfig {
    /// Creates self-play settings.
    pub fn new(games: usize, x_difficulty: Difficulty) -> Self {
        Self {
            games,
            x_difficulty,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
