//! AI-vs-AI self-play.

use crate::config::GameConfig;
use anyhow::{Result, bail};
use derive_getters::Getters;
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Game, OpponentMode, Outcome, Player};

/// Tally of finished self-play games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct Stats {
    /// Games won by X.
    x_wins: usize,
    /// Games won by O.
    o_wins: usize,
    /// Drawn games.
    draws: usize,
    /// Claims made across all games.
    moves: usize,
}

impl Stats {
    /// Adds one finished game.
    pub fn record(&mut self, outcome: Outcome, moves: usize) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
        self.moves += moves;
    }

    /// Number of games recorded.
    pub fn games(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let games = self.games();
        let average = if games == 0 {
            0.0
        } else {
            self.moves as f64 / games as f64
        };
        write!(
            f,
            "{} games: X won {}, O won {}, {} drawn ({:.1} moves per game)",
            games, self.x_wins, self.o_wins, self.draws, average
        )
    }
}

/// Plays one game to the end: O is the configured opponent (medium when the
/// configuration names a human), X follows the hint heuristic.
#[instrument(skip(config))]
pub fn play_one(config: &GameConfig, seed: Option<u64>) -> Result<(Outcome, usize)> {
    let mut rules = *config.rules();
    if rules.opponent == OpponentMode::Human {
        rules.opponent = OpponentMode::Medium;
    }
    rules.ai_player = Player::O;
    rules.seed = seed;

    let x_difficulty = *config.simulate().x_difficulty();
    let mut game = Game::new(rules);
    while !game.is_over() {
        if game.is_ai_turn() {
            game.run_pending()?;
            continue;
        }
        let Some(claim) = game.suggest_move(x_difficulty) else {
            bail!("no legal move for {} before the game ended", game.current_player());
        };
        game.apply(claim)?;
    }

    let Some(outcome) = game.outcome() else {
        bail!("game loop ended without an outcome");
    };
    debug!(%outcome, moves = game.move_count(), "Self-play game finished");
    Ok((outcome, game.move_count()))
}

/// Plays the configured number of games and tallies the outcomes.
///
/// With a seed in the rules, game `i` uses `seed + i` so a run is
/// reproducible.
#[instrument(skip(config), fields(games = config.simulate().games()))]
pub fn run(config: &GameConfig) -> Result<Stats> {
    let base_seed = config.rules().seed;
    let mut stats = Stats::default();
    for i in 0..*config.simulate().games() {
        let seed = base_seed.map(|s| s.wrapping_add(i as u64));
        let (outcome, moves) = play_one(config, seed)?;
        stats.record(outcome, moves);
    }
    info!(%stats, "Simulation finished");
    Ok(stats)
}
