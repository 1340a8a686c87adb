//! Tests for AI-vs-AI self-play.

use ultimate_games::{GameConfig, SimulateConfig, play_one, simulate};
use ultimate_tictactoe::{Difficulty, OpponentMode, RuleSettings};

fn config(games: usize, seed: u64) -> GameConfig {
    GameConfig::new(
        RuleSettings::default()
            .with_opponent(OpponentMode::Medium)
            .with_seed(seed),
        SimulateConfig::new(games, Difficulty::Medium),
    )
}

#[test]
fn test_every_game_is_counted() {
    let stats = simulate::run(&config(8, 1)).expect("Simulation failed");
    assert_eq!(stats.games(), 8);
    assert!(*stats.moves() >= 8 * 17);
    assert!(*stats.moves() <= 8 * 81);
}

#[test]
fn test_seeded_runs_repeat() {
    let first = simulate::run(&config(5, 7)).expect("Simulation failed");
    let second = simulate::run(&config(5, 7)).expect("Simulation failed");
    assert_eq!(first, second);
}

#[test]
fn test_human_opponent_is_replaced() {
    let config = GameConfig::new(
        RuleSettings::default().with_seed(3),
        SimulateConfig::new(1, Difficulty::Easy),
    );
    let (outcome, moves) = play_one(&config, Some(3)).expect("Game failed");
    assert!(moves > 0);
    assert!(outcome.is_draw() || outcome.winner().is_some());
}
