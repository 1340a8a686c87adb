//! Ultimate Games - terminal play and AI self-play.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::BufRead;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use ultimate_games::{GameConfig, Orchestrator, UiEvent, describe, simulate};
use ultimate_tictactoe::{BoardRule, Difficulty, Game};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the grid on stdout stays readable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            opponent,
            ai_player,
            relaxed,
            redirect,
            hint,
            seed,
        } => {
            let rules = config.rules_mut();
            if let Some(opponent) = opponent {
                rules.opponent = opponent;
            }
            if let Some(ai_player) = ai_player {
                rules.ai_player = ai_player;
            }
            if relaxed {
                rules.board_rule = BoardRule::AnyOpenBoard;
            }
            if let Some(redirect) = redirect {
                rules.redirect = redirect;
            }
            if seed.is_some() {
                rules.seed = seed;
            }
            run_play(&config, hint).await
        }
        Command::Simulate {
            games,
            opponent,
            seed,
        } => {
            if let Some(games) = games {
                config.set_games(games);
            }
            let rules = config.rules_mut();
            if let Some(opponent) = opponent {
                rules.opponent = opponent;
            }
            if seed.is_some() {
                rules.seed = seed;
            }
            let stats = simulate::run(&config)?;
            println!("{stats}");
            Ok(())
        }
    }
}

/// Plays one interactive game on stdin/stdout.
#[instrument(skip(config))]
async fn run_play(config: &GameConfig, hint: Difficulty) -> Result<()> {
    let game = Game::new(*config.rules());
    info!(rules = ?config.rules(), "Starting interactive game");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<UiEvent>();
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            if let Some(line) = describe(&event) {
                println!("{line}");
            }
        }
    });

    // A plain thread, so a pending read never holds up runtime shutdown.
    let (input_tx, input_rx) = mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let mut orchestrator = Orchestrator::new(game, hint, event_tx);
    let outcome = orchestrator.run(input_rx).await?;
    drop(orchestrator);
    printer.await?;

    debug!(?outcome, "Interactive game ended");
    Ok(())
}
