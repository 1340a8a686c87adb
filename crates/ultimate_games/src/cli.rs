//! Command-line interface for ultimate_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use ultimate_tictactoe::{Difficulty, OpponentMode, Player, RedirectPolicy};

/// Ultimate tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "ultimate_games")]
#[command(about = "Ultimate tic-tac-toe with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play at the terminal, against a friend or the AI
    Play {
        /// Who plays the AI side: human, easy or medium
        #[arg(short, long)]
        opponent: Option<OpponentMode>,

        /// Token the AI plays
        #[arg(long)]
        ai_player: Option<Player>,

        /// Accept claims on any open board, not just the routed one
        #[arg(long)]
        relaxed: bool,

        /// Where play goes when routed to a finished board: free_choice or first_open
        #[arg(long)]
        redirect: Option<RedirectPolicy>,

        /// Strength of the `hint` command
        #[arg(long, default_value = "medium")]
        hint: Difficulty,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two AIs play each other and report the results
    Simulate {
        /// Number of games (overrides the config)
        #[arg(short = 'n', long)]
        games: Option<usize>,

        /// Strength of the O side
        #[arg(short, long)]
        opponent: Option<OpponentMode>,

        /// Seed for the first game; later games count up from it
        #[arg(long)]
        seed: Option<u64>,
    },
}
