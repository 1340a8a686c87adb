//! Terminal front end and self-play runner for ultimate tic-tac-toe.
//!
//! The binary owns a single [`ultimate_tictactoe::Game`], feeds it lines
//! read from stdin and forwards each claim's events to a printer task.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod input;
pub mod orchestrator;
pub mod simulate;

pub use config::{ConfigError, GameConfig, SimulateConfig};
pub use input::{Input, InputError, Keyword};
pub use orchestrator::{Orchestrator, UiEvent, describe};
pub use simulate::{Stats, play_one};
