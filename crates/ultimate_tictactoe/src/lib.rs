//! Ultimate tic-tac-toe engine.
//!
//! Nine 3x3 boards form one 3x3 meta-board. Claiming square *k* of any
//! board sends the opponent to board *k*; winning three boards in a line
//! wins the game.
//!
//! # Architecture
//!
//! - **Square / Board**: claimable cells and a board's sticky winner
//! - **rules**: the eight-line scan shared by boards and the meta-board
//! - **Game**: turn switching, routing, and the post-move cascade
//! - **Opponent**: random and one-ply lookahead AI with a per-board cache
//! - **Scheduler**: deferred AI moves, drained by the caller
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{Game, Player, Routing, RuleSettings};
//!
//! let mut game = Game::new(RuleSettings::default());
//! let report = game.attempt_claim(4, 0, Player::X)?;
//! assert_eq!(game.routing(), Some(Routing::Board(0)));
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(report.events().len(), 3);
//! # Ok::<(), ultimate_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod error;
mod events;
mod game;
mod opponent;
mod phases;
mod position;
mod scheduler;
mod settings;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::Claim;
pub use board::{Board, BoardClaim};
pub use error::{InvariantViolation, MoveError};
pub use events::{GameEvent, MoveReport};
pub use game::{Game, OPENING_BOARD};
pub use opponent::{LookaheadTable, Opponent};
pub use phases::{Outcome, Phase, Routing};
pub use position::Position;
pub use scheduler::{Scheduler, Task};
pub use settings::{BoardRule, Difficulty, OpponentMode, RedirectPolicy, RuleSettings};
pub use types::{Player, Square};
