//! Game orchestration between a human at the terminal and the engine.

use crate::input::{Input, Keyword, keywords};
use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};
use ultimate_tictactoe::{Claim, Difficulty, Game, GameEvent, MoveReport, Outcome, Player, Routing};

/// Messages sent from the orchestrator to the printer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Something the engine reported for a claim.
    Engine(GameEvent),
    /// The rendered grid.
    Board(String),
    /// Waiting for `player` to move under `routing`.
    Prompt {
        /// Player to move.
        player: Player,
        /// Where the move must land.
        routing: Routing,
    },
    /// A suggested move.
    Hint(Claim),
    /// Input or a claim was refused.
    Rejected(String),
}

/// Drives one game from input lines and forwards everything to the printer.
pub struct Orchestrator {
    game: Game,
    hint_difficulty: Difficulty,
    event_tx: mpsc::UnboundedSender<UiEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        game: Game,
        hint_difficulty: Difficulty,
        event_tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            game,
            hint_difficulty,
            event_tx,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until it ends, the player quits, or input closes.
    ///
    /// Returns the outcome when the game was played to the end.
    #[instrument(skip_all)]
    pub async fn run(
        &mut self,
        mut input_rx: mpsc::UnboundedReceiver<String>,
    ) -> Result<Option<Outcome>> {
        info!("Starting game orchestration");
        self.send_board()?;

        loop {
            if let Some(outcome) = self.game.outcome() {
                info!(%outcome, "Game finished");
                return Ok(Some(outcome));
            }

            if self.game.pending_tasks() > 0 {
                // Let the printer catch up before the AI answers.
                tokio::task::yield_now().await;
                let reports = self.game.run_pending()?;
                for report in &reports {
                    self.forward(report)?;
                }
                self.send_board()?;
                continue;
            }

            let Some(routing) = self.game.routing() else {
                return Ok(None);
            };
            self.event_tx.send(UiEvent::Prompt {
                player: self.game.current_player(),
                routing,
            })?;

            let Some(line) = input_rx.recv().await else {
                debug!("Input closed");
                return Ok(None);
            };

            match Input::parse(&line) {
                Ok(Input::Claim { board, square }) => {
                    let player = self.game.current_player();
                    match self.game.attempt_claim(board, square, player) {
                        Ok(report) => {
                            self.forward(&report)?;
                            self.send_board()?;
                        }
                        Err(e) => self.event_tx.send(UiEvent::Rejected(e.to_string()))?,
                    }
                }
                Ok(Input::Command(Keyword::Hint)) => {
                    if let Some(claim) = self.game.suggest_move(self.hint_difficulty) {
                        self.event_tx.send(UiEvent::Hint(claim))?;
                    }
                }
                Ok(Input::Command(Keyword::Show)) => self.send_board()?,
                Ok(Input::Command(Keyword::Quit)) => {
                    info!("Player quit");
                    return Ok(None);
                }
                Err(e) => {
                    warn!(error = %e, "Unreadable input");
                    self.event_tx.send(UiEvent::Rejected(e.to_string()))?;
                }
            }
        }
    }

    fn forward(&self, report: &MoveReport) -> Result<()> {
        for event in report.events() {
            self.event_tx.send(UiEvent::Engine(*event))?;
        }
        Ok(())
    }

    fn send_board(&self) -> Result<()> {
        self.event_tx.send(UiEvent::Board(self.game.to_string()))?;
        Ok(())
    }
}

/// Formats an event for the terminal; `None` for events not worth a line.
pub fn describe(event: &UiEvent) -> Option<String> {
    match event {
        UiEvent::Engine(GameEvent::BoardClaimed {
            board,
            square,
            player,
        }) => Some(format!("{player} claims board {board} square {square}")),
        UiEvent::Engine(GameEvent::BoardWon { board, player }) => {
            Some(format!("{player} wins board {board}"))
        }
        UiEvent::Engine(GameEvent::GameOver(outcome)) => Some(format!("Game over: {outcome}")),
        UiEvent::Engine(GameEvent::OpponentScheduled) => Some("Opponent is thinking...".to_string()),
        UiEvent::Engine(GameEvent::ActiveBoardChanged(_) | GameEvent::TurnChanged(_)) => None,
        UiEvent::Board(grid) => Some(grid.clone()),
        UiEvent::Prompt { player, routing } => Some(format!(
            "{player} to move ({routing}). Enter `board square` or one of {}:",
            keywords()
        )),
        UiEvent::Hint(claim) => Some(format!("Hint: {claim}")),
        UiEvent::Rejected(reason) => Some(format!("Rejected: {reason}")),
    }
}
