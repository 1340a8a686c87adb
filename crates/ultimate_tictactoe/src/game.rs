//! The meta-board and its turn/routing state machine.

use crate::contracts::LegalClaim;
use crate::invariants::assert_invariants;
use crate::scheduler::{Scheduler, Task};
use crate::{
    Board, BoardClaim, Claim, Difficulty, GameEvent, MoveError, MoveReport,
    Opponent, OpponentMode, Outcome, Phase, Player, RedirectPolicy, Routing, RuleSettings, rules,
};
use tracing::{debug, info, instrument, warn};

/// Board that is active when a game starts.
pub const OPENING_BOARD: usize = 4;

/// Ultimate tic-tac-toe game engine.
///
/// Owns the nine boards, the opponent and its lookahead cache, and the queue
/// of deferred AI moves.
#[derive(Debug, Clone)]
pub struct Game {
    boards: [Board; 9],
    current: Player,
    phase: Phase,
    meta_winner: Option<Player>,
    settings: RuleSettings,
    opponent: Opponent,
    scheduler: Scheduler,
    move_count: usize,
}

impl Game {
    /// Creates a game with nine empty boards and the center board active.
    #[instrument]
    pub fn new(settings: RuleSettings) -> Self {
        let mut boards: [Board; 9] = Default::default();
        boards[OPENING_BOARD].set_active(true);
        let difficulty = settings.opponent.difficulty().unwrap_or_default();
        info!(opponent = %settings.opponent, "New game");
        let mut game = Self {
            boards,
            current: Player::X,
            phase: Phase::AwaitingMove(Routing::Board(OPENING_BOARD)),
            meta_winner: None,
            settings,
            opponent: Opponent::new(difficulty, settings.seed),
            scheduler: Scheduler::new(),
            move_count: 0,
        };
        if game.is_ai_turn() {
            game.scheduler.schedule(Task::OpponentMove);
        }
        game
    }

    /// Attempts to claim `square` on `board` for `player`.
    ///
    /// On success the whole post-move cascade has run by the time this
    /// returns: board and meta win checks, routing, turn change, and (when
    /// the AI is to move) scheduling of the AI's move. On failure nothing
    /// changed.
    #[instrument(skip(self), fields(current = %self.current))]
    pub fn attempt_claim(
        &mut self,
        board: usize,
        square: usize,
        player: Player,
    ) -> Result<MoveReport, MoveError> {
        let claim = Claim::new(board, square, player);
        if let Err(e) = LegalClaim::check(&claim, self) {
            warn!(error = %e, "Claim rejected");
            return Err(e);
        }

        let effect = self.boards[board].claim(square, player);
        if !effect.succeeded() {
            return Err(MoveError::SquareTaken { board, square });
        }
        self.move_count += 1;

        let mut report = MoveReport::new(board, square, player);
        report.push(GameEvent::BoardClaimed { board, square, player });
        self.opponent.refresh_lookahead(board, &self.boards[board]);

        if effect == BoardClaim::Won {
            info!(board, winner = %player, "Board won");
            report.push(GameEvent::BoardWon { board, player });
            if let Some(winner) = rules::check_winner(&self.board_winners()) {
                self.meta_winner = Some(winner);
                self.finish(Outcome::Winner(winner), &mut report);
                return Ok(report);
            }
        }

        if self.open_boards().is_empty() {
            self.finish(Outcome::Draw, &mut report);
            return Ok(report);
        }

        let routing = self.route(square);
        report.push(GameEvent::ActiveBoardChanged(routing));

        self.current = self.current.opponent();
        report.push(GameEvent::TurnChanged(self.current));

        if self.is_ai_turn() {
            self.scheduler.schedule(Task::OpponentMove);
            report.push(GameEvent::OpponentScheduled);
        }

        assert_invariants(self);
        Ok(report)
    }

    /// Claims through a [`Claim`] value.
    pub fn apply(&mut self, claim: Claim) -> Result<MoveReport, MoveError> {
        self.attempt_claim(claim.board, claim.square, claim.player)
    }

    /// Runs every deferred task, oldest first.
    ///
    /// A queued AI move always executes unless the game ended meanwhile.
    #[instrument(skip(self))]
    pub fn run_pending(&mut self) -> Result<Vec<MoveReport>, MoveError> {
        let mut reports = Vec::new();
        while let Some(task) = self.scheduler.next() {
            match task {
                Task::OpponentMove => {
                    if let Some(report) = self.play_opponent_move()? {
                        reports.push(report);
                    }
                }
            }
        }
        Ok(reports)
    }

    fn play_opponent_move(&mut self) -> Result<Option<MoveReport>, MoveError> {
        let Phase::AwaitingMove(routing) = self.phase else {
            debug!("Game over, dropping opponent move");
            return Ok(None);
        };
        let player = self.settings.ai_player;
        if self.current != player {
            return Err(MoveError::WrongPlayer(player));
        }
        let difficulty = self.opponent.difficulty();
        let (board, square) = self
            .opponent
            .choose_claim(difficulty, &self.boards, routing, player)
            .ok_or(MoveError::GameOver)?;
        debug!(board, square, %difficulty, "Opponent chose claim");
        self.attempt_claim(board, square, player).map(Some)
    }

    /// What the heuristic would play for the current player.
    ///
    /// Does not change the game apart from advancing the opponent's random
    /// number generator.
    #[instrument(skip(self))]
    pub fn suggest_move(&mut self, difficulty: Difficulty) -> Option<Claim> {
        let Phase::AwaitingMove(routing) = self.phase else {
            return None;
        };
        let player = self.current;
        self.opponent
            .choose_claim(difficulty, &self.boards, routing, player)
            .map(|(board, square)| Claim::new(board, square, player))
    }

    /// Changes who plays the AI side; applies from the next AI turn on.
    ///
    /// Switching to an AI mode while the AI is already to move queues its
    /// move. Switching to [`OpponentMode::Human`] does not cancel a move that
    /// is already queued.
    #[instrument(skip(self))]
    pub fn set_opponent_mode(&mut self, mode: OpponentMode) {
        self.settings.opponent = mode;
        if let Some(difficulty) = mode.difficulty() {
            self.opponent.set_difficulty(difficulty);
        }
        if self.is_ai_turn() && !self.scheduler.contains(Task::OpponentMove) {
            self.scheduler.schedule(Task::OpponentMove);
        }
    }

    /// The single active board while routing is pinned to it.
    ///
    /// `None` under free choice, where several boards are active, and once
    /// the game is over.
    pub fn current_board(&self) -> Option<&Board> {
        match self.phase {
            Phase::AwaitingMove(Routing::Board(index)) => self.boards.get(index),
            Phase::AwaitingMove(Routing::AnyOpen) | Phase::GameOver(_) => None,
        }
    }

    /// All nine boards.
    pub fn boards(&self) -> &[Board; 9] {
        &self.boards
    }

    /// The board at meta-position `index`.
    pub fn board(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// Winner of each board, in meta-position order.
    pub fn board_winners(&self) -> [Option<Player>; 9] {
        std::array::from_fn(|i| self.boards[i].winner())
    }

    /// Indices of boards that are neither won nor full.
    pub fn open_boards(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.boards[i].is_open()).collect()
    }

    /// The player to move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    /// Winner of the meta-board, if any.
    pub fn meta_winner(&self) -> Option<Player> {
        self.meta_winner
    }

    /// Current phase of the turn/routing machine.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Where the next claim must land, `None` once the game is over.
    pub fn routing(&self) -> Option<Routing> {
        match self.phase {
            Phase::AwaitingMove(routing) => Some(routing),
            Phase::GameOver(_) => None,
        }
    }

    /// The outcome, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            Phase::AwaitingMove(_) => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Who plays the AI side.
    pub fn opponent_mode(&self) -> OpponentMode {
        self.settings.opponent
    }

    /// The opponent and its lookahead cache.
    pub fn opponent(&self) -> &Opponent {
        &self.opponent
    }

    /// Rule settings of this game.
    pub fn settings(&self) -> &RuleSettings {
        &self.settings
    }

    /// Number of successful claims so far.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Number of deferred tasks waiting for [`Game::run_pending`].
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.len()
    }

    /// Whether the AI is the one to move now.
    pub fn is_ai_turn(&self) -> bool {
        !self.is_over()
            && self.settings.opponent != OpponentMode::Human
            && self.current == self.settings.ai_player
    }

    /// Sends the next player to `target`, or redirects if it is resolved.
    fn route(&mut self, target: usize) -> Routing {
        let routing = if self.boards[target].is_open() {
            Routing::Board(target)
        } else {
            match self.settings.redirect {
                RedirectPolicy::FreeChoice => Routing::AnyOpen,
                RedirectPolicy::FirstOpen => match self.open_boards().first() {
                    Some(&first) => Routing::Board(first),
                    None => Routing::AnyOpen,
                },
            }
        };

        for (i, board) in self.boards.iter_mut().enumerate() {
            let active = match routing {
                Routing::Board(index) => i == index,
                Routing::AnyOpen => board.is_open(),
            };
            board.set_active(active);
        }
        self.phase = Phase::AwaitingMove(routing);
        debug!(%routing, "Routing updated");
        routing
    }

    fn finish(&mut self, outcome: Outcome, report: &mut MoveReport) {
        for board in &mut self.boards {
            board.set_active(false);
        }
        self.phase = Phase::GameOver(outcome);
        info!(%outcome, moves = self.move_count, "Game over");
        report.push(GameEvent::GameOver(outcome));
        assert_invariants(self);
    }

    #[cfg(test)]
    pub(crate) fn boards_mut(&mut self) -> &mut [Board; 9] {
        &mut self.boards
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(RuleSettings::default())
    }
}

impl std::fmt::Display for Game {
    /// Renders the 9x9 grid; boards are separated by `|` and `-` rules, and a
    /// won board shows its winner in every cell.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for meta_row in 0..3 {
            for row in 0..3 {
                let cells: Vec<String> = (0..3)
                    .map(|meta_col| {
                        let board = &self.boards[meta_row * 3 + meta_col];
                        match board.winner() {
                            Some(winner) => winner.to_string().repeat(3),
                            None => board.row_string(row),
                        }
                    })
                    .collect();
                writeln!(f, "{}", cells.join("|"))?;
            }
            if meta_row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
