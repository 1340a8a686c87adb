//! Heuristic AI opponent with a per-board one-ply lookahead cache.

use crate::{Board, Difficulty, Player, Routing};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::{debug, instrument};

/// For every board and player, the square that would win that board at once.
///
/// Only one square is kept per entry: when several squares win, the last one
/// in ascending scan order is remembered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookaheadTable {
    winning: [[Option<usize>; 9]; 2],
}

impl LookaheadTable {
    /// The square that wins `board` for `player` immediately, if recorded.
    pub fn one_away_from_win(&self, board: usize, player: Player) -> Option<usize> {
        self.winning[player.index()].get(board).copied().flatten()
    }

    fn refresh(&mut self, index: usize, board: &Board) {
        let mut found = [None; 2];
        for square in board.available_squares() {
            for player in [Player::O, Player::X] {
                let mut probe = board.clone();
                if probe.claim(square, player).succeeded() && probe.check_for_win() {
                    found[player.index()] = Some(square);
                }
            }
        }
        self.winning[Player::X.index()][index] = found[Player::X.index()];
        self.winning[Player::O.index()][index] = found[Player::O.index()];
    }
}

/// The AI player.
///
/// Holds no reference to the game; the game hands it the boards for every
/// decision and tells it which board just changed.
#[derive(Debug, Clone)]
pub struct Opponent {
    difficulty: Difficulty,
    lookahead: LookaheadTable,
    rng: StdRng,
}

impl Opponent {
    /// Creates an opponent; a seed makes its random choices reproducible.
    #[instrument]
    pub fn new(difficulty: Difficulty, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            difficulty,
            lookahead: LookaheadTable::default(),
            rng,
        }
    }

    /// Current difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Changes the difficulty; applies from the next decision on.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// The cached lookahead table.
    pub fn lookahead(&self) -> &LookaheadTable {
        &self.lookahead
    }

    /// Recomputes the lookahead entries of one board after it was claimed.
    #[instrument(skip(self, board))]
    pub fn refresh_lookahead(&mut self, index: usize, board: &Board) {
        self.lookahead.refresh(index, board);
        debug!(
            x_wins_at = ?self.lookahead.one_away_from_win(index, Player::X),
            o_wins_at = ?self.lookahead.one_away_from_win(index, Player::O),
            "Lookahead refreshed"
        );
    }

    /// Picks a square on one board for `player` at the current difficulty.
    ///
    /// Returns `None` when the board has no available square.
    #[instrument(skip(self, board))]
    pub fn choose_move(&mut self, index: usize, board: &Board, player: Player) -> Option<usize> {
        self.choose_move_with(self.difficulty, index, board, player)
    }

    /// Like [`Opponent::choose_move`] but at an explicit difficulty.
    pub fn choose_move_with(
        &mut self,
        difficulty: Difficulty,
        index: usize,
        board: &Board,
        player: Player,
    ) -> Option<usize> {
        if difficulty == Difficulty::Medium {
            let available = board.available_squares();
            let threat = [player, player.opponent()]
                .into_iter()
                .filter_map(|p| self.lookahead.one_away_from_win(index, p))
                .find(|square| available.contains(square));
            if threat.is_some() {
                return threat;
            }
        }
        board.available_squares().choose(&mut self.rng).copied()
    }

    /// Picks a whole claim `(board, square)` for `player`.
    ///
    /// A pinned routing fixes the board. Under [`Routing::AnyOpen`] the
    /// medium opponent looks for a board it can win, then one it must block;
    /// otherwise a random open board is used.
    #[instrument(skip(self, boards))]
    pub fn choose_claim(
        &mut self,
        difficulty: Difficulty,
        boards: &[Board; 9],
        routing: Routing,
        player: Player,
    ) -> Option<(usize, usize)> {
        let candidates: Vec<usize> = match routing {
            Routing::Board(index) => vec![index],
            Routing::AnyOpen => (0..9).filter(|&i| boards[i].is_open()).collect(),
        };

        if difficulty == Difficulty::Medium {
            for threatened in [player, player.opponent()] {
                let hit = candidates.iter().find_map(|&b| {
                    self.lookahead
                        .one_away_from_win(b, threatened)
                        .filter(|&s| boards[b].square(s).is_some_and(|sq| sq.is_empty()))
                        .map(|s| (b, s))
                });
                if hit.is_some() {
                    return hit;
                }
            }
        }

        let board = *candidates.choose(&mut self.rng)?;
        let square = self.choose_move_with(difficulty, board, &boards[board], player)?;
        Some((board, square))
    }
}
