//! Integration tests for the AI opponent and deferred moves.

use ultimate_tictactoe::{
    Board, Difficulty, Game, GameEvent, MoveError, Opponent, OpponentMode, Player, Routing,
    RuleSettings,
};

fn human_game() -> Game {
    Game::new(RuleSettings::default().with_seed(11))
}

fn play(game: &mut Game, moves: &[(usize, usize)]) {
    for &(board, square) in moves {
        let player = game.current_player();
        if let Err(e) = game.attempt_claim(board, square, player) {
            panic!("claim ({board}, {square}) by {player} rejected: {e}");
        }
    }
}

/// X O X / X O O / O X X
fn drawn_board() -> Board {
    let mut board = Board::new();
    for (square, player) in [
        (0, Player::X),
        (1, Player::O),
        (2, Player::X),
        (3, Player::X),
        (4, Player::O),
        (5, Player::O),
        (6, Player::O),
        (7, Player::X),
        (8, Player::X),
    ] {
        assert!(board.claim(square, player).succeeded());
    }
    board
}

#[test]
fn test_medium_completes_own_line() {
    let mut game = human_game();
    // O holds squares 0 and 3 of board 7 and is sent back there.
    play(&mut game, &[(4, 7), (7, 0), (0, 7), (7, 3), (3, 7)]);
    assert_eq!(
        game.opponent().lookahead().one_away_from_win(7, Player::O),
        Some(6)
    );

    game.set_opponent_mode(OpponentMode::Medium);
    assert_eq!(game.pending_tasks(), 1);
    let reports = game.run_pending().expect("opponent move");

    assert_eq!(reports.len(), 1);
    let report = &reports[0];
    assert_eq!((*report.board(), *report.square()), (7, 6));
    assert_eq!(report.board_won(), Some(7));
    assert_eq!(game.board_winners()[7], Some(Player::O));
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.routing(), Some(Routing::Board(6)));
}

#[test]
fn test_medium_blocks_opponent_line() {
    let mut game = human_game();
    // X holds squares 4 and 7 of board 4; O has nothing there.
    play(&mut game, &[(4, 7), (7, 4), (4, 4)]);

    game.set_opponent_mode(OpponentMode::Medium);
    let reports = game.run_pending().expect("opponent move");

    assert_eq!(reports.len(), 1);
    assert_eq!((*reports[0].board(), *reports[0].square()), (4, 1));
    assert_eq!(*reports[0].player(), Player::O);
    assert_eq!(game.board_winners()[4], None);
}

#[test]
fn test_human_move_schedules_exactly_one_ai_move() {
    let settings = RuleSettings::default()
        .with_opponent(OpponentMode::Medium)
        .with_seed(3);
    let mut game = Game::new(settings);
    assert_eq!(game.pending_tasks(), 0);

    let report = game.attempt_claim(4, 0, Player::X).expect("human move");
    assert!(report.opponent_scheduled());
    assert_eq!(report.events().last(), Some(&GameEvent::OpponentScheduled));
    assert_eq!(game.pending_tasks(), 1);
    assert!(game.is_ai_turn());

    // The human cannot move while the AI is to play.
    assert_eq!(
        game.attempt_claim(0, 4, Player::X),
        Err(MoveError::WrongPlayer(Player::X))
    );

    let reports = game.run_pending().expect("opponent move");
    assert_eq!(reports.len(), 1);
    assert_eq!(*reports[0].board(), 0);
    assert_eq!(*reports[0].player(), Player::O);
    assert!(!reports[0].opponent_scheduled());
    assert_eq!(game.pending_tasks(), 0);
    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.move_count(), 2);
}

#[test]
fn test_ai_playing_x_opens_the_game() {
    let settings = RuleSettings::default()
        .with_opponent(OpponentMode::Easy)
        .with_ai_player(Player::X)
        .with_seed(5);
    let mut game = Game::new(settings);
    assert_eq!(game.pending_tasks(), 1);

    let reports = game.run_pending().expect("opening move");
    assert_eq!(*reports[0].board(), 4);
    assert_eq!(*reports[0].player(), Player::X);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_switching_to_human_keeps_queued_move() {
    let settings = RuleSettings::default()
        .with_opponent(OpponentMode::Easy)
        .with_seed(9);
    let mut game = Game::new(settings);
    game.attempt_claim(4, 4, Player::X).expect("human move");
    game.set_opponent_mode(OpponentMode::Human);

    assert_eq!(game.opponent_mode(), OpponentMode::Human);
    assert!(!game.is_ai_turn());
    let reports = game.run_pending().expect("queued move still runs");
    assert_eq!(reports.len(), 1);
    assert_eq!(*reports[0].player(), Player::O);

    // From now on X's moves queue nothing.
    let claim = game.suggest_move(Difficulty::Easy).expect("a legal move");
    let report = game.apply(claim).expect("suggested move is legal");
    assert!(!report.opponent_scheduled());
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn test_set_opponent_mode_changes_difficulty() {
    let mut game = human_game();
    game.set_opponent_mode(OpponentMode::Easy);
    assert_eq!(game.opponent().difficulty(), Difficulty::Easy);
    game.set_opponent_mode(OpponentMode::Medium);
    assert_eq!(game.opponent().difficulty(), Difficulty::Medium);
    // X is to move, so nothing is queued.
    assert_eq!(game.pending_tasks(), 0);
}

#[test]
fn test_drawn_board_is_never_chosen() {
    let mut boards: [Board; 9] = Default::default();
    boards[0] = drawn_board();
    assert!(boards[0].available_squares().is_empty());

    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        for seed in 0..20 {
            let mut opponent = Opponent::new(difficulty, Some(seed));
            assert_eq!(opponent.choose_move(0, &boards[0], Player::O), None);
            assert_eq!(
                opponent.choose_claim(difficulty, &boards, Routing::Board(0), Player::O),
                None
            );
            let (board, _) = opponent
                .choose_claim(difficulty, &boards, Routing::AnyOpen, Player::O)
                .expect("open boards remain");
            assert_ne!(board, 0);
        }
    }
}

#[test]
fn test_seeded_opponents_agree() {
    let mut board = Board::new();
    assert!(board.claim(4, Player::X).succeeded());
    let mut a = Opponent::new(Difficulty::Easy, Some(42));
    let mut b = Opponent::new(Difficulty::Easy, Some(42));
    for _ in 0..10 {
        assert_eq!(
            a.choose_move(0, &board, Player::O),
            b.choose_move(0, &board, Player::O)
        );
    }
}

#[test]
fn test_self_play_always_terminates() {
    for seed in 0..10 {
        let settings = RuleSettings::default()
            .with_opponent(OpponentMode::Medium)
            .with_seed(seed);
        let mut game = Game::new(settings);
        while !game.is_over() {
            if game.is_ai_turn() {
                game.run_pending().expect("opponent move");
            } else {
                let claim = game.suggest_move(Difficulty::Easy).expect("a legal move");
                assert_eq!(claim.player, game.current_player());
                game.apply(claim).expect("suggested move is legal");
            }
        }
        assert!(game.outcome().is_some());
        assert!(game.move_count() <= 81);
        assert!(game.suggest_move(Difficulty::Medium).is_none());
    }
}
