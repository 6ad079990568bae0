//! Tests for turn orchestration in a game session.

use strictly_tictactoe::{Board, Cell, GameError, GameSession, Outcome, Position, SessionState, Symbol};

#[test]
fn test_first_move_scenario() {
    let mut board = Board::new();
    let mut session = GameSession::init(&mut board, Symbol::X, false);

    let result = session.play_turn(&mut board, 1).unwrap();
    assert!(!result.end);
    assert_eq!(result.message, None);
    assert_eq!(result.outcome, Outcome::InProgress);
    assert_eq!(board.get(Position::TopLeft), Cell::X);
    assert_eq!(session.active_symbol(), Symbol::O);
}

#[test]
fn test_two_humans_alternate_symbols() {
    let mut board = Board::new();
    let mut session = GameSession::init(&mut board, Symbol::O, false);

    // Column-by-column fill that ends in a draw.
    let order = [1, 2, 3, 5, 4, 7, 6, 9, 8];
    let mut expected = Symbol::O;
    for (turn, pos) in order.into_iter().enumerate() {
        assert_eq!(session.active_symbol(), expected);
        let result = session.play_turn(&mut board, pos).unwrap();
        let placed = board.get(Position::from_number(pos).unwrap());
        assert_eq!(placed, Cell::from(expected));
        assert_eq!(result.end, turn == order.len() - 1);
        expected = expected.opponent();
    }
    assert_eq!(session.state(), SessionState::Finished(Outcome::Draw));
}

#[test]
fn test_each_human_move_gets_one_bot_reply() {
    let mut board = Board::new();
    let mut session = GameSession::init(&mut board, Symbol::X, true);

    loop {
        let empty_before = board.empty_positions().len();
        let pos = board.empty_positions()[0];
        let result = session.play_turn(&mut board, pos.number()).unwrap();
        let placed = empty_before - board.empty_positions().len();

        if result.end {
            assert!(placed == 1 || placed == 2);
            assert!(result.message.is_some());
            break;
        }
        assert_eq!(placed, 2);
        assert_eq!(session.active_seat(), 0);
    }
}

#[test]
fn test_draw_message() {
    let mut board = Board::new();
    let mut session = GameSession::init(&mut board, Symbol::X, false);
    let mut last = None;
    for pos in [1, 2, 3, 5, 4, 7, 6, 9, 8] {
        last = Some(session.play_turn(&mut board, pos).unwrap());
    }
    let result = last.unwrap();
    assert!(result.end);
    assert_eq!(result.message.as_deref(), Some("Draw!"));
}

#[test]
fn test_init_starts_a_fresh_round() {
    let mut board = Board::new();
    let mut session = GameSession::init(&mut board, Symbol::X, false);
    for pos in [1, 4, 2, 5, 3] {
        session.play_turn(&mut board, pos).unwrap();
    }
    assert!(session.is_finished());
    assert_eq!(session.play_turn(&mut board, 9), Err(GameError::GameOver));

    let session = GameSession::init(&mut board, Symbol::X, false);
    assert_eq!(board, Board::new());
    assert_eq!(session.state(), SessionState::AwaitingMove(0));
}
