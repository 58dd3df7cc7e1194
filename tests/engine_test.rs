//! Integration tests for the engine public API.

use std::cell::RefCell;
use std::rc::Rc;

use tictactoe_engine::{
    Game, GameObserver, GameState, GameStatus, MoveError, Player, Position, Square, is_draw,
};

#[test]
fn test_top_row_win() {
    // X: 0, 1, 2; O: 3, 4
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).expect("legal move");
    }

    assert_eq!(game.state().status(), GameStatus::Won(Player::X));
    assert_eq!(game.state().status().winner(), Some(Player::X));
    assert_eq!(
        game.state().winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_middle_row_win_for_o() {
    // X: 0, 1, 8; O: 3, 4, 5 (middle row)
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 8, 5] {
        game.make_move(index).expect("legal move");
    }

    assert_eq!(game.state().status(), GameStatus::Won(Player::O));
    assert_eq!(
        game.state().winning_line(),
        Some([
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight
        ])
    );
}

#[test]
fn test_tie_game() {
    // X: 0, 1, 5, 6, 7; O: 2, 3, 4, 8 - full board, no line
    let mut game = Game::new();
    for index in [0, 2, 1, 3, 5, 4, 6, 8, 7] {
        game.make_move(index).expect("legal move");
    }

    assert_eq!(game.state().status(), GameStatus::Draw);
    assert_eq!(game.state().winning_line(), None);
    assert!(game.valid_moves().is_empty());
    assert!(is_draw(game.state().board()));
}

#[test]
fn test_out_of_range_is_rejected_on_fresh_engine() {
    let mut game = Game::new();
    assert_eq!(game.make_move(9), Err(MoveError::OutOfBounds(9)));
    assert_eq!(game.snapshot(), Game::new().snapshot());
}

#[test]
fn test_occupied_square_is_rejected_unchanged() {
    let mut game = Game::new();
    game.make_move(4).expect("legal move");
    let before = game.snapshot();

    assert_eq!(
        game.make_move(4),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.state().current_player(), Player::O);
    assert_eq!(
        game.state().board().square(4),
        Some(Square::Occupied(Player::X))
    );
    assert_eq!(game.state().board().square(9), None);
    assert_eq!(
        game.state().board().get(Position::Center).player(),
        Some(Player::X)
    );
    assert_eq!(
        game.state().board().to_string(),
        "0|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8"
    );
}

#[test]
fn test_moves_rejected_once_game_is_over() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).expect("legal move");
    }
    let before = game.snapshot();

    // Position 5 is still empty, but the game has ended.
    assert_eq!(game.make_move(5), Err(MoveError::GameOver));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_reset_restores_initial_state() {
    let mut game = Game::new();
    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).expect("legal move");
    }
    assert!(game.state().status().is_terminal());

    game.reset();

    assert_eq!(game.state().status(), GameStatus::InProgress);
    assert_eq!(game.state().current_player(), Player::X);
    assert!(game.state().history().is_empty());
    assert_eq!(game.valid_moves().len(), 9);
    game.make_move(4).expect("play resumes after reset");
}

#[test]
fn test_turn_alternates_strictly() {
    let mut game = Game::new();
    for (n, &index) in [4usize, 0, 8, 2, 6].iter().enumerate() {
        let expected = if n % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.state().current_player(), expected);
        game.make_move(index).expect("legal move");
    }
}

#[test]
fn test_replay_matches_incremental_play() {
    let positions = [
        Position::Center,
        Position::TopLeft,
        Position::BottomRight,
        Position::TopRight,
    ];

    let replayed = Game::replay(&positions).expect("legal sequence");

    let mut incremental = Game::new();
    for pos in positions {
        incremental.place(pos).expect("legal move");
    }

    assert_eq!(replayed.snapshot(), incremental.snapshot());
}

#[test]
fn test_replay_stops_at_first_invalid_move() {
    let result = Game::replay(&[Position::Center, Position::Center]);
    assert_eq!(result.err(), Some(MoveError::SquareOccupied(Position::Center)));
}

/// Records each notification's status and move count.
struct Recorder {
    log: Rc<RefCell<Vec<(GameStatus, usize)>>>,
}

impl GameObserver for Recorder {
    fn state_changed(&mut self, state: &GameState) {
        self.log
            .borrow_mut()
            .push((state.status(), state.history().len()));
    }
}

#[test]
fn test_observer_sees_accepted_mutations_only() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut game = Game::new();
    game.subscribe(Box::new(Recorder { log: Rc::clone(&log) }));

    game.make_move(0).expect("legal move");
    game.make_move(0).expect_err("occupied square");
    game.make_move(4).expect("legal move");
    game.reset();

    assert_eq!(
        *log.borrow(),
        vec![
            (GameStatus::InProgress, 1),
            (GameStatus::InProgress, 2),
            (GameStatus::InProgress, 0),
        ]
    );
}

#[test]
fn test_observer_sees_terminal_status() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut game = Game::new();
    game.subscribe(Box::new(Recorder { log: Rc::clone(&log) }));

    for index in [0, 3, 1, 4, 2] {
        game.make_move(index).expect("legal move");
    }

    assert_eq!(
        log.borrow().last(),
        Some(&(GameStatus::Won(Player::X), 5))
    );
}

#[test]
fn test_valid_moves_shrink_as_squares_fill() {
    let mut game = Game::new();
    assert_eq!(game.valid_moves().len(), 9);

    game.make_move(4).expect("legal move");
    let valid = game.valid_moves();
    assert_eq!(valid.len(), 8);
    assert!(!valid.contains(&Position::Center));
}
