//! The game engine: owns the state, accepts moves, derives the outcome.

use crate::action::MoveError;
use crate::invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, MarkBalanceInvariant,
    assert_invariants,
};
use crate::observer::GameObserver;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus, Player};
use std::fmt;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, the turn order, and the derived status. A presentation
/// layer drives it through [`Game::make_move`] and [`Game::reset`] and
/// receives the updated state through registered [`GameObserver`]s.
pub struct Game {
    state: GameState,
    observers: Vec<Box<dyn GameObserver>>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            observers: Vec::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns an owned copy of the state, e.g. for persistence.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Registers an observer, notified after every accepted mutation.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    /// Makes a move at the given raw index (0-8).
    ///
    /// This is the integer surface used by input handlers; see
    /// [`Game::place`] for the typed equivalent.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] for an index past 8, plus every error
    /// [`Game::place`] can return.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> Result<(), MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the turn flips to the other player, the status is
    /// recomputed, and observers are notified. On error the state is
    /// left untouched.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once the status is terminal and
    /// [`MoveError::SquareOccupied`] for a non-empty square.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state.status().is_terminal() {
            warn!(status = ?self.state.status(), "move rejected: game is over");
            return Err(MoveError::GameOver);
        }
        if !self.state.board().is_empty(pos) {
            warn!(%pos, "move rejected: square occupied");
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);
        self.update_status();
        assert_invariants(&self.state);

        debug!(%pos, %player, status = ?self.state.status(), "move accepted");
        self.notify();
        Ok(())
    }

    /// Restarts the game: empty board, X to move, observers notified.
    ///
    /// Always succeeds, regardless of the current phase.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("game reset");
        self.state = GameState::new();
        self.notify();
    }

    /// Returns the positions still open for play.
    pub fn valid_moves(&self) -> Vec<Position> {
        Position::valid_moves(self.state.board())
    }

    /// Rebuilds a game by replaying a move sequence through the
    /// validated move path.
    ///
    /// # Errors
    ///
    /// The first [`MoveError`] encountered, with the remaining moves
    /// unapplied.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Game::new();
        for &pos in moves {
            game.place(pos)?;
        }
        Ok(game)
    }

    /// Re-hydrates an engine from a saved state record.
    ///
    /// Only the structural invariants are validated. Status and winning
    /// line are derived state: they are recomputed from the board rather
    /// than trusted from the record.
    ///
    /// # Errors
    ///
    /// A [`RestoreError`] naming the first violated invariant.
    #[instrument(skip(record))]
    pub fn restore(record: GameState) -> Result<Self, RestoreError> {
        let mut state = record;
        state.set_status(GameStatus::InProgress);
        state.set_winning_line(None);

        if !MarkBalanceInvariant::holds(&state) {
            let board = state.board();
            return Err(RestoreError::MarkImbalance(
                board.count(Player::X),
                board.count(Player::O),
            ));
        }
        if !HistoryConsistentInvariant::holds(&state) {
            return Err(RestoreError::HistoryMismatch);
        }
        if !AlternatingTurnInvariant::holds(&state) {
            return Err(RestoreError::TurnMismatch);
        }

        let mut game = Game {
            state,
            observers: Vec::new(),
        };
        game.update_status();
        debug!(status = ?game.state.status(), "game restored from record");
        Ok(game)
    }

    /// Recomputes the derived status after a board change.
    fn update_status(&mut self) {
        if let Some(win) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won(win.player));
            self.state.set_winning_line(Some(win.line));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw);
        }
    }

    fn notify(&mut self) {
        for observer in &mut self.observers {
            observer.state_changed(&self.state);
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Error returned when a saved state record fails invariant validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RestoreError {
    /// The mark counts differ by more than one, or O leads.
    #[display("mark counts are unbalanced: {} X against {} O", _0, _1)]
    MarkImbalance(usize, usize),

    /// The recorded turn does not match the move history.
    #[display("recorded turn does not match the move history")]
    TurnMismatch,

    /// Replaying the recorded history does not reproduce the board.
    #[display("recorded history does not reproduce the board")]
    HistoryMismatch,
}

impl std::error::Error for RestoreError {}
