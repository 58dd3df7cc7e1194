//! First-class move types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They capture the acting
//! player and the chosen position, and they serialize for replay.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Error returned when a move request cannot be accepted.
///
/// The engine leaves board, turn, and status untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The position index is outside the 3x3 grid.
    #[display("position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the position is already occupied.
    #[display("square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has already ended.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
