//! History consistency invariant: replaying the history reproduces the board.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: the move history and the board agree.
///
/// Replaying the history from an empty board must reproduce the current
/// board exactly, with every move landing on an empty square. Squares are
/// write-once; a board that cannot be reconstructed from its history has
/// been corrupted.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "replaying the move history reproduces the board"
    }
}
