//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first, and the current
/// turn must match history parity.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        if let Some(first) = history.first() {
            if first.player != Player::X {
                return false;
            }
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };

        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "players alternate turns (X, O, X, O, ...)"
    }
}
