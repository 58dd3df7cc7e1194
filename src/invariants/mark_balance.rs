//! Mark balance invariant: X and O counts differ by at most one.

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: marks placed for X and O differ by at most 1.
///
/// X moves first, so X may lead by exactly one; any other gap means a
/// player moved out of turn.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "mark counts for X and O differ by at most one, with X never behind"
    }
}
