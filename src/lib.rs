//! Rule engine for two-player tic-tac-toe.
//!
//! The crate owns board state, turn alternation, and win/tie detection,
//! and pushes the updated state to registered presentation observers
//! after every accepted mutation. Rendering, animation, and input
//! handling live entirely downstream.
//!
//! # Architecture
//!
//! - **Engine**: [`Game`] accepts moves, derives the status, and notifies
//!   [`GameObserver`]s.
//! - **Rules**: pure win/draw evaluation over a [`Board`], including which
//!   triple completed ([`check_winner`]).
//! - **Invariants**: first-class properties ([`Invariant`]) asserted in
//!   debug builds and validated on [`Game::restore`].
//! - **Persistence**: [`GameState`] is a serde-serializable flat record.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! # fn main() -> Result<(), tictactoe_engine::MoveError> {
//! let mut game = Game::new();
//! game.make_move(0)?; // X takes the top-left corner
//! game.make_move(4)?; // O answers in the center
//!
//! assert_eq!(game.state().current_player(), Player::X);
//! assert_eq!(game.state().status(), GameStatus::InProgress);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod game;
mod invariants;
mod observer;
mod position;
mod rules;
mod types;

// Crate-level exports - move actions and errors
pub use action::{Move, MoveError};

// Crate-level exports - engine
pub use game::{Game, RestoreError};

// Crate-level exports - invariants
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MarkBalanceInvariant,
};

// Crate-level exports - observer interface
pub use observer::GameObserver;

// Crate-level exports - positions
pub use position::{ParsePositionError, Position};

// Crate-level exports - rules
pub use rules::{LINES, Win, check_winner, is_draw, is_full};

// Crate-level exports - core types
pub use types::{Board, GameState, GameStatus, Mark, Player, Square};
