//! Pure tic-tac-toe game logic: board, turn, and outcome.
//!
//! No I/O lives here; the presentation layer renders from this state
//! and feeds intents back in through [`Game::apply_move`] and
//! [`Game::restart`].

mod action;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use invariants::{Invariant, MarkBalanceInvariant, SingleWinnerInvariant};
pub use position::Position;
pub use rules::{WIN_LINES, outcome};
pub use types::{Board, Cell, Outcome, Player};
