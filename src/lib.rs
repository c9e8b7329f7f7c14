//! Terminal tic-tac-toe for two local players.
//!
//! The crate is split into a pure game engine and a thin presentation
//! layer:
//!
//! - [`engine`]: board, turn, and outcome logic with no I/O.
//! - [`tui`]: renders the engine state with ratatui and feeds key
//!   events back in.
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::engine::{Game, Outcome, Player};
//!
//! let mut game = Game::new();
//! game.apply_move(4)?;
//! assert_eq!(game.current_player(), Player::O);
//! assert_eq!(game.outcome(), Outcome::InProgress);
//! # Ok::<(), tictactoe_tui::engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod engine;
pub mod tui;

pub use engine::{Board, Cell, Game, Move, MoveError, Outcome, Player, Position};
