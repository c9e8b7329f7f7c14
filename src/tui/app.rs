//! Application state: the engine plus the cursor.
//!
//! The app holds no authoritative game state of its own; every frame
//! is rendered from the engine, and rejected moves leave it untouched.

use crate::engine::{Game, Outcome, Position};
use crossterm::event::KeyCode;
use tracing::{debug, info};

use super::input;

/// Main application state.
pub struct App {
    game: Game,
    cursor: Position,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
        }
    }

    /// Returns the game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Marks the cell at the given board index for the current player.
    ///
    /// Rejected moves are logged and otherwise ignored: unplayable
    /// cells are rendered as such, so rejection is unreachable through
    /// normal interaction, but the result is still checked.
    pub fn mark(&mut self, index: usize) {
        match self.game.apply_move(index) {
            Ok(mov) => info!(%mov, "mark placed"),
            Err(err) => debug!(%err, index, "move rejected"),
        }
    }

    /// Marks the cursor cell.
    pub fn mark_cursor(&mut self) {
        self.mark(self.cursor.index());
    }

    /// Restarts the game. Always available, no confirmation.
    pub fn restart(&mut self) {
        info!("game restarted");
        self.game.restart();
    }

    /// Status line text, recomputed from the outcome each render.
    pub fn status_text(&self) -> String {
        match self.game.outcome() {
            Outcome::Won { winner, .. } => format!("Winner: {winner}"),
            Outcome::Draw => "Draw game!".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.game.current_player()),
        }
    }

    /// Descriptive label for the cursor cell, e.g. "Cell 5" or
    /// "Cell 5, X", with a note when it cannot be marked.
    pub fn cursor_label(&self) -> String {
        let number = self.cursor.index() + 1;
        match self.game.board().cell(self.cursor).occupant() {
            Some(player) => format!("Cell {number}, {player} (taken)"),
            None if self.game.outcome().is_over() => format!("Cell {number} (locked)"),
            None => format!("Cell {number} (open)"),
        }
    }
}
