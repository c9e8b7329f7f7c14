//! The game engine: applies moves, flips turns, resets.

use super::action::{Move, MoveError};
use super::invariants::{Invariant, MarkBalanceInvariant, SingleWinnerInvariant};
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Outcome, Player};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns the board and the turn state. The outcome has no independent
/// lifecycle: it is recomputed from the board on every read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    next: Player,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn is next.
    pub fn current_player(&self) -> Player {
        self.next
    }

    /// Computes the current outcome from the board.
    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.board)
    }

    /// Applies a move for the current player at the given index (0-8).
    ///
    /// On success exactly one cell transitions from empty to the
    /// mover's mark, the turn flips, and the accepted [`Move`] is
    /// returned.
    ///
    /// # Errors
    ///
    /// Rejects without mutating when the game is already over, the
    /// index is out of bounds, or the cell is occupied.
    #[instrument(skip(self), fields(player = %self.next))]
    pub fn apply_move(&mut self, index: usize) -> Result<Move, MoveError> {
        if self.outcome().is_over() {
            return Err(MoveError::GameOver);
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;

        if !self.board.is_empty(index) {
            return Err(MoveError::CellOccupied(position));
        }

        let mov = Move::new(self.next, position);
        self.board.set(position, Cell::Occupied(mov.player));
        self.next = self.next.opponent();
        debug!(%mov, "move accepted");

        debug_assert!(
            MarkBalanceInvariant::holds(self),
            "{}",
            MarkBalanceInvariant::description()
        );
        debug_assert!(
            SingleWinnerInvariant::holds(self),
            "{}",
            SingleWinnerInvariant::description()
        );

        Ok(mov)
    }

    /// Resets to the initial state: empty board, X to move.
    ///
    /// Always succeeds, regardless of the current outcome.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("restarting game");
        self.board = Board::new();
        self.next = Player::X;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl Game {
    /// Direct board access so tests can set up corrupted states.
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
