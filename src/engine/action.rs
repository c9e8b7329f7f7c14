//! Move and rejection types.
//!
//! An accepted move is a domain event: it can be logged, serialized,
//! and asserted on in tests independently of the board it mutated.

use super::position::Position;
use super::types::Player;
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The position where the mark was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reasons a move is rejected.
///
/// Rejection never mutates the engine; callers discard the request
/// and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    #[display("Cell at {} is already occupied", _0)]
    CellOccupied(Position),

    /// The index does not address a board cell.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Player::X, Position::Center);
        assert_eq!(mov.to_string(), "X -> Center");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MoveError::CellOccupied(Position::TopLeft).to_string(),
            "Cell at Top-left is already occupied"
        );
        assert_eq!(
            MoveError::OutOfBounds(9).to_string(),
            "Index 9 is out of bounds (must be 0-8)"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
