//! First-class invariants over engine state.
//!
//! Invariants are logical properties that must hold after every
//! accepted move. They are checked in debug builds and testable
//! independently.

use super::game::Game;
use super::rules::WIN_LINES;
use super::types::{Cell, Player};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Invariant: mark counts match strict turn alternation.
///
/// X moves first, so X holds as many marks as O when X is to move,
/// and exactly one more when O is to move.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let xs = mark_count(game, Player::X);
        let os = mark_count(game, Player::O);
        match game.current_player() {
            Player::X => xs == os,
            Player::O => xs == os + 1,
        }
    }

    fn description() -> &'static str {
        "Mark counts match strict turn alternation"
    }
}

/// Invariant: at most one player holds a completed line.
///
/// Alternating legal play cannot produce three-in-a-row for both
/// players, because the game stops accepting moves at the first one.
pub struct SingleWinnerInvariant;

impl Invariant<Game> for SingleWinnerInvariant {
    fn holds(game: &Game) -> bool {
        !(holds_line(game, Player::X) && holds_line(game, Player::O))
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}

fn mark_count(game: &Game, player: Player) -> usize {
    game.board()
        .cells()
        .iter()
        .filter(|c| **c == Cell::Occupied(player))
        .count()
}

fn holds_line(game: &Game, player: Player) -> bool {
    WIN_LINES.iter().any(|line| {
        line.iter()
            .all(|&i| game.board().get(i) == Some(Cell::Occupied(player)))
    })
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use super::*;

    #[test]
    fn test_hold_for_new_game() {
        let game = Game::new();
        assert!(MarkBalanceInvariant::holds(&game));
        assert!(SingleWinnerInvariant::holds(&game));
    }

    #[test]
    fn test_hold_through_a_full_game() {
        let mut game = Game::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
            assert!(SingleWinnerInvariant::holds(&game));
        }
    }

    #[test]
    fn test_mark_balance_detects_double_move() {
        let mut game = Game::new();
        game.apply_move(0).unwrap();

        // Corrupt the board: a second X mark without an O in between.
        let mut corrupted = game.clone();
        corrupted
            .board_mut()
            .set(Position::Center, Cell::Occupied(Player::X));
        assert!(!MarkBalanceInvariant::holds(&corrupted));
    }

    #[test]
    fn test_single_winner_detects_two_lines() {
        let mut game = Game::new();
        let board = game.board_mut();
        for position in [Position::TopLeft, Position::TopCenter, Position::TopRight] {
            board.set(position, Cell::Occupied(Player::X));
        }
        for position in [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ] {
            board.set(position, Cell::Occupied(Player::O));
        }
        assert!(!SingleWinnerInvariant::holds(&game));
    }
}
