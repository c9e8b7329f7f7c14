//! Outcome computation: win and draw detection.

use super::types::{Board, Cell, Outcome};
use tracing::instrument;

/// The 8 lines that end the game when one player fills them:
/// 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Computes the outcome for a board.
///
/// Scans [`WIN_LINES`] in order and reports the first completed line.
/// A full board with no completed line is a draw; anything else is
/// still in progress.
#[instrument]
pub fn outcome(board: &Board) -> Outcome {
    for [a, b, c] in WIN_LINES {
        let cell = board.get(a);
        if let Some(Cell::Occupied(winner)) = cell
            && cell == board.get(b)
            && cell == board.get(c)
        {
            return Outcome::Won {
                winner,
                line: [a, b, c],
            };
        }
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::Position;
    use super::super::types::Player;
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for (position, player) in marks {
            board.set(*position, Cell::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        assert_eq!(
            outcome(&board),
            Outcome::Won {
                winner: Player::X,
                line: [0, 1, 2],
            }
        );
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
        ]);
        assert_eq!(
            outcome(&board),
            Outcome::Won {
                winner: Player::O,
                line: [1, 4, 7],
            }
        );
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        assert_eq!(
            outcome(&board),
            Outcome::Won {
                winner: Player::O,
                line: [2, 4, 6],
            }
        );
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
        ]);
        assert_eq!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_draw_full_board_no_line() {
        // X O X / O X X / O X O
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::O),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(outcome(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_won_not_draw() {
        // X wins the top row on a board that is also full.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::O),
            (Position::Center, Player::O),
            (Position::MiddleRight, Player::X),
            (Position::BottomLeft, Player::O),
            (Position::BottomCenter, Player::X),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(outcome(&board).winner(), Some(Player::X));
    }

    #[test]
    fn test_first_matching_line_reported() {
        // Pathological board where X holds two lines; the scan order
        // makes the top row the reported one.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::Center, Player::X),
            (Position::MiddleRight, Player::X),
        ]);
        assert_eq!(outcome(&board).winning_line(), Some([0, 1, 2]));
    }
}
