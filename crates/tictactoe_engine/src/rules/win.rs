//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Cell, Player};

/// Three cells forming a row, column or diagonal.
pub type Line = [Position; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line (in `LINES` order) fully held by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// True iff `player` holds any complete line.
pub fn has_line(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. O is checked first, so a malformed board where
/// both players hold a line reports O.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::O, Player::X]
        .into_iter()
        .find(|player| has_line(board, *player))
}
