//! Hard difficulty: exhaustive minimax over the remaining game tree.
//!
//! Scores are from O's point of view: +1 when O has a line, -1 when X
//! has one, 0 otherwise. O maximizes and X minimizes. No pruning, no
//! depth limit and no memoization; at nine cells the full tree is a few
//! hundred thousand positions.
//!
//! Among equally scored moves the first one in row-major order wins,
//! because the best move is only replaced on a strictly better score.

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::{debug, instrument};

/// Value of a position for O.
pub const O_WINS: i8 = 1;
/// Value of a position for X.
pub const X_WINS: i8 = -1;
/// Value of a drawn or undecided position.
pub const NEUTRAL: i8 = 0;

/// Result of a full search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Minimax value from O's point of view.
    pub score: i8,
    /// First optimal cell for the player to move; `None` on terminal boards.
    pub best_move: Option<Position>,
    /// Positions visited, root included.
    pub nodes: u64,
}

/// Static evaluation: +1 if O has a line, -1 if X has one, 0 otherwise.
///
/// Does not distinguish a draw from an unfinished game.
pub fn evaluate(board: &Board) -> i8 {
    if board.winner(Player::O) {
        O_WINS
    } else if board.winner(Player::X) {
        X_WINS
    } else {
        NEUTRAL
    }
}

/// Searches `board` with `to_move` to play.
///
/// Works on a private copy; `board` itself is never modified.
#[instrument(skip(board), fields(empty = board.empty_cells().len()))]
pub fn minimax(board: &Board, to_move: Player) -> SearchResult {
    let mut scratch = *board;
    let mut nodes = 0;
    let (score, best_move) = search(&mut scratch, to_move, &mut nodes);
    debug!(score, ?best_move, nodes, "Minimax search finished");
    SearchResult {
        score,
        best_move,
        nodes,
    }
}

/// Optimal cell for `player`, or `None` if the game is already decided.
pub fn best_move(board: &Board, player: Player) -> Option<Position> {
    minimax(board, player).best_move
}

fn search(board: &mut Board, to_move: Player, nodes: &mut u64) -> (i8, Option<Position>) {
    *nodes += 1;

    match evaluate(board) {
        O_WINS => return (O_WINS, None),
        X_WINS => return (X_WINS, None),
        _ => {}
    }
    if board.is_full() {
        return (NEUTRAL, None);
    }

    let mut best = match to_move {
        Player::O => i8::MIN,
        Player::X => i8::MAX,
    };
    let mut best_move = None;

    for pos in board.empty_cells() {
        board.place(pos, to_move);
        let (score, _) = search(board, to_move.opponent(), nodes);
        board.clear(pos);

        let improves = match to_move {
            Player::O => score > best,
            Player::X => score < best,
        };
        if improves {
            best = score;
            best_move = Some(pos);
        }
    }

    (best, best_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate(&Board::new()), NEUTRAL);
        assert_eq!(evaluate(&"OOO/XX./X..".parse().unwrap()), O_WINS);
        assert_eq!(evaluate(&"XXX/OO./O..".parse().unwrap()), X_WINS);
        assert_eq!(evaluate(&"XOX/OXX/OXO".parse().unwrap()), NEUTRAL);
    }

    #[test]
    fn test_terminal_boards_have_no_move() {
        let won: Board = "OOO/XX./X..".parse().unwrap();
        let result = minimax(&won, Player::X);
        assert_eq!(result.score, O_WINS);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        let result = minimax(&drawn, Player::O);
        assert_eq!(result.score, NEUTRAL);
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_o_takes_immediate_win() {
        let board: Board = "OO./XX./..X".parse().unwrap();
        let result = minimax(&board, Player::O);
        assert_eq!(result.score, O_WINS);
        assert_eq!(result.best_move, Some(Position::TopRight));
    }

    #[test]
    fn test_x_takes_immediate_win() {
        let board: Board = "XX./OO./...".parse().unwrap();
        let result = minimax(&board, Player::X);
        assert_eq!(result.score, X_WINS);
        assert_eq!(result.best_move, Some(Position::TopRight));
    }

    #[test]
    fn test_search_leaves_board_untouched() {
        let board: Board = "X../.O./...".parse().unwrap();
        let before = board;
        let _ = minimax(&board, Player::X);
        assert_eq!(board, before);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let result = minimax(&Board::new(), Player::X);
        assert_eq!(result.score, NEUTRAL);
        // Every opening draws, so the first cell scanned is kept.
        assert_eq!(result.best_move, Some(Position::TopLeft));
        // Full game tree: 549,945 positions below the root.
        assert_eq!(result.nodes, 549_946);
    }
}
