//! Medium difficulty: a fixed-priority rule chain.
//!
//! Rules are tried top to bottom and the first one that applies decides:
//!
//! 1. complete one of our own lines,
//! 2. block a line the opponent could complete,
//! 3. take the center,
//! 4. take a corner, in the order (0,0), (0,2), (2,0), (2,2),
//! 5. any empty cell, uniformly at random.
//!
//! Rules 1 and 2 scan empty cells in row-major order. The chain never
//! looks for forks, which keeps this level beatable.

use super::rng::MoveRng;
use crate::position::Position;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule produced a heuristic move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rule {
    /// Completes a line for the mover.
    #[display("win")]
    Win,
    /// Occupies the cell the opponent needs.
    #[display("block")]
    Block,
    /// Center cell.
    #[display("center")]
    Center,
    /// First free corner.
    #[display("corner")]
    Corner,
    /// Random empty cell.
    #[display("random")]
    Fallback,
}

/// A heuristic move together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Cell to play.
    pub position: Position,
    /// Rule that fired.
    pub rule: Rule,
}

/// Runs the rule chain for `me`. `None` only on a full board.
#[instrument(skip(board, rng))]
pub fn decide(board: &Board, me: Player, rng: &mut MoveRng) -> Option<Decision> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return None;
    }

    let decision = if let Some(position) = completing_cell(board, &empty, me) {
        Decision {
            position,
            rule: Rule::Win,
        }
    } else if let Some(position) = completing_cell(board, &empty, me.opponent()) {
        Decision {
            position,
            rule: Rule::Block,
        }
    } else if board.is_empty(Position::Center) {
        Decision {
            position: Position::Center,
            rule: Rule::Center,
        }
    } else if let Some(position) = Position::CORNERS
        .iter()
        .copied()
        .find(|pos| board.is_empty(*pos))
    {
        Decision {
            position,
            rule: Rule::Corner,
        }
    } else {
        Decision {
            position: rng.choose(&empty)?,
            rule: Rule::Fallback,
        }
    };

    debug!(position = ?decision.position, rule = %decision.rule, "Heuristic move chosen");
    Some(decision)
}

/// The Medium policy's cell for `me`.
pub fn heuristic_move(board: &Board, me: Player, rng: &mut MoveRng) -> Option<Position> {
    decide(board, me, rng).map(|d| d.position)
}

/// First empty cell where `player`'s mark would complete a line.
fn completing_cell(board: &Board, empty: &[Position], player: Player) -> Option<Position> {
    let mut scratch = *board;
    for &pos in empty {
        scratch.place(pos, player);
        let wins = scratch.winner(player);
        scratch.clear(pos);
        if wins {
            return Some(pos);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide_o(board: &str) -> Decision {
        let board: Board = board.parse().unwrap();
        let mut rng = MoveRng::new(0);
        decide(&board, Player::O, &mut rng).unwrap()
    }

    #[test]
    fn test_blocks_row() {
        let d = decide_o("XX./.O./...");
        assert_eq!(d.position, Position::TopRight);
        assert_eq!(d.rule, Rule::Block);
    }

    #[test]
    fn test_win_beats_block() {
        let d = decide_o("OO./XX./..X");
        assert_eq!(d.position, Position::TopRight);
        assert_eq!(d.rule, Rule::Win);
    }

    #[test]
    fn test_first_winning_cell_in_scan_order() {
        // O can finish the left column, the middle column or the diagonal.
        let d = decide_o("OOX/OOX/...");
        assert_eq!(d.rule, Rule::Win);
        assert_eq!(d.position, Position::BottomLeft);
    }

    #[test]
    fn test_takes_center() {
        let d = decide_o("X../.../...");
        assert_eq!(d.position, Position::Center);
        assert_eq!(d.rule, Rule::Center);
    }

    #[test]
    fn test_corner_order() {
        assert_eq!(decide_o(".../.X./...").position, Position::TopLeft);
        assert_eq!(decide_o("O../.X./...").rule, Rule::Corner);
        // (0,0) taken: next preference is (0,2).
        assert_eq!(decide_o("X../OX./..O").position, Position::TopRight);
        assert_eq!(decide_o("XOX/.O./.X.").position, Position::BottomLeft);
    }

    #[test]
    fn test_fallback_when_no_rule_applies() {
        // Corners and center taken, nothing to win or block.
        let board: Board = "XXO/OOX/X.O".parse().unwrap();
        let mut rng = MoveRng::new(11);
        let d = decide(&board, Player::O, &mut rng).unwrap();
        assert_eq!(d.rule, Rule::Fallback);
        assert_eq!(d.position, Position::BottomCenter);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        let mut rng = MoveRng::new(0);
        assert_eq!(decide(&board, Player::O, &mut rng), None);
    }
}
