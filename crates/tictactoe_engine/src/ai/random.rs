//! Easy difficulty: any empty cell, uniformly.

use super::rng::MoveRng;
use crate::position::Position;
use crate::types::Board;

/// Uniformly random empty cell, or `None` on a full board.
pub fn random_move(board: &Board, rng: &mut MoveRng) -> Option<Position> {
    rng.choose(&board.empty_cells())
}
