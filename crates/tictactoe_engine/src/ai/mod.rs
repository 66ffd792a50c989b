//! Computer opponents and the move selector.
//!
//! `select_move` dispatches purely on `Difficulty`:
//! Easy picks a random empty cell, Medium runs the heuristic rule chain,
//! Hard runs the exhaustive minimax search.

pub mod difficulty;
pub mod heuristic;
pub mod minimax;
pub mod random;
pub mod rng;

pub use difficulty::{Difficulty, DifficultyError};
pub use heuristic::{Decision, Rule, decide, heuristic_move};
pub use minimax::{SearchResult, best_move, evaluate, minimax};
pub use random::random_move;
pub use rng::MoveRng;

use crate::position::Position;
use crate::types::{Board, Player};
use tracing::{info, instrument};

/// Chooses a cell for `player` at the given difficulty.
///
/// Returns `None` only when the board has no empty cell; callers must
/// not ask for a move on a finished game.
#[instrument(skip(board, rng))]
pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut MoveRng,
) -> Option<Position> {
    let choice = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => heuristic_move(board, player, rng),
        Difficulty::Hard => best_move(board, player),
    };
    info!(?choice, "Computer move selected");
    choice
}
