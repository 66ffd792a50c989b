//! The move history explains the board exactly.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Cell;

/// Invariant: one history entry per filled cell, each cell holding its
/// mover's mark, movers alternating from X.
pub struct HistoryConsistent;

impl Invariant<GameSession> for HistoryConsistent {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let history = session.history();

        let filled = board.cells().iter().filter(|c| **c != Cell::Empty).count();
        if filled != history.len() {
            return false;
        }

        let mut expected = crate::Player::X;
        for mov in history {
            if mov.player != expected {
                return false;
            }
            if board.get(mov.position) != Cell::Occupied(mov.player) {
                return false;
            }
            expected = expected.opponent();
        }
        true
    }

    fn description() -> &'static str {
        "History matches the board and alternates from X"
    }
}
