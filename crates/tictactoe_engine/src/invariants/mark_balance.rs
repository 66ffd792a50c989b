//! X moves first and players alternate, so X leads O by at most one mark.

use super::Invariant;
use crate::session::GameSession;
use crate::types::Player;

/// Invariant: X count minus O count is 0 or 1, and the player to move
/// matches that difference.
pub struct MarkBalance;

impl Invariant<GameSession> for MarkBalance {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        if x != o && x != o + 1 {
            return false;
        }

        // After a finished game the mover is left in place.
        if session.is_terminal() {
            return true;
        }

        let expected = if x == o { Player::X } else { Player::O };
        session.to_move() == expected
    }

    fn description() -> &'static str {
        "X leads O by zero or one mark and the right player is to move"
    }
}
