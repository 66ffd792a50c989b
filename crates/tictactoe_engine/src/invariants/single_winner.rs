//! At most one player can hold a completed line.

use super::Invariant;
use crate::outcome::GameStatus;
use crate::session::GameSession;
use crate::types::Player;

/// Invariant: never both players with a line, and a line exists exactly
/// when the session records a win for that player.
pub struct SingleWinner;

impl Invariant<GameSession> for SingleWinner {
    fn holds(session: &GameSession) -> bool {
        let board = session.board();
        let x = board.winner(Player::X);
        let o = board.winner(Player::O);

        match session.status() {
            GameStatus::Won(Player::X) => x && !o,
            GameStatus::Won(Player::O) => o && !x,
            GameStatus::InProgress | GameStatus::Draw => !x && !o,
        }
    }

    fn description() -> &'static str {
        "At most one player has a line, and only the recorded winner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_win() {
        let session = GameSession::replay(
            crate::GameMode::HumanVsHuman,
            &[
                Position::TopLeft,
                Position::Center,
                Position::TopCenter,
                Position::BottomLeft,
                Position::TopRight,
            ],
        )
        .unwrap();
        assert_eq!(session.status(), GameStatus::Won(Player::X));
        assert!(SingleWinner::holds(&session));
    }
}
