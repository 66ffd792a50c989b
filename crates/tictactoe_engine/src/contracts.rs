//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P(state, action)} action {Q(before, after)}`. Preconditions run on
//! every move, before the board is touched. Postconditions run in debug
//! builds only.

use super::action::MoveError;
use super::invariants::{InvariantSet, SessionInvariants};
use super::position::Position;
use super::session::GameSession;
use super::types::Cell;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with `MoveError::GameOver` on a finished session.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), MoveError> {
        if session.is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with `MoveError::CellOccupied` when `pos` is taken.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), MoveError> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: a move is legal if the game is running and the cell is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), MoveError> {
        GameNotOver::check(session)?;
        CellIsEmpty::check(pos, session)?;
        Ok(())
    }
}

/// Contract for placing the current player's mark.
///
/// Preconditions:
/// - Game is not over
/// - Cell is empty
///
/// Postconditions:
/// - Exactly one cell changed, from empty to the mover's mark
/// - Session invariants hold
pub struct MoveContract;

impl Contract<GameSession, Position> for MoveContract {
    fn pre(session: &GameSession, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), MoveError> {
        let changed: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| before.board().get(*pos) != after.board().get(*pos))
            .collect();

        let mover = before.to_move();
        let single_placement = match changed.as_slice() {
            [pos] => {
                before.board().get(*pos) == Cell::Empty
                    && after.board().get(*pos) == Cell::Occupied(mover)
            }
            _ => false,
        };
        if !single_placement {
            warn!(?changed, "Board changed unexpectedly");
            return Err(MoveError::InvariantViolation(format!(
                "Postcondition failed: expected one new {} mark, cells changed: {:?}",
                mover, changed
            )));
        }

        SessionInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Session invariants violated");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_precondition_empty_cell() {
        let session = GameSession::human_vs_human();
        assert!(MoveContract::pre(&session, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut session = GameSession::human_vs_human();
        session.apply_position(Position::Center).unwrap();
        assert_eq!(
            MoveContract::pre(&session, &Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_over_checked_first() {
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
        // Occupied and finished: the finished game is reported.
        assert_eq!(
            MoveContract::pre(&session, &Position::TopLeft),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::human_vs_human();
        let mut after = before.clone();
        after.apply_position(Position::Center).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::human_vs_human();
        let mut after = before.clone();
        after.apply_position(Position::Center).unwrap();

        // Slip an extra O onto the board behind the session's back.
        after.board.place(Position::TopLeft, Player::O);
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_broken_history() {
        let before = GameSession::human_vs_human();
        let mut after = before.clone();
        after.apply_position(Position::Center).unwrap();
        after.history.clear();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
