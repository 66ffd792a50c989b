//! Game sessions: the rule engine and the front end's entry point.
//!
//! A `GameSession` exclusively owns one board, the player to move and
//! the recorded status. Front ends create one per game, feed it moves
//! with `apply_move`, ask `select_computer_move` for O's reply in
//! human-vs-computer games, and render from `board_snapshot`.
//!
//! X always moves first. Against the computer the human is X and the
//! computer is O.

use super::action::{Move, MoveError};
use super::ai::{Difficulty, MoveRng, select_move};
use super::contracts::{Contract, GameNotOver, MoveContract};
use super::outcome::{GameStatus, Outcome};
use super::position::Position;
use super::types::{Board, Grid, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who sits in the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Two humans share the board.
    HumanVsHuman,
    /// Human plays X, the computer plays O at the given difficulty.
    HumanVsComputer(Difficulty),
}

impl GameMode {
    /// The computer's mark, if a computer plays.
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer(_) => Some(Player::O),
        }
    }

    /// The computer's difficulty, if a computer plays.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::HumanVsHuman => None,
            GameMode::HumanVsComputer(difficulty) => Some(*difficulty),
        }
    }
}

/// One game from the first move to a win or a draw.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) mode: GameMode,
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    pub(crate) rng: MoveRng,
}

impl GameSession {
    /// Human-vs-computer session at `difficulty`, randomly seeded.
    #[instrument]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_rng(GameMode::HumanVsComputer(difficulty), MoveRng::from_random())
    }

    /// Two-human session.
    pub fn human_vs_human() -> Self {
        Self::with_rng(GameMode::HumanVsHuman, MoveRng::from_random())
    }

    /// Session with a reproducible random source.
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, MoveRng::new(seed))
    }

    /// Session using the given random source for Easy and Medium play.
    #[instrument(skip(rng), fields(seed = rng.seed()))]
    pub fn with_rng(mode: GameMode, rng: MoveRng) -> Self {
        debug!("Creating game session");
        Self {
            mode,
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            rng,
        }
    }

    /// Rebuilds a session by playing `positions` in order from an empty board.
    ///
    /// Fails on the first illegal position.
    #[instrument(skip(positions), fields(moves = positions.len()))]
    pub fn replay(mode: GameMode, positions: &[Position]) -> Result<Self, MoveError> {
        let mut session = Self::with_rng(mode, MoveRng::from_random());
        for pos in positions {
            session.apply_position(*pos)?;
        }
        Ok(session)
    }

    /// Places the current player's mark at `(row, col)`.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            warn!(row, col, "Move outside the board");
            MoveError::OutOfBounds { row, col }
        })?;
        self.apply_position(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On error the session is unchanged.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_position(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if let Err(e) = MoveContract::pre(self, &pos) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mover = self.to_move;
        self.board.place(pos, mover);
        self.history.push(Move::new(mover, pos));

        let outcome = if let Some(line) = self.board.winning_line(mover) {
            self.status = GameStatus::Won(mover);
            Outcome::Win {
                player: mover,
                line,
            }
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            Outcome::Draw
        } else {
            self.to_move = mover.opponent();
            Outcome::Continue(self.to_move)
        };

        #[cfg(debug_assertions)]
        {
            if let Err(e) = MoveContract::post(&before, self) {
                *self = before;
                return Err(e);
            }
        }

        if outcome.is_terminal() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(%outcome, "Move accepted");
        }
        Ok(outcome)
    }

    /// The computer's next cell. Does not play it.
    ///
    /// Only valid in human-vs-computer mode with O to move on a running game.
    #[instrument(skip(self))]
    pub fn select_computer_move(&mut self) -> Result<Position, MoveError> {
        GameNotOver::check(self)?;

        let difficulty = match self.mode {
            GameMode::HumanVsComputer(difficulty) if self.to_move == Player::O => difficulty,
            _ => return Err(MoveError::NotComputerTurn),
        };

        select_move(&self.board, Player::O, difficulty, &mut self.rng).ok_or(MoveError::GameOver)
    }

    /// Selects and plays the computer's move.
    pub fn play_computer_turn(&mut self) -> Result<(Position, Outcome), MoveError> {
        let pos = self.select_computer_move()?;
        let outcome = self.apply_position(pos)?;
        Ok((pos, outcome))
    }

    /// Clears the board for a new game in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Read-only copy of the board for rendering.
    pub fn board_snapshot(&self) -> Grid {
        self.board.grid()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move. Unchanged once the game is over.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The computer's difficulty, if a computer plays.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.mode.difficulty()
    }

    /// True when the player to move is the computer.
    pub fn is_computer_turn(&self) -> bool {
        !self.is_terminal() && self.mode.computer() == Some(self.to_move)
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The most recent accepted move.
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Seed of the session's random source.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}
