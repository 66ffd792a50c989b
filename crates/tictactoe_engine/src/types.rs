//! Core domain types for tic-tac-toe.

use super::position::Position;
use super::rules::{self, Line};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second; the computer in human-vs-computer games).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Single-character rendering used by `Board`'s `Display`.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }
}

/// Read-only 3x3 view of a board, indexed `[row][col]`.
pub type Grid = [[Cell; 3]; 3];

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Puts `player`'s mark on an empty cell.
    ///
    /// The cell must be empty; legality is the caller's job (see
    /// `MoveContract`).
    pub fn place(&mut self, pos: Position, player: Player) {
        debug_assert!(self.is_empty(pos), "place on occupied cell {pos:?}");
        self.cells[pos.to_index()] = Cell::Occupied(player);
    }

    /// Empties a cell again. Used to undo tentative placements.
    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.to_index()] = Cell::Empty;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }

    /// True iff `player` occupies an entire row, column or diagonal.
    pub fn winner(&self, player: Player) -> bool {
        rules::has_line(self, player)
    }

    /// The line `player` has completed, if any.
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        rules::winning_line(self, player)
    }

    /// True iff no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Row-major 3x3 copy of the board.
    pub fn grid(&self) -> Grid {
        let mut grid = [[Cell::Empty; 3]; 3];
        for pos in Position::ALL {
            grid[pos.row()][pos.col()] = self.get(pos);
        }
        grid
    }

    /// Board with every X replaced by O and vice versa.
    pub fn swap_marks(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut() {
            if let Cell::Occupied(player) = *cell {
                *cell = Cell::Occupied(player.opponent());
            }
        }
        swapped
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.grid().iter().enumerate() {
            let line: Vec<String> = cells.iter().map(|c| c.symbol().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Board text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// A character that is not a mark, an empty marker or a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(char),

    /// Not exactly nine cells.
    #[display("Board needs 9 cells, found {}", _0)]
    WrongCellCount(usize),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and `-` are empty cells.
    /// Whitespace and `/` are separators, so `"XX./.O./..."` and a
    /// three-line grid both work.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Cell::Occupied(Player::X)),
                'O' | 'o' => cells.push(Cell::Occupied(Player::O)),
                '.' | '_' | '-' => cells.push(Cell::Empty),
                '/' => {}
                c if c.is_whitespace() => {}
                c => return Err(BoardParseError::UnexpectedChar(c)),
            }
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongCellCount(v.len()))?;
        Ok(Self { cells })
    }
}
