//! 3x3 board: cell values, placement, and terminal-state detection.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Mark of the first player to join a session (moves first).
    First,
    /// Mark of the second player to join.
    Second,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// A non-empty cell is never overwritten; [`Board::place`] is the only
/// mutation point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

/// The eight winning lines in scan order: rows first, then columns,
/// then the two diagonals. The order fixes which mark a scan reports
/// when a board (unreachable through legal play) holds several lines.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given row and column.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row > 2 || col > 2 {
            return None;
        }
        Some(self.cells[row * 3 + col])
    }

    /// Places a mark at the given row and column.
    ///
    /// Returns `false` without mutating the board when the coordinates
    /// fall outside `[0, 2]` or the cell is already occupied.
    #[instrument]
    pub fn place(&mut self, row: usize, col: usize, mark: Mark) -> bool {
        if row > 2 || col > 2 {
            return false;
        }
        let idx = row * 3 + col;
        if self.cells[idx] != Cell::Empty {
            return false;
        }
        self.cells[idx] = Cell::Occupied(mark);
        true
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Scans the three rows, three columns, and two diagonals for three
    /// identical non-empty marks.
    ///
    /// Returns the mark of the first complete line found, or `None`.
    #[instrument]
    pub fn winning_mark(&self) -> Option<Mark> {
        for [a, b, c] in LINES {
            let cell = self.cells[a];
            if cell != Cell::Empty && cell == self.cells[b] && cell == self.cells[c] {
                return match cell {
                    Cell::Occupied(mark) => Some(mark),
                    Cell::Empty => None,
                };
            }
        }
        None
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Formats the board as a human-readable grid.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.cells[row * 3 + col] {
                    Cell::Empty => ' ',
                    Cell::Occupied(Mark::First) => 'X',
                    Cell::Occupied(Mark::Second) => 'O',
                };
                result.push(symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
