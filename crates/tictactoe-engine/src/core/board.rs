use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use super::{
    cell::{Cell, Side},
    outcome::Outcome,
};

/// Number of rows (and columns) on the board.
pub const BOARD_SIDE: usize = 3;
/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// Three cell indices that win the game when they all carry the same mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line([usize; BOARD_SIDE]);

impl Line {
    #[must_use]
    pub const fn indices(self) -> [usize; BOARD_SIDE] {
        self.0
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

pub const ROWS: [Line; 3] = [Line([0, 1, 2]), Line([3, 4, 5]), Line([6, 7, 8])];
pub const COLUMNS: [Line; 3] = [Line([0, 3, 6]), Line([1, 4, 7]), Line([2, 5, 8])];
pub const DIAGONALS: [Line; 2] = [Line([0, 4, 8]), Line([2, 4, 6])];

/// All eight lines in evaluation order: rows, then columns, then diagonals.
pub const LINES: [Line; 8] = [
    ROWS[0],
    ROWS[1],
    ROWS[2],
    COLUMNS[0],
    COLUMNS[1],
    COLUMNS[2],
    DIAGONALS[0],
    DIAGONALS[1],
];

/// The 3×3 grid of cells.
///
/// Cells are stored row-major, so the cell at `(row, col)` lives at index
/// `row * 3 + col`:
///
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
///
/// `Board` only knows about marks and lines. Turn order and move legality are
/// enforced by [`GameState`](crate::GameState).
///
/// # Example
///
/// ```
/// use tictactoe_engine::{Board, Cell, Outcome};
///
/// let x = Cell::PlayerMark;
/// let o = Cell::AiMark;
/// let e = Cell::Empty;
/// let board = Board::from_cells([x, x, x, o, o, e, e, e, e]);
///
/// assert_eq!(board.evaluate(), Some(Outcome::PlayerWins));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub const EMPTY: Self = Self {
        cells: [Cell::Empty; CELL_COUNT],
    };

    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Converts a `(row, col)` pair into a cell index.
    #[must_use]
    pub const fn index_of(row: usize, col: usize) -> Option<usize> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Some(row * BOARD_SIDE + col)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Returns the indices of all empty cells in ascending order.
    #[must_use]
    pub fn empty_indices(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Returns the owner of `line` if all three of its cells carry that side's mark.
    #[must_use]
    pub fn line_owner(&self, line: Line) -> Option<Side> {
        let [a, b, c] = line.0.map(|index| self.cells[index]);
        if a == b && b == c { a.owner() } else { None }
    }

    /// Returns the first completed line in evaluation order, with its owner.
    #[must_use]
    pub fn winning_line(&self) -> Option<(Line, Side)> {
        LINES
            .into_iter()
            .find_map(|line| self.line_owner(line).map(|side| (line, side)))
    }

    /// Evaluates the board.
    ///
    /// Rows are checked first, then columns, then diagonals. If no line is
    /// complete and the board is full the game is a draw. Otherwise the game
    /// is still in progress and `None` is returned.
    #[must_use]
    pub fn evaluate(&self) -> Option<Outcome> {
        if let Some((_, side)) = self.winning_line() {
            return Some(Outcome::win_for(side));
        }
        self.is_full().then_some(Outcome::Draw)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_char())?;
            }
        }
        Ok(())
    }
}
