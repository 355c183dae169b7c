//! N-Queens by depth-first backtracking, one row per recursion level.
//!
//! Rows are filled top to bottom and candidate columns are tried in ascending
//! order. That order fixes which solution is found first and, with it, the exact
//! operation counts, so it must not change.
//!
//! Charging rules:
//! - one `recursive_calls` per row frame entered, the first row and the final
//!   "all rows placed" frame included
//! - one `loop_steps` per candidate column considered
//! - one `comparisons` per board cell read by the safety check
//! - one `backtracks` per queen removed after its continuation failed

use crate::{Counter, Operation};
use serde::{Deserialize, Serialize};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square board of queen flags, mutated in place during the search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<bool>,
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn has_queen(&self, pos: Position) -> bool {
        self.cells[self.offset(pos)]
    }

    /// Put a queen on `pos`
    pub fn place(&mut self, pos: Position) {
        let offset = self.offset(pos);
        self.cells[offset] = true;
    }

    /// Take the queen off `pos`
    pub fn remove(&mut self, pos: Position) {
        let offset = self.offset(pos);
        self.cells[offset] = false;
    }

    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Queen positions in row-major order
    pub fn queens(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell)
            .map(move |(offset, _)| Position::new(offset / size, offset % size))
    }

    /// Cell flags row by row
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Whether the board holds a complete placement: `size` queens, one per row
    /// and column, no two sharing a diagonal.
    pub fn is_solution(&self) -> bool {
        if self.queen_count() != self.size {
            return false;
        }

        let span = 2 * self.size;
        let mut rows = vec![false; self.size];
        let mut cols = vec![false; self.size];
        let mut diagonals = vec![false; span];
        let mut anti_diagonals = vec![false; span];

        for pos in self.queens() {
            let diagonal = pos.row + self.size - pos.col;
            let anti_diagonal = pos.row + pos.col;
            if rows[pos.row]
                || cols[pos.col]
                || diagonals[diagonal]
                || anti_diagonals[anti_diagonal]
            {
                return false;
            }
            rows[pos.row] = true;
            cols[pos.col] = true;
            diagonals[diagonal] = true;
            anti_diagonals[anti_diagonal] = true;
        }

        true
    }

    fn offset(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }

    /// Whether a queen at (`row`, `col`) is clear of every queen above it.
    ///
    /// Scans the column, then the upper-left diagonal, then the upper-right
    /// diagonal, charging one comparison per cell read and stopping at the
    /// first queen found.
    fn is_safe(&self, row: usize, col: usize, counter: &mut Counter) -> bool {
        let column = (0..row).map(|r| (r, col));
        let upper_left = (1..=row.min(col)).map(|k| (row - k, col - k));
        let upper_right = (1..=row.min(self.size - 1 - col)).map(|k| (row - k, col + k));

        column.chain(upper_left).chain(upper_right).all(|(r, c)| {
            counter.charge(Operation::Comparisons);
            !self.cells[r * self.size + c]
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                let mark = if self.has_queen(Position::new(row, col)) { 'Q' } else { '.' };
                write!(f, "{}", mark)?;
            }
        }
        Ok(())
    }
}

/// Search for one placement of `n` queens.
///
/// Returns the board as the search left it. On success it holds a complete
/// placement; when none exists (n = 2 or 3) every tentative queen has been
/// removed again and [`Board::is_solution`] is false.
pub fn solve_n_queens(n: usize, counter: &mut Counter) -> Board {
    let mut board = Board::new(n);
    place_row(&mut board, 0, counter);
    board
}

fn place_row(board: &mut Board, row: usize, counter: &mut Counter) -> bool {
    counter.charge(Operation::RecursiveCalls);
    if row >= board.size() {
        return true;
    }

    for col in 0..board.size() {
        counter.charge(Operation::LoopSteps);
        if !board.is_safe(row, col, counter) {
            continue;
        }

        let pos = Position::new(row, col);
        board.place(pos);
        if place_row(board, row + 1, counter) {
            return true;
        }

        board.remove(pos);
        counter.charge(Operation::Backtracks);
    }

    false
}
