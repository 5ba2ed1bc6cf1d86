use std::fmt;
use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};
use crate::models::Direction;

/// Zero-based cell coordinate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// True iff `(row, col)` addresses a cell of a `rows` x `cols` grid.
pub fn in_bounds(row: isize, col: isize, rows: usize, cols: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < rows && (col as usize) < cols
}

/// A non-empty rectangular grid of letters.
///
/// The only way to get a `Grid` is through a validating constructor, so every
/// value upholds the shape invariant and the search never has to re-check it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Take ownership of `cells` after checking they form a rectangle with at
    /// least one row and one column.
    pub fn new(cells: Vec<Vec<char>>) -> Result<Self> {
        let first = cells.first().ok_or(GridError::Empty)?;
        let cols = first.len();

        for (index, row) in cells.iter().enumerate() {
            if row.is_empty() {
                return Err(GridError::EmptyRow { row: index + 1 });
            }
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: index + 1,
                    expected: cols,
                    found: row.len(),
                });
            }
        }

        Ok(Self { cells, cols })
    }

    /// Validating copy of borrowed rows.
    pub fn from_rows(rows: &[Vec<char>]) -> Result<Self> {
        Self::new(rows.to_vec())
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Iterate the grid row by row.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// Walk the straight line that starts at `start` and steps in `direction`,
    /// yielding one letter per cell until the line leaves the grid.
    pub fn walk(&self, start: Position, direction: Direction) -> Walk<'_> {
        let (row_step, col_step) = direction.delta();
        Walk {
            grid: self,
            row: start.row as isize,
            col: start.col as isize,
            row_step,
            col_step,
            exhausted: false,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Letters along one line of the grid. See [`Grid::walk`].
///
/// The first out-of-bounds step ends the walk for good.
#[derive(Debug, Clone)]
pub struct Walk<'g> {
    grid: &'g Grid,
    row: isize,
    col: isize,
    row_step: isize,
    col_step: isize,
    exhausted: bool,
}

impl Iterator for Walk<'_> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.exhausted {
            return None;
        }

        if !in_bounds(self.row, self.col, self.grid.rows(), self.grid.cols()) {
            self.exhausted = true;
            return None;
        }

        let letter = self.grid.cells[self.row as usize][self.col as usize];
        self.row += self.row_step;
        self.col += self.col_step;
        Some(letter)
    }
}

impl FusedIterator for Walk<'_> {}
