use std::fmt;

use serde::Serialize;

use crate::models::Direction;

/// A dictionary word found along a straight line of the grid.
///
/// `start_row` and `start_col` are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub length: usize,
    pub direction: Direction,
}

impl fmt::Display for WordMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Word: {}, Row: {}, Column: {}, Length: {}, Direction: {}",
            self.word, self.start_row, self.start_col, self.length, self.direction
        )
    }
}
