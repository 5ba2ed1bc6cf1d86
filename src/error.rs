use thiserror::Error;

/// Reasons a grid is rejected before any search runs.
///
/// Row and column numbers are 1-based, the same convention the match report uses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Invalid grid: no rows")]
    Empty,

    #[error("Invalid grid: row {row} has no cells")]
    EmptyRow { row: usize },

    #[error("Invalid grid: row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid grid: cell at row {row}, column {col} is {token:?}, expected a single character")]
    InvalidCell {
        row: usize,
        col: usize,
        token: String,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
