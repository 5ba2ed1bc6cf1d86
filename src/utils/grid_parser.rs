use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;

use crate::error::GridError;
use crate::models::Grid;

/// Parse a grid written one row per line with whitespace between cells.
///
/// Cells are uppercased. Blank lines are skipped so a trailing newline or a
/// spacer line does not count as an empty row.
pub fn parse_grid(text: &str) -> Result<Grid, GridError> {
    let mut rows = Vec::new();

    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        let row_number = rows.len() + 1;
        let mut row = Vec::new();

        for (index, token) in line.split_whitespace().enumerate() {
            let mut chars = token.chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(letter), None) => letter,
                _ => {
                    return Err(GridError::InvalidCell {
                        row: row_number,
                        col: index + 1,
                        token: token.to_string(),
                    })
                }
            };
            row.push(uppercase_cell(letter));
        }

        rows.push(row);
    }

    Grid::new(rows)
}

// Keep one cell per token even where uppercasing expands ('ß' -> "SS")
fn uppercase_cell(letter: char) -> char {
    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => letter,
    }
}

/// Read and parse a grid file
pub async fn load_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read grid '{}'", path.display()))?;

    let grid = parse_grid(&content)
        .with_context(|| format!("Failed to parse grid '{}'", path.display()))?;
    tracing::info!(
        "Loaded {}x{} grid from {}",
        grid.rows(),
        grid.cols(),
        path.display()
    );

    Ok(grid)
}
