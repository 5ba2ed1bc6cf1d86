use std::fmt::Write;

use serde::Serialize;

use crate::models::{Grid, WordMatch};

#[derive(Serialize)]
struct Report<'a> {
    total: usize,
    matches: &'a [WordMatch],
}

/// Plain-text report: the grid, one line per match, then the total.
pub fn render_text(grid: &Grid, matches: &[WordMatch]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "Matrix loaded:");
    let _ = write!(out, "{grid}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Found words:");
    for word_match in matches {
        let _ = writeln!(out, "{word_match}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total Number of Words Found: {}", matches.len());

    out
}

/// Pretty JSON report with a `total` count and the `matches` array.
pub fn render_json(matches: &[WordMatch]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Report {
        total: matches.len(),
        matches,
    })
}
