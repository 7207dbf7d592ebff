//! Plain-text similarity table for terminals.

use std::fmt::Write as _;

use matching::ComparisonMatrix;

use crate::format::format_score;

/// Width of every column, names and scores alike.
pub const COLUMN_WIDTH: usize = 15;

/// Right-aligned table with a header row of names and one row per document.
pub fn render_console_table(matrix: &ComparisonMatrix) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>w$}", "", w = COLUMN_WIDTH);
    for name in matrix.names() {
        let _ = write!(out, "{name:>w$}", w = COLUMN_WIDTH);
    }
    out.push('\n');

    for (name, row) in matrix.names().iter().zip(matrix.rows()) {
        let _ = write!(out, "{name:>w$}", w = COLUMN_WIDTH);
        for &score in row {
            let _ = write!(out, "{:>w$}", format_score(score), w = COLUMN_WIDTH);
        }
        out.push('\n');
    }
    out
}
