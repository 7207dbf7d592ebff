//! Report renderers for overlap comparisons.
//!
//! - [`write_html_report`]: a `_results.html` matrix page linking to one
//!   side-by-side page per ordered pair (`0.html`, `1.html`, ...).
//! - [`write_json_report`]: the full [`ComparisonReport`](matching::ComparisonReport)
//!   as JSON.
//! - [`render_console_table`]: the matrix as fixed-width text.
//!
//! Pair page file names follow the row-major pair index of the report, which
//! is also the order of links in the results table.

mod console;
mod error;
mod format;
mod html;
mod write;

pub use crate::console::{render_console_table, COLUMN_WIDTH};
pub use crate::error::ReportError;
pub use crate::format::{escape_html, format_score, pair_file_name, score_style};
pub use crate::html::{render_pair_page, render_results_table};
pub use crate::write::{write_html_report, write_json_report, RESULTS_FILE};
