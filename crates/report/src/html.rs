//! HTML rendering of the results table and the pair pages.

use std::fmt::Write as _;

use matching::{ComparisonMatrix, PairComparison, Span};

use crate::format::{escape_html, format_score, pair_file_name, score_style};

const PAGE_STYLE: &str = "\
body { font-family: sans-serif; margin: 1.5em; }
table { border-collapse: collapse; }
td { border: 1px solid #bbb; padding: 0.3em 0.6em; text-align: right; }
.wrapper { display: flex; gap: 2em; }
.block { flex: 1; line-height: 1.5; }";

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        PAGE_STYLE,
        body
    )
}

/// The `_results.html` page: one row and one column per document.
///
/// Off-diagonal cells link to the pair page with the same row-major index
/// and are colored by score.
pub fn render_results_table(matrix: &ComparisonMatrix) -> String {
    let mut body = String::from("<table>\n<tbody>\n<tr><td></td>");
    for name in matrix.names() {
        let _ = write!(body, "<td>{}</td>", escape_html(name));
    }
    body.push_str("</tr>\n");

    for (i, (name, row)) in matrix.names().iter().zip(matrix.rows()).enumerate() {
        let _ = write!(body, "<tr><td>{}</td>", escape_html(name));
        for (j, &score) in row.iter().enumerate() {
            match matrix.pair_index(i, j) {
                Some(index) if !ComparisonMatrix::is_sentinel(score) => {
                    let _ = write!(
                        body,
                        "<td><a href=\"{}\" target=\"_blank\" style=\"color:{}\">{}</a></td>",
                        pair_file_name(index),
                        score_style(score),
                        format_score(score)
                    );
                }
                _ => {
                    let _ = write!(body, "<td>{}</td>", format_score(score));
                }
            }
        }
        body.push_str("</tr>\n");
    }
    body.push_str("</tbody>\n</table>\n");

    page("Similarity results", &body)
}

fn push_spans(body: &mut String, name: &str, spans: &[Span]) {
    body.push_str("<div class=\"block\">\n");
    let _ = writeln!(body, "<h3>{}</h3>", escape_html(name));
    for span in spans {
        match span {
            Span::Plain { text } => {
                let _ = write!(body, "<span>{}</span>", escape_html(text));
            }
            Span::Matched { text, color, .. } => {
                let _ = write!(
                    body,
                    "<span style=\"color:{color}; font-weight:bold\">{}</span>",
                    escape_html(text)
                );
            }
        }
    }
    body.push_str("\n</div>\n");
}

/// Side-by-side page for one pair, matched spans in their block color.
pub fn render_pair_page(pair: &PairComparison) -> String {
    let mut body = String::new();
    let _ = writeln!(
        body,
        "<p>Similarity: <strong>{}</strong></p>",
        format_score(pair.score)
    );
    body.push_str("<div class=\"wrapper\">\n");
    push_spans(&mut body, &pair.left, &pair.left_spans);
    push_spans(&mut body, &pair.right, &pair.right_spans);
    body.push_str("</div>\n");

    page(&format!("{} vs {}", pair.left, pair.right), &body)
}
