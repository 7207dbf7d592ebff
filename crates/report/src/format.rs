//! Small formatting helpers shared by the renderers.

use matching::ComparisonMatrix;

/// Escape text for use in HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render a score the way it appears in tables: `-1` for the diagonal,
/// otherwise always with a fractional part (`50.0`, `33.333`).
pub fn format_score(score: f64) -> String {
    if ComparisonMatrix::is_sentinel(score) {
        "-1".to_string()
    } else {
        format!("{score:?}")
    }
}

/// Inline CSS color for a results table cell, by score.
pub fn score_style(score: f64) -> &'static str {
    if score > 15.0 {
        "#990033; font-weight: bold"
    } else if score > 10.0 {
        "#ff6600"
    } else if score > 5.0 {
        "#ffcc00"
    } else {
        "green"
    }
}

/// File name of the page for pair `index`.
pub fn pair_file_name(index: usize) -> String {
    format!("{index}.html")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn scores_keep_a_fraction() {
        assert_eq!(format_score(-1.0), "-1");
        assert_eq!(format_score(50.0), "50.0");
        assert_eq!(format_score(33.333), "33.333");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn style_thresholds_are_exclusive() {
        assert_eq!(score_style(15.0), "#ff6600");
        assert_eq!(score_style(15.001), "#990033; font-weight: bold");
        assert_eq!(score_style(10.0), "#ffcc00");
        assert_eq!(score_style(5.0), "green");
        assert_eq!(score_style(0.0), "green");
    }
}
