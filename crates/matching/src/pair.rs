//! Side-by-side comparison of one ordered document pair.

use canonical::Document;
use serde::Serialize;
use tracing::debug;

use crate::blocks::{matching_blocks_with, MatchingBlock};
use crate::color::{block_colors, BlockColor};
use crate::config::MatchConfig;
use crate::error::ScoreError;
use crate::positions::{block_texts, locate_blocks, Side};
use crate::score::Scorer;
use crate::spans::{assemble_spans, Span};

/// Everything a renderer needs to show one ordered pair `(row, col)`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PairComparison {
    /// Position in the row-major enumeration of off-diagonal cells.
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub left: String,
    pub right: String,
    pub score: f64,
    pub blocks: Vec<MatchingBlock>,
    /// Color of block `i` is `colors[i]`, in both span lists.
    pub colors: Vec<BlockColor>,
    pub left_spans: Vec<Span>,
    pub right_spans: Vec<Span>,
}

impl PairComparison {
    /// Number of highlighted spans across both documents.
    pub fn highlighted(&self) -> usize {
        self.left_spans
            .iter()
            .chain(&self.right_spans)
            .filter(|span| span.is_matched())
            .count()
    }
}

/// Score and highlight `left` against `right`.
pub fn compare_pair(
    index: usize,
    (row, left): (usize, &Document),
    (col, right): (usize, &Document),
    cfg: &MatchConfig,
    scorer: &dyn Scorer,
) -> Result<PairComparison, ScoreError> {
    let score = scorer.score(left.tokens(), right.tokens())?;
    let blocks = matching_blocks_with(left.tokens(), right.tokens(), cfg.min_block_size, cfg.autojunk);
    let colors = block_colors(cfg.color_seed, blocks.len());

    let left_text = left.rendered();
    let right_text = right.rendered();
    let texts = block_texts(&left_text, &blocks);

    let left_positions = locate_blocks(&left_text, &blocks, &texts, Side::Left, cfg.locate);
    let right_positions = locate_blocks(&right_text, &blocks, &texts, Side::Right, cfg.locate);

    let left_spans = assemble_spans(left_text.as_str(), &left_positions, &colors);
    let right_spans = assemble_spans(right_text.as_str(), &right_positions, &colors);

    let pair = PairComparison {
        index,
        row,
        col,
        left: left.name().to_string(),
        right: right.name().to_string(),
        score,
        blocks,
        colors,
        left_spans,
        right_spans,
    };
    debug!(
        index,
        left = %pair.left,
        right = %pair.right,
        score,
        blocks = pair.blocks.len(),
        left_positions = left_positions.len(),
        right_positions = right_positions.len(),
        highlighted = pair.highlighted(),
        "pair_compared"
    );
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocateStrategy;
    use crate::score::RatioScorer;
    use crate::spans::concat;
    use canonical::TokenizeConfig;

    fn doc(name: &str, text: &str) -> Document {
        Document::from_text(name, text, &TokenizeConfig::default()).unwrap()
    }

    #[test]
    fn spans_cover_both_documents() {
        let a = doc("a.txt", "The quick brown fox");
        let b = doc("b.txt", "the slow brown fox");
        let pair = compare_pair(0, (0, &a), (1, &b), &MatchConfig::default(), &RatioScorer::new()).unwrap();

        assert_eq!(pair.score, 75.0);
        assert_eq!(pair.blocks, vec![MatchingBlock::new(2, 2, 2)]);
        assert_eq!(concat(&pair.left_spans), "the quick brown fox");
        assert_eq!(concat(&pair.right_spans), "the slow brown fox");

        let matched: Vec<&Span> = pair.left_spans.iter().filter(|s| s.is_matched()).collect();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].text(), "brown fox");
    }

    #[test]
    fn identical_documents_are_one_matched_span_each() {
        let a = doc("a.txt", "repeat repeat end");
        let b = doc("b.txt", "repeat repeat end");

        for locate in [LocateStrategy::Literal, LocateStrategy::TokenAligned] {
            let cfg = MatchConfig::default().with_min_block_size(1).with_locate(locate);
            let pair = compare_pair(0, (0, &a), (1, &b), &cfg, &RatioScorer::new()).unwrap();

            assert_eq!(pair.score, 100.0);
            assert_eq!(pair.blocks, vec![MatchingBlock::new(0, 0, 3)]);
            let expected = vec![Span::Matched {
                text: "repeat repeat end".to_string(),
                block_id: 0,
                color: pair.colors[0],
            }];
            assert_eq!(pair.left_spans, expected, "{locate}");
            assert_eq!(pair.right_spans, expected, "{locate}");
            assert_eq!(pair.highlighted(), 2);
        }
    }

    #[test]
    fn same_block_same_color_on_both_sides() {
        let a = doc("a.txt", "alpha beta gamma delta one two three");
        let b = doc("b.txt", "one two three x alpha beta gamma");
        let pair = compare_pair(3, (1, &a), (0, &b), &MatchConfig::default(), &RatioScorer::new()).unwrap();

        for block_id in 0..pair.blocks.len() {
            let color = pair.colors[block_id];
            let left: Vec<_> = pair
                .left_spans
                .iter()
                .filter_map(|s| match s {
                    Span::Matched { block_id: id, color: c, .. } if *id == block_id => Some(*c),
                    _ => None,
                })
                .collect();
            assert!(!left.is_empty());
            assert!(left.iter().all(|c| *c == color));
        }
        assert_eq!(pair.index, 3);
        assert_eq!((pair.row, pair.col), (1, 0));
    }

    #[test]
    fn literal_locate_highlights_repeats_token_aligned_does_not() {
        let a = doc("a.txt", "red fish blue fish red fish");
        let b = doc("b.txt", "one red fish two");
        let literal = compare_pair(0, (0, &a), (1, &b), &MatchConfig::default(), &RatioScorer::new()).unwrap();
        let aligned = compare_pair(
            0,
            (0, &a),
            (1, &b),
            &MatchConfig::default().with_locate(LocateStrategy::TokenAligned),
            &RatioScorer::new(),
        )
        .unwrap();

        let count = |spans: &[Span]| spans.iter().filter(|s| s.is_matched()).count();
        assert_eq!(count(&literal.left_spans), 2);
        assert_eq!(count(&aligned.left_spans), 1);
        assert_eq!(concat(&aligned.left_spans), "red fish blue fish red fish");
    }
}
