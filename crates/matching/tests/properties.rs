//! Property-based tests for the matching core.

use canonical::{Document, RenderedText};
use matching::*;
use proptest::prelude::*;

// A tiny vocabulary makes long shared runs and repeated phrases likely.
fn token_seq(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["a", "b", "c", "ab", "the", "cat"]).prop_map(str::to_string),
        0..max_len,
    )
}

fn doc(name: &str, tokens: Vec<String>) -> Document {
    Document::new(name, tokens).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn spans_reconstruct_rendered_text(
        a in token_seq(40),
        b in token_seq(40),
        m in 1usize..4,
        aligned in any::<bool>(),
    ) {
        let locate = if aligned { LocateStrategy::TokenAligned } else { LocateStrategy::Literal };
        let cfg = MatchConfig::default().with_min_block_size(m).with_locate(locate);
        let left = doc("a", a);
        let right = doc("b", b);

        let pair = compare_pair(0, (0, &left), (1, &right), &cfg, &RatioScorer::new()).unwrap();
        prop_assert_eq!(concat(&pair.left_spans), RenderedText::from_tokens(left.tokens()).into_string());
        prop_assert_eq!(concat(&pair.right_spans), RenderedText::from_tokens(right.tokens()).into_string());
        for span in pair.left_spans.iter().chain(&pair.right_spans) {
            prop_assert!(!span.text().is_empty());
        }
    }

    #[test]
    fn blocks_respect_threshold_and_monotonicity(
        a in token_seq(50),
        b in token_seq(50),
        m in 1usize..6,
    ) {
        let blocks = matching_blocks(&a, &b, m);
        for block in &blocks {
            prop_assert!(block.length >= m);
            prop_assert_eq!(
                &a[block.start_in_a..block.end_in_a()],
                &b[block.start_in_b..block.end_in_b()]
            );
        }
        let looser = matching_blocks(&a, &b, m - 1);
        prop_assert!(looser.len() >= blocks.len());
    }

    #[test]
    fn blocks_are_deterministic(a in token_seq(60), b in token_seq(60), m in 1usize..4) {
        prop_assert_eq!(matching_blocks(&a, &b, m), matching_blocks(&a, &b, m));
    }

    #[test]
    fn matrix_sentinel_only_on_diagonal(texts in prop::collection::vec(token_seq(20), 2..5)) {
        let docs: Vec<Document> = texts
            .into_iter()
            .enumerate()
            .map(|(i, tokens)| doc(&format!("doc{i}"), tokens))
            .collect();
        let report = compare_documents(&docs, &MatchConfig::default(), &RatioScorer::new()).unwrap();

        for i in 0..docs.len() {
            for j in 0..docs.len() {
                let cell = report.matrix.get(i, j).unwrap();
                prop_assert_eq!(ComparisonMatrix::is_sentinel(cell), i == j);
                if i != j {
                    prop_assert!((0.0..=100.0).contains(&cell));
                }
            }
        }
    }

    #[test]
    fn ratio_is_symmetric(a in token_seq(50), b in token_seq(50)) {
        let scorer = RatioScorer::new();
        prop_assert_eq!(scorer.score(&a, &b).unwrap(), scorer.score(&b, &a).unwrap());
    }
}
