//! Whole-document similarity scorers.
//!
//! Every scorer sits behind the same [`Scorer`] trait so the comparison
//! matrix can be filled with any of them. Each one documents its own failure
//! cases; only [`RatioScorer`] is total.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use fxhash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::blocks::SequenceMatcher;
use crate::error::ScoreError;
use crate::normalize::Normalizer;

/// Round to three decimals, the precision scores are reported with.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// A similarity measure between two token sequences.
pub trait Scorer: Send + Sync {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &'static str;

    fn score(&self, a: &[String], b: &[String]) -> Result<f64, ScoreError>;
}

/// Alignment ratio `2 * M / T * 100`, counting every matching block
/// regardless of length. 100 for two empty documents.
///
/// The greedy alignment itself is order sensitive (`tide`/`diet` style
/// inputs tie-break differently), so the pair is put in a canonical order
/// first and `score(a, b) == score(b, a)` always holds.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatioScorer {
    autojunk: bool,
}

impl RatioScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }
}

impl Scorer for RatioScorer {
    fn name(&self) -> &'static str {
        "ratio"
    }

    fn score(&self, a: &[String], b: &[String]) -> Result<f64, ScoreError> {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        let ratio = SequenceMatcher::with_autojunk(first, second, self.autojunk).ratio();
        Ok(round3(ratio * 100.0))
    }
}

/// Percentage of tokens of A (with repetitions) that also occur somewhere
/// in B. Not symmetric; undefined for an empty A.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlapScorer;

impl Scorer for OverlapScorer {
    fn name(&self) -> &'static str {
        "overlap"
    }

    fn score(&self, a: &[String], b: &[String]) -> Result<f64, ScoreError> {
        if a.is_empty() {
            return Err(ScoreError::degenerate(self.name(), "first document has no tokens"));
        }
        let vocabulary: FxHashSet<&str> = b.iter().map(String::as_str).collect();
        let shared = a
            .iter()
            .filter(|word| vocabulary.contains(word.as_str()))
            .count();
        Ok(round3(shared as f64 / a.len() as f64 * 100.0))
    }
}

/// Jaccard index `|A ∩ B| / |A ∪ B|` over normalized token sets, as a
/// fraction in `[0, 1]`. Undefined when both sets are empty after
/// normalization.
#[derive(Debug, Clone)]
pub struct JaccardScorer {
    normalizer: Arc<Normalizer>,
}

impl JaccardScorer {
    pub fn new(normalizer: Arc<Normalizer>) -> Self {
        Self { normalizer }
    }
}

impl Scorer for JaccardScorer {
    fn name(&self) -> &'static str {
        "jaccard"
    }

    fn score(&self, a: &[String], b: &[String]) -> Result<f64, ScoreError> {
        let left = self.normalizer.normalize(a);
        let right = self.normalizer.normalize(b);

        let left: FxHashSet<&str> = left.iter().map(String::as_str).collect();
        let right: FxHashSet<&str> = right.iter().map(String::as_str).collect();
        let union = left.union(&right).count();
        if union == 0 {
            return Err(ScoreError::degenerate(
                self.name(),
                "no tokens left in either document after normalization",
            ));
        }
        let intersection = left.intersection(&right).count();
        Ok(round3(intersection as f64 / union as f64))
    }
}

/// Selects a scorer by name, e.g. from configuration or the command line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScorerKind {
    #[default]
    Ratio,
    Overlap,
    Jaccard,
}

impl ScorerKind {
    pub const ALL: [ScorerKind; 3] = [ScorerKind::Ratio, ScorerKind::Overlap, ScorerKind::Jaccard];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerKind::Ratio => "ratio",
            ScorerKind::Overlap => "overlap",
            ScorerKind::Jaccard => "jaccard",
        }
    }

    /// Instantiate the scorer. `normalizer` is only used by Jaccard.
    pub fn build(self, autojunk: bool, normalizer: &Arc<Normalizer>) -> Box<dyn Scorer> {
        match self {
            ScorerKind::Ratio => Box::new(RatioScorer::new().with_autojunk(autojunk)),
            ScorerKind::Overlap => Box::new(OverlapScorer),
            ScorerKind::Jaccard => Box::new(JaccardScorer::new(Arc::clone(normalizer))),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScorerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown scorer '{s}' (expected ratio, overlap or jaccard)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn ratio_is_symmetric_and_rounded() {
        let a = tokens("the quick brown fox");
        let b = tokens("the slow brown fox");
        let scorer = RatioScorer::new();
        assert_eq!(scorer.score(&a, &b).unwrap(), 75.0);
        assert_eq!(scorer.score(&b, &a).unwrap(), 75.0);

        let c = tokens("one two three");
        let d = tokens("one four five six seven eight");
        // 2 * 1 / 9 * 100
        assert_eq!(scorer.score(&c, &d).unwrap(), 22.222);
    }

    #[test]
    fn ratio_is_symmetric_when_alignment_is_not() {
        let a = tokens("t i d e");
        let b = tokens("d i e t");
        assert_ne!(
            SequenceMatcher::new(&a, &b).ratio(),
            SequenceMatcher::new(&b, &a).ratio()
        );
        let scorer = RatioScorer::new();
        assert_eq!(scorer.score(&a, &b).unwrap(), scorer.score(&b, &a).unwrap());
    }

    #[test]
    fn ratio_of_empty_documents() {
        let scorer = RatioScorer::new();
        assert_eq!(scorer.score(&[], &[]).unwrap(), 100.0);
        assert_eq!(scorer.score(&[], &tokens("x")).unwrap(), 0.0);
    }

    #[test]
    fn overlap_counts_repeated_words_of_a() {
        let a = tokens("cat cat dog bird");
        let b = tokens("cat dog");
        assert_eq!(OverlapScorer.score(&a, &b).unwrap(), 75.0);
        assert_eq!(OverlapScorer.score(&b, &a).unwrap(), 100.0);
    }

    #[test]
    fn overlap_of_empty_first_document_is_degenerate() {
        let err = OverlapScorer.score(&[], &tokens("a b")).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::DegenerateComparison { scorer: "overlap", .. }
        ));
    }

    #[test]
    fn jaccard_uses_normalized_sets() {
        let scorer = JaccardScorer::new(Arc::new(Normalizer::english()));
        let a = tokens("the dogs chased 3 cats");
        let b = tokens("a dog and a cat slept");
        // {dog, chased, cat} vs {dog, cat, slept}
        assert_eq!(scorer.score(&a, &b).unwrap(), 0.5);
    }

    #[test]
    fn jaccard_of_stop_words_only_is_degenerate() {
        let scorer = JaccardScorer::new(Arc::new(Normalizer::english()));
        let err = scorer.score(&tokens("the and of"), &tokens("42 a")).unwrap_err();
        assert!(matches!(
            err,
            ScoreError::DegenerateComparison { scorer: "jaccard", .. }
        ));
    }

    #[test]
    fn scorer_kind_parses_and_builds() {
        let normalizer = Arc::new(Normalizer::english());
        for kind in ScorerKind::ALL {
            let parsed: ScorerKind = kind.as_str().to_uppercase().parse().unwrap();
            assert_eq!(parsed, kind);
            assert_eq!(kind.build(false, &normalizer).name(), kind.as_str());
        }
        assert!("cosine".parse::<ScorerKind>().is_err());
    }
}
