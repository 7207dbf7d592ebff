//! # Overlap matching core
//!
//! Given already-tokenized [`Document`]s, this crate scores every ordered
//! pair, extracts the matching token runs between them and turns those runs
//! into highlighted spans over each document's rendered text.
//!
//! ## Pipeline per pair
//!
//! 1. **Score**: any [`Scorer`]; the primary one is the alignment ratio.
//! 2. **Blocks**: [`matching_blocks`] returns the greedy maximal common runs of
//!    at least `min_block_size` tokens, sorted by position in the first
//!    document.
//! 3. **Positions**: each block is located in both rendered texts
//!    ([`LocateStrategy`]). Collisions at the same offset keep the longer
//!    block.
//! 4. **Spans**: [`assemble_spans`] walks the positions and emits plain and
//!    matched segments whose concatenation is exactly the rendered text.
//!
//! ## Determinism
//!
//! No randomness and no shared state between pairs. Pair indices are fixed by
//! the row-major enumeration before any work is dispatched, and block colors
//! are a pure function of `(color_seed, block_id)`, so parallel runs produce
//! the same report as sequential ones.
//!
//! ```
//! use canonical::{Document, TokenizeConfig};
//! use matching::{compare_documents, MatchConfig, RatioScorer};
//!
//! let cfg = TokenizeConfig::default();
//! let docs = vec![
//!     Document::from_text("a.txt", "the quick brown fox", &cfg).unwrap(),
//!     Document::from_text("b.txt", "the slow brown fox", &cfg).unwrap(),
//! ];
//! let report = compare_documents(&docs, &MatchConfig::default(), &RatioScorer::new()).unwrap();
//! assert_eq!(report.matrix.get(0, 1), Some(75.0));
//! assert_eq!(report.pairs.len(), 2);
//! ```

use std::time::Instant;

use canonical::Document;
use tracing::{info, warn, Level};

mod blocks;
mod color;
mod config;
mod error;
mod matrix;
mod normalize;
mod pair;
mod positions;
mod score;
mod spans;

pub use crate::blocks::{matching_blocks, matching_blocks_with, MatchingBlock, SequenceMatcher, AUTOJUNK_MIN_LEN};
pub use crate::color::{block_colors, BlockColor};
pub use crate::config::{LocateStrategy, MatchConfig};
pub use crate::error::{MatchError, ScoreError};
pub use crate::matrix::{ordered_pairs, pair_index, ComparisonMatrix, ComparisonReport, SELF_SENTINEL};
pub use crate::normalize::{is_numeric, Lemmatizer, Normalizer, StopWords, SuffixLemmatizer};
pub use crate::pair::{compare_pair, PairComparison};
pub use crate::positions::{
    block_texts, find_all, locate_blocks, locate_literal, locate_token_aligned, PositionedBlock, Side,
};
pub use crate::score::{round3, JaccardScorer, OverlapScorer, RatioScorer, Scorer, ScorerKind};
pub use crate::spans::{assemble_spans, concat, Span};

/// Compare every ordered pair of `docs`.
///
/// Cell `(i, j)` of the matrix holds `scorer.score(docs[i], docs[j])`; the
/// diagonal holds [`SELF_SENTINEL`]. `pairs[k]` is the pair with row-major
/// index `k`.
pub fn compare_documents(
    docs: &[Document],
    cfg: &MatchConfig,
    scorer: &dyn Scorer,
) -> Result<ComparisonReport, MatchError> {
    cfg.validate()?;
    if docs.len() < 2 {
        return Err(MatchError::InsufficientInput { found: docs.len() });
    }

    let span = tracing::span!(
        Level::INFO,
        "matching.compare",
        documents = docs.len(),
        scorer = scorer.name()
    );
    let _guard = span.enter();
    let start = Instant::now();

    let pairs = ordered_pairs(docs.len());
    let results = match run_pairs(docs, &pairs, cfg, scorer) {
        Ok(results) => results,
        Err(err) => {
            warn!(error = %err, "compare_failure");
            return Err(err.into());
        }
    };

    let mut matrix = ComparisonMatrix::new(docs.iter().map(|d| d.name().to_string()).collect());
    for pair in &results {
        matrix.set(pair.row, pair.col, pair.score);
    }

    let elapsed_micros = start.elapsed().as_micros();
    info!(
        documents = docs.len(),
        pairs = results.len(),
        min_block_size = cfg.min_block_size,
        elapsed_micros,
        "compare_success"
    );

    Ok(ComparisonReport {
        scorer: scorer.name().to_string(),
        min_block_size: cfg.min_block_size,
        matrix,
        pairs: results,
    })
}

#[cfg(feature = "parallel")]
fn run_pairs(
    docs: &[Document],
    pairs: &[(usize, usize, usize)],
    cfg: &MatchConfig,
    scorer: &dyn Scorer,
) -> Result<Vec<PairComparison>, ScoreError> {
    use rayon::prelude::*;

    let compare = |&(index, i, j): &(usize, usize, usize)| {
        compare_pair(index, (i, &docs[i]), (j, &docs[j]), cfg, scorer)
    };
    if cfg.use_parallel {
        // Indexed collect keeps row-major order.
        pairs.par_iter().map(compare).collect()
    } else {
        pairs.iter().map(compare).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_pairs(
    docs: &[Document],
    pairs: &[(usize, usize, usize)],
    cfg: &MatchConfig,
    scorer: &dyn Scorer,
) -> Result<Vec<PairComparison>, ScoreError> {
    pairs
        .iter()
        .map(|&(index, i, j)| compare_pair(index, (i, &docs[i]), (j, &docs[j]), cfg, scorer))
        .collect()
}
