use thiserror::Error;

/// Errors raised by a [`Scorer`](crate::Scorer).
///
/// Only the secondary scorers can fail; the ratio scorer is defined for every
/// input, including two empty sequences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("{scorer} score is undefined: {reason}")]
    DegenerateComparison {
        scorer: &'static str,
        reason: String,
    },
}

impl ScoreError {
    pub(crate) fn degenerate(scorer: &'static str, reason: impl Into<String>) -> Self {
        ScoreError::DegenerateComparison {
            scorer,
            reason: reason.into(),
        }
    }
}

/// Errors produced while building a comparison report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MatchError {
    #[error("invalid match config: {0}")]
    InvalidConfig(String),

    /// Fewer than two documents were supplied; nothing can be compared.
    #[error("at least two documents are required for a comparison, found {found}")]
    InsufficientInput { found: usize },

    #[error(transparent)]
    Score(#[from] ScoreError),
}
