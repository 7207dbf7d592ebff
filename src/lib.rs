//! Workspace umbrella crate for textual overlap detection.
//!
//! This crate stitches the stages together so callers can go from a
//! directory of submissions to a comparison report with one call:
//!
//! ```text
//! extract (files -> documents) -> matching (documents -> report) -> report (files)
//! ```
//!
//! ```no_run
//! use overlap::{OverlapConfig, Pipeline};
//!
//! let pipeline = Pipeline::from_config(&OverlapConfig::default()).unwrap();
//! let report = pipeline.run("submissions/").unwrap();
//! print!("{}", overlap::render_console_table(&report.matrix));
//! ```

pub mod config;

pub use crate::config::{
    ConfigLoadError, ExtractYamlConfig, MatchingYamlConfig, OverlapConfig, ReportFormat,
    ReportYamlConfig,
};
pub use canonical::{CanonicalError, Document, RenderedText, TokenizeConfig, tokenize_words};
pub use extract::{
    DOCX_BODY, ExtractConfig, ExtractError, ODT_BODY, SourceFormat, collect_documents, extract,
};
pub use matching::{
    ComparisonMatrix, ComparisonReport, LocateStrategy, MatchConfig, MatchError, Normalizer,
    PairComparison, SELF_SENTINEL, ScoreError, Scorer, ScorerKind, Span, compare_documents,
    ordered_pairs, pair_index,
};
pub use report::{
    ReportError, render_console_table, render_pair_page, render_results_table,
    write_html_report, write_json_report,
};

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{Level, info, warn};

/// Errors that can occur while running a comparison end to end.
#[derive(Debug)]
pub enum PipelineError {
    Extract(ExtractError),
    Match(MatchError),
    Report(ReportError),
    Config(ConfigLoadError),
    /// Fewer than two documents were found in the input directory.
    InsufficientInput { found: usize },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Extract(err) => write!(f, "extraction failure: {err}"),
            PipelineError::Match(err) => write!(f, "comparison failure: {err}"),
            PipelineError::Report(err) => write!(f, "report failure: {err}"),
            PipelineError::Config(err) => write!(f, "configuration failure: {err}"),
            PipelineError::InsufficientInput { found } => write!(
                f,
                "at least two documents are required for a comparison, found {found}"
            ),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PipelineError::Extract(err) => Some(err),
            PipelineError::Match(err) => Some(err),
            PipelineError::Report(err) => Some(err),
            PipelineError::Config(err) => Some(err),
            PipelineError::InsufficientInput { .. } => None,
        }
    }
}

impl From<ExtractError> for PipelineError {
    fn from(value: ExtractError) -> Self {
        PipelineError::Extract(value)
    }
}

impl From<MatchError> for PipelineError {
    fn from(value: MatchError) -> Self {
        match value {
            MatchError::InsufficientInput { found } => PipelineError::InsufficientInput { found },
            other => PipelineError::Match(other),
        }
    }
}

impl From<ReportError> for PipelineError {
    fn from(value: ReportError) -> Self {
        PipelineError::Report(value)
    }
}

impl From<ConfigLoadError> for PipelineError {
    fn from(value: ConfigLoadError) -> Self {
        PipelineError::Config(value)
    }
}

/// Metrics observer for pipeline stages.
///
/// Handed to [`Pipeline::with_metrics`]; there is no process-wide recorder.
pub trait PipelineMetrics: Send + Sync {
    /// Called once per input file.
    fn record_extract(&self, latency: Duration, result: Result<(), ExtractError>);
    /// Called once per comparison; `Ok` carries the number of pairs compared.
    fn record_compare(&self, latency: Duration, result: Result<usize, MatchError>);
}

struct MetricsSpan<'a> {
    recorder: &'a dyn PipelineMetrics,
    start: Instant,
}

impl<'a> MetricsSpan<'a> {
    fn start(recorder: Option<&'a Arc<dyn PipelineMetrics>>) -> Option<Self> {
        recorder.map(|recorder| Self {
            recorder: recorder.as_ref(),
            start: Instant::now(),
        })
    }

    fn record_extract(self, result: Result<(), ExtractError>) {
        self.recorder.record_extract(self.start.elapsed(), result);
    }

    fn record_compare(self, result: Result<usize, MatchError>) {
        self.recorder.record_compare(self.start.elapsed(), result);
    }
}

/// Extract -> compare driver with its configuration, scorer and optional
/// metrics recorder fixed at construction.
pub struct Pipeline {
    extract: ExtractConfig,
    matching: MatchConfig,
    scorer: Box<dyn Scorer>,
    metrics: Option<Arc<dyn PipelineMetrics>>,
}

impl Pipeline {
    pub fn new(extract: ExtractConfig, matching: MatchConfig, scorer: Box<dyn Scorer>) -> Self {
        Self {
            extract,
            matching,
            scorer,
            metrics: None,
        }
    }

    /// Build a pipeline from a loaded configuration file.
    ///
    /// The Jaccard scorer gets the English [`Normalizer`].
    pub fn from_config(cfg: &OverlapConfig) -> Result<Self, PipelineError> {
        cfg.validate()?;
        let normalizer = Arc::new(Normalizer::english());
        let scorer = cfg.matching.scorer.build(cfg.matching.autojunk, &normalizer);
        Ok(Self::new(cfg.extract_config(), cfg.match_config(), scorer))
    }

    pub fn with_metrics(mut self, recorder: Arc<dyn PipelineMetrics>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    pub fn extract_config(&self) -> &ExtractConfig {
        &self.extract
    }

    pub fn match_config(&self) -> &MatchConfig {
        &self.matching
    }

    pub fn scorer(&self) -> &dyn Scorer {
        self.scorer.as_ref()
    }

    /// Extract every input file of `dir`, in file-name order.
    ///
    /// Stops at the first file that cannot be extracted.
    pub fn collect(&self, dir: impl AsRef<Path>) -> Result<Vec<Document>, PipelineError> {
        let files: Vec<PathBuf> = extract::list_input_files(dir.as_ref())?;
        let mut docs = Vec::with_capacity(files.len());
        for path in &files {
            let span = MetricsSpan::start(self.metrics.as_ref());
            match extract::extract(path, &self.extract) {
                Ok(doc) => {
                    if let Some(span) = span {
                        span.record_extract(Ok(()));
                    }
                    docs.push(doc);
                }
                Err(err) => {
                    if let Some(span) = span {
                        span.record_extract(Err(err.clone()));
                    }
                    return Err(err.into());
                }
            }
        }
        Ok(docs)
    }

    /// Compare already extracted documents.
    pub fn compare(&self, docs: &[Document]) -> Result<ComparisonReport, PipelineError> {
        let span = MetricsSpan::start(self.metrics.as_ref());
        let result = compare_documents(docs, &self.matching, self.scorer.as_ref());
        if let Some(span) = span {
            span.record_compare(
                result
                    .as_ref()
                    .map(|report| report.pairs.len())
                    .map_err(Clone::clone),
            );
        }
        Ok(result?)
    }

    /// Extract all documents in `dir` and compare every ordered pair.
    pub fn run(&self, dir: impl AsRef<Path>) -> Result<ComparisonReport, PipelineError> {
        let dir = dir.as_ref();
        let span = tracing::span!(Level::INFO, "overlap.run", dir = %dir.display());
        let _guard = span.enter();
        let start = Instant::now();

        let docs = self.collect(dir)?;
        if docs.len() < 2 {
            warn!(found = docs.len(), "insufficient_input");
            return Err(PipelineError::InsufficientInput { found: docs.len() });
        }

        let report = self.compare(&docs)?;
        info!(
            documents = docs.len(),
            pairs = report.pairs.len(),
            scorer = self.scorer.name(),
            elapsed_micros = start.elapsed().as_micros(),
            "run_success"
        );
        Ok(report)
    }
}
