//! Configuration for the matching stage.
//!
//! ```rust
//! use matching::{LocateStrategy, MatchConfig};
//!
//! let cfg = MatchConfig::default()
//!     .with_min_block_size(3)
//!     .with_locate(LocateStrategy::TokenAligned);
//! cfg.validate().expect("valid configuration");
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MatchError;

/// How matching blocks are mapped back onto a document's rendered text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocateStrategy {
    /// Scan the rendered text for every literal occurrence of the block's
    /// text, overlapping occurrences included. Repeated phrases are
    /// highlighted wherever they appear.
    #[default]
    Literal,
    /// Position each block exactly once per document, at the character
    /// offset of its first token.
    TokenAligned,
}

impl LocateStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocateStrategy::Literal => "literal",
            LocateStrategy::TokenAligned => "token_aligned",
        }
    }
}

impl fmt::Display for LocateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocateStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "literal" => Ok(LocateStrategy::Literal),
            "token_aligned" => Ok(LocateStrategy::TokenAligned),
            other => Err(format!(
                "unknown locate strategy '{other}' (expected literal or token_aligned)"
            )),
        }
    }
}

/// Runtime configuration for matching and span assembly.
///
/// ```json
/// {
///   "version": 1,
///   "min_block_size": 2,
///   "locate": "literal",
///   "autojunk": false,
///   "color_seed": 0,
///   "use_parallel": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchConfig {
    /// Configuration version. Must be >= 1.
    pub version: u32,

    /// Shortest matching block (in tokens) that gets highlighted.
    #[serde(default = "MatchConfig::default_min_block_size")]
    pub min_block_size: usize,

    #[serde(default)]
    pub locate: LocateStrategy,

    /// Ignore very frequent tokens of the second document when seeding
    /// matches (only for documents of 200 tokens or more).
    #[serde(default)]
    pub autojunk: bool,

    /// Seed for block colors.
    #[serde(default)]
    pub color_seed: u64,

    /// Compare document pairs on the rayon pool. Ignored when the crate is
    /// built without the `parallel` feature.
    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchConfig {
    pub(crate) fn default_min_block_size() -> usize {
        2
    }

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_block_size(mut self, min_block_size: usize) -> Self {
        self.min_block_size = min_block_size;
        self
    }

    pub fn with_locate(mut self, locate: LocateStrategy) -> Self {
        self.locate = locate;
        self
    }

    pub fn with_autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    pub fn with_color_seed(mut self, color_seed: u64) -> Self {
        self.color_seed = color_seed;
        self
    }

    pub fn with_parallel(mut self, use_parallel: bool) -> Self {
        self.use_parallel = use_parallel;
        self
    }

    pub fn validate(&self) -> Result<(), MatchError> {
        if self.version == 0 {
            return Err(MatchError::InvalidConfig(
                "matching version must be >= 1".into(),
            ));
        }
        if self.min_block_size == 0 {
            return Err(MatchError::InvalidConfig(
                "min_block_size must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_block_size: Self::default_min_block_size(),
            locate: LocateStrategy::default(),
            autojunk: false,
            color_seed: 0,
            use_parallel: false,
        }
    }
}
