//! Configuration for the extract stage.
//!
//! ```rust
//! use extract::ExtractConfig;
//!
//! let config = ExtractConfig::default().with_max_file_bytes(Some(20 * 1024 * 1024));
//! config.validate().expect("valid configuration");
//! ```
use canonical::TokenizeConfig;
use serde::{Deserialize, Serialize};

use crate::error::ExtractError;

/// Runtime configuration for extraction.
///
/// ```json
/// {
///   "version": 1,
///   "max_file_bytes": 52428800,
///   "tokenize": { "version": 1, "lowercase": true, "normalize_unicode": false }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Configuration version. Must be >= 1.
    pub version: u32,

    /// Upper bound on the raw file size. `None` disables the check.
    #[serde(default)]
    pub max_file_bytes: Option<u64>,

    /// How extracted text is split into tokens.
    #[serde(default)]
    pub tokenize: TokenizeConfig,
}

impl ExtractConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_file_bytes(mut self, max_file_bytes: Option<u64>) -> Self {
        self.max_file_bytes = max_file_bytes;
        self
    }

    pub fn with_tokenize(mut self, tokenize: TokenizeConfig) -> Self {
        self.tokenize = tokenize;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ExtractError> {
        if self.version == 0 {
            return Err(ExtractError::InvalidConfig(
                "extract version must be >= 1".into(),
            ));
        }
        if self.max_file_bytes == Some(0) {
            return Err(ExtractError::InvalidConfig(
                "max_file_bytes must be > 0 when set".into(),
            ));
        }
        self.tokenize.validate()?;
        Ok(())
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_file_bytes: Some(100 * 1024 * 1024),
            tokenize: TokenizeConfig::default(),
        }
    }
}
