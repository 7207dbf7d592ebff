//! Configuration for word tokenization.
//!
//! [`TokenizeConfig`] controls how extracted text is turned into the token
//! stream the matching stages compare.
//!
//! # Versioning
//!
//! Any change to tokenization behavior must bump `version`. Token streams (and
//! therefore scores, blocks and span layouts) produced under different
//! versions are not comparable.
//!
//! # Examples
//!
//! ```rust
//! use canonical::TokenizeConfig;
//!
//! let config = TokenizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(!config.normalize_unicode);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for [`tokenize_words`](crate::tokenize_words).
///
/// ```json
/// {
///   "version": 1,
///   "lowercase": true,
///   "normalize_unicode": false
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenizeConfig {
    /// Tokenization behavior version. Must be >= 1.
    pub version: u32,

    /// If true, apply locale-free Unicode lowercasing before splitting.
    ///
    /// Matching is case-sensitive at the token level, so disabling this makes
    /// "The" and "the" distinct tokens.
    pub lowercase: bool,

    /// If true, apply Unicode NFKC normalization before other transforms.
    ///
    /// Useful for PDF text layers, which often carry ligatures and
    /// decomposed accents.
    pub normalize_unicode: bool,
}

impl TokenizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for TokenizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            lowercase: true,
            normalize_unicode: false,
        }
    }
}
