//! The [`Document`] type: a named, ordered, read-only token sequence.
//!
//! Documents are produced once per run (usually by the extract stage) and are
//! only read afterwards. Every derived artifact (matching blocks, positions,
//! spans) is recomputed per document pair.
//!
//! ```rust
//! use canonical::{Document, TokenizeConfig};
//!
//! let doc = Document::from_text("alice_report.txt", "The Quick brown fox", &TokenizeConfig::default()).unwrap();
//! assert_eq!(doc.tokens(), ["the", "quick", "brown", "fox"]);
//! assert_eq!(doc.rendered().as_str(), "the quick brown fox");
//! ```

use serde::Serialize;

use crate::config::TokenizeConfig;
use crate::error::CanonicalError;
use crate::rendered::RenderedText;
use crate::token::tokenize_words;

/// An ordered sequence of word tokens plus an identifying name.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Document {
    name: String,
    tokens: Vec<String>,
}

impl Document {
    /// Build a document from already-extracted tokens.
    ///
    /// The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>, tokens: Vec<String>) -> Result<Self, CanonicalError> {
        let name: String = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(CanonicalError::MissingName);
        }
        let name = if name.len() == trimmed.len() {
            name
        } else {
            trimmed.to_string()
        };
        Ok(Self { name, tokens })
    }

    /// Tokenize `text` and wrap the result.
    pub fn from_text(
        name: impl Into<String>,
        text: &str,
        cfg: &TokenizeConfig,
    ) -> Result<Self, CanonicalError> {
        let tokens = tokenize_words(text, cfg)?;
        Self::new(name, tokens)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Join the tokens into their rendered form.
    pub fn rendered(&self) -> RenderedText {
        RenderedText::from_tokens(&self.tokens)
    }
}
