//! Rendered text: the single-string form of a token sequence.
//!
//! Tokens are joined by [`SEPARATOR`]. Because tokens never contain the
//! separator, token boundaries always sit at separator positions, so the byte
//! range of any token run is computed from cumulative lengths instead of being
//! searched for.

use serde::{Deserialize, Serialize};

/// Separator placed between tokens in rendered text.
pub const SEPARATOR: char = ' ';

/// Byte range of one token inside a [`RenderedText`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenSpan {
    /// Byte offset (inclusive).
    pub start: usize,
    /// Byte offset (exclusive).
    pub end: usize,
}

impl TokenSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A token sequence joined by single separators, with per-token byte offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RenderedText {
    text: String,
    spans: Vec<TokenSpan>,
}

impl RenderedText {
    /// Join `tokens` with [`SEPARATOR`] and record where each one lands.
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let capacity = tokens
            .iter()
            .map(|t| t.as_ref().len() + SEPARATOR.len_utf8())
            .sum::<usize>();
        let mut text = String::with_capacity(capacity);
        let mut spans = Vec::with_capacity(tokens.len());

        for (idx, token) in tokens.iter().enumerate() {
            if idx > 0 {
                text.push(SEPARATOR);
            }
            let start = text.len();
            text.push_str(token.as_ref());
            spans.push(TokenSpan {
                start,
                end: text.len(),
            });
        }

        Self { text, spans }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.spans.len()
    }

    pub fn token_span(&self, index: usize) -> Option<TokenSpan> {
        self.spans.get(index).copied()
    }

    /// Byte range covered by tokens `[start, start + len)`.
    ///
    /// Returns `None` for an empty run or one that leaves the token sequence.
    pub fn range_offsets(&self, start: usize, len: usize) -> Option<(usize, usize)> {
        if len == 0 {
            return None;
        }
        let last = start.checked_add(len - 1)?;
        let first = self.spans.get(start)?;
        let last = self.spans.get(last)?;
        Some((first.start, last.end))
    }

    /// The rendered form of tokens `[start, start + len)`, separators included.
    pub fn join_range(&self, start: usize, len: usize) -> Option<&str> {
        self.range_offsets(start, len)
            .map(|(from, to)| &self.text[from..to])
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for RenderedText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
