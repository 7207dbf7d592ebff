//! Overlap canonical text layer.
//!
//! Turns extracted text into the token streams every later stage compares, and
//! provides the rendered (space-joined) form used for character offsets.
//!
//! ## What we do
//!
//! - Optional Unicode NFKC normalization
//! - Locale-free lowercasing
//! - `\w+` word tokenization (alphanumerics and `_`)
//! - Rendered text with per-token byte offsets
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same text and config give
//! the same tokens on any machine.

mod config;
mod document;
mod error;
mod rendered;
mod token;

pub use crate::config::TokenizeConfig;
pub use crate::document::Document;
pub use crate::error::CanonicalError;
pub use crate::rendered::{RenderedText, TokenSpan, SEPARATOR};
pub use crate::token::{is_word_char, tokenize_words};
