use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::config::TokenizeConfig;
use crate::error::CanonicalError;

/// Returns true for characters that belong to a word token: Unicode
/// alphanumerics and the underscore (the `\w` class).
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Splits text into ordered word tokens.
///
/// Every maximal run of word characters becomes one token; everything else is
/// a delimiter and is dropped. Lowercasing runs before the word test, so a
/// character whose lowercase form expands into a non-word mark splits the
/// token there.
///
/// ```rust
/// use canonical::{tokenize_words, TokenizeConfig};
///
/// let tokens = tokenize_words("Hello, World! It's 2024.", &TokenizeConfig::default()).unwrap();
/// assert_eq!(tokens, vec!["hello", "world", "it", "s", "2024"]);
/// ```
pub fn tokenize_words(text: &str, cfg: &TokenizeConfig) -> Result<Vec<String>, CanonicalError> {
    cfg.validate()?;

    let normalized: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(text.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(text)
    };

    let mut tokens: Vec<String> = Vec::with_capacity((normalized.len() / 6).saturating_add(1));
    let mut current = String::new();

    for ch in normalized.chars() {
        // Lowercasing can expand a single character into several.
        if cfg.lowercase {
            for lower in ch.to_lowercase() {
                dispatch_char(lower, &mut tokens, &mut current);
            }
        } else {
            dispatch_char(ch, &mut tokens, &mut current);
        }
    }
    finalize_token(&mut tokens, &mut current);

    Ok(tokens)
}

fn dispatch_char(ch: char, tokens: &mut Vec<String>, current: &mut String) {
    if is_word_char(ch) {
        current.push(ch);
    } else {
        finalize_token(tokens, current);
    }
}

fn finalize_token(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
