//! Token normalization for the set-based scorers.
//!
//! The block pipeline never normalizes: it compares tokens exactly as
//! extracted. Only [`JaccardScorer`](crate::JaccardScorer) runs tokens through
//! a [`Normalizer`], which drops numbers and stop words and lemmatizes the
//! rest. A normalizer is built once by the caller and shared by reference.

use std::borrow::Cow;
use std::fmt;

use fxhash::FxHashSet;

/// English stop words (the NLTK list).
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Noun inflection rules, longest suffix first.
const NOUN_SUFFIX_RULES: &[(&str, &str)] = &[
    ("ches", "ch"),
    ("shes", "sh"),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ies", "y"),
    ("ves", "f"),
    ("men", "man"),
    ("s", ""),
];

/// A set of words ignored by the set-based scorers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: FxHashSet<String>,
}

impl StopWords {
    pub fn english() -> Self {
        Self::from_words(ENGLISH_STOP_WORDS.iter().copied())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from arbitrary words. Entries are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(word.to_lowercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Maps an inflected word to its base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

/// Dictionary-free noun lemmatizer using plural suffix substitution
/// (`churches` -> `church`, `ladies` -> `lady`, `women` -> `woman`).
///
/// Words of three characters or less, and words ending in `ss`, `us` or `is`,
/// are left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixLemmatizer;

impl Lemmatizer for SuffixLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.chars().count() <= 3 || ["ss", "us", "is"].iter().any(|end| word.ends_with(end)) {
            return Cow::Borrowed(word);
        }
        for (suffix, replacement) in NOUN_SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if replacement.is_empty() {
                    return Cow::Borrowed(stem);
                }
                return Cow::Owned(format!("{stem}{replacement}"));
            }
        }
        Cow::Borrowed(word)
    }
}

/// Integer or decimal literal (`42`, `3`, `1e5`).
pub fn is_numeric(token: &str) -> bool {
    token.parse::<i64>().is_ok()
        || (token.bytes().any(|b| b.is_ascii_digit()) && token.parse::<f64>().is_ok())
}

/// Stop words plus a lemmatizer, applied in that order after numbers are dropped.
pub struct Normalizer {
    stop_words: StopWords,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Normalizer {
    pub fn new(stop_words: StopWords, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }

    /// English stop words with [`SuffixLemmatizer`].
    pub fn english() -> Self {
        Self::new(StopWords::english(), Box::new(SuffixLemmatizer))
    }

    pub fn normalize<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(AsRef::as_ref)
            .filter(|token| !is_numeric(token))
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.lemmatizer.lemmatize(token).into_owned())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Normalizer")
            .field("stop_words", &self.stop_words.len())
            .finish_non_exhaustive()
    }
}
