//! Error types produced by the extract crate.
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`UnsupportedFormat`](ExtractError::UnsupportedFormat) | No extractor handles the file's extension |
//! | [`ExtractionFailure`](ExtractError::ExtractionFailure) | The extractor ran but could not produce text |
//! | [`Io`](ExtractError::Io) | Reading the file or directory failed |
//! | [`FileTooLarge`](ExtractError::FileTooLarge) | File exceeds `max_file_bytes` |
//! | [`MissingDirectory`](ExtractError::MissingDirectory) | Input directory does not exist |
//!
//! Every error is fatal for the document that raised it. Callers comparing a
//! whole directory abort the run instead of skipping the document, since a
//! skipped document silently changes the comparison matrix dimensions.
use canonical::CanonicalError;
use thiserror::Error;

/// Errors that can occur while turning a source file into a [`Document`](canonical::Document).
///
/// Messages carry the offending path so they can be shown to users as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExtractError {
    /// The file extension is not one of txt, docx, odt or pdf, or support for
    /// it was compiled out.
    #[error("file format not supported for {path}; convert to txt, docx, odt or pdf")]
    UnsupportedFormat { path: String },

    /// The extractor could not read text out of the file (corrupt archive,
    /// missing XML member, invalid UTF-8, unreadable PDF).
    #[error("failed to extract text from {path}: {reason}")]
    ExtractionFailure { path: String, reason: String },

    /// The file was read but contains no words (empty text, a document with
    /// no text runs, an image-only PDF).
    #[error("no words could be extracted from {path}")]
    EmptyDocument { path: String },

    #[error("i/o error on {path}: {message}")]
    Io { path: String, message: String },

    #[error("{path} is {size} bytes, exceeding the limit of {limit} bytes")]
    FileTooLarge { path: String, size: u64, limit: u64 },

    #[error("input directory does not exist: {path}")]
    MissingDirectory { path: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("tokenization failed: {0}")]
    Canonical(#[from] CanonicalError),
}

impl ExtractError {
    pub(crate) fn io(path: impl Into<String>, err: &std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    pub(crate) fn failure(path: impl Into<String>, reason: impl ToString) -> Self {
        ExtractError::ExtractionFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Path of the file or directory the error refers to, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            ExtractError::UnsupportedFormat { path }
            | ExtractError::ExtractionFailure { path, .. }
            | ExtractError::EmptyDocument { path }
            | ExtractError::Io { path, .. }
            | ExtractError::FileTooLarge { path, .. }
            | ExtractError::MissingDirectory { path } => Some(path),
            ExtractError::InvalidConfig(_) | ExtractError::Canonical(_) => None,
        }
    }
}
