//! Overlap extract stage.
//!
//! Turns submission files into [`Document`]s: detects the format from the
//! extension, pulls the text out (plain text, Word `.docx`, OpenDocument
//! `.odt`, PDF text layer) and tokenizes it with the canonical crate.
//!
//! This is the only stage that performs I/O. Everything downstream works on
//! already-extracted token sequences.
//!
//! ## Failure policy
//!
//! A document that cannot be extracted, or that yields no words, is an
//! error, never an empty token sequence. [`collect_documents`] aborts on the first failure so the caller
//! never builds a comparison matrix with silently missing rows.
//!
//! ## Example
//!
//! ```no_run
//! use extract::{collect_documents, ExtractConfig};
//!
//! let docs = collect_documents("submissions/", &ExtractConfig::default()).unwrap();
//! for doc in &docs {
//!     println!("{}: {} tokens", doc.name(), doc.len());
//! }
//! ```
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use canonical::Document;
use tracing::{info, warn, Level};

mod config;
mod error;
mod format;
mod text;

pub use crate::config::ExtractConfig;
pub use crate::error::ExtractError;
pub use crate::format::SourceFormat;
pub use crate::text::{extract_text, xml_to_text, DOCX_BODY, ODT_BODY};

/// Extract one file into a document named after the file.
pub fn extract(path: impl AsRef<Path>, cfg: &ExtractConfig) -> Result<Document, ExtractError> {
    let path = path.as_ref();
    let start = Instant::now();
    let label = path.display().to_string();

    let span = tracing::span!(Level::INFO, "extract.extract", path = %label);
    let _guard = span.enter();

    match extract_inner(path, &label, cfg) {
        Ok(doc) => {
            let elapsed_micros = start.elapsed().as_micros();
            info!(
                name = %doc.name(),
                tokens = doc.len(),
                elapsed_micros,
                "extract_success"
            );
            Ok(doc)
        }
        Err(err) => {
            let elapsed_micros = start.elapsed().as_micros();
            warn!(error = %err, elapsed_micros, "extract_failure");
            Err(err)
        }
    }
}

fn extract_inner(path: &Path, label: &str, cfg: &ExtractConfig) -> Result<Document, ExtractError> {
    cfg.validate()?;

    let format = SourceFormat::from_path(path)
        .filter(SourceFormat::is_enabled)
        .ok_or_else(|| ExtractError::UnsupportedFormat {
            path: label.to_string(),
        })?;

    let meta = fs::metadata(path).map_err(|err| ExtractError::io(label, &err))?;
    if let Some(limit) = cfg.max_file_bytes {
        if meta.len() > limit {
            return Err(ExtractError::FileTooLarge {
                path: label.to_string(),
                size: meta.len(),
                limit,
            });
        }
    }

    let bytes = fs::read(path).map_err(|err| ExtractError::io(label, &err))?;
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| label.to_string());

    extract_bytes(name, label, format, &bytes, cfg)
}

/// Extract a document from in-memory bytes.
///
/// `label` identifies the source in error messages.
pub fn extract_bytes(
    name: impl Into<String>,
    label: &str,
    format: SourceFormat,
    bytes: &[u8],
    cfg: &ExtractConfig,
) -> Result<Document, ExtractError> {
    if !format.is_enabled() {
        return Err(ExtractError::UnsupportedFormat {
            path: label.to_string(),
        });
    }
    let text = extract_text(label, format, bytes)?;
    let doc = Document::from_text(name, &text, &cfg.tokenize)?;
    if doc.is_empty() {
        return Err(ExtractError::EmptyDocument {
            path: label.to_string(),
        });
    }
    Ok(doc)
}

/// Extract every regular file directly inside `dir`.
///
/// Files are processed in file-name order so the resulting document order, and
/// with it the matrix layout and pair numbering, does not depend on the
/// platform's directory listing order. Hidden files (leading `.`) are ignored.
pub fn collect_documents(
    dir: impl AsRef<Path>,
    cfg: &ExtractConfig,
) -> Result<Vec<Document>, ExtractError> {
    let dir = dir.as_ref();
    let files = list_input_files(dir)?;
    info!(dir = %dir.display(), files = files.len(), "collect_documents");

    files.iter().map(|path| extract(path, cfg)).collect()
}

/// Regular, non-hidden files directly inside `dir`, sorted by file name.
pub fn list_input_files(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let label = dir.display().to_string();
    if !dir.is_dir() {
        return Err(ExtractError::MissingDirectory { path: label });
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(|err| ExtractError::io(&label, &err))? {
        let entry = entry.map_err(|err| ExtractError::io(&label, &err))?;
        let file_type = entry
            .file_type()
            .map_err(|err| ExtractError::io(entry.path().display().to_string(), &err))?;
        if !file_type.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        files.push(entry.path());
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
