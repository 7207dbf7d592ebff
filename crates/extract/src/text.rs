//! Per-format text extraction.
//!
//! Each extractor takes the raw file bytes and returns plain text. Nothing
//! here tokenizes; word splitting happens once, in the canonical crate.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::ExtractError;
use crate::format::SourceFormat;

/// Archive member holding the body of a Word document.
pub const DOCX_BODY: &str = "word/document.xml";
/// Archive member holding the body of an OpenDocument text.
pub const ODT_BODY: &str = "content.xml";

// Paragraph ends and explicit breaks become whitespace so words on either
// side of them stay separate tokens.
static BREAK_TAGS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"</w:p>|<w:br\s*/>|<w:tab\s*/>|<w:cr\s*/>|</text:p>|</text:h>|<text:line-break\s*/>|<text:tab\s*/>|<text:s\s*/>",
    )
    .expect("break tag pattern is valid")
});

static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

static ENTITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&(#[xX][0-9a-fA-F]+|#[0-9]+|[a-z]+);").expect("entity pattern is valid")
});

/// Extract plain text from `bytes` interpreted as `format`.
///
/// `label` is only used in error messages (usually the file path).
pub fn extract_text(label: &str, format: SourceFormat, bytes: &[u8]) -> Result<String, ExtractError> {
    match format {
        SourceFormat::Txt => text_from_txt(label, bytes),
        SourceFormat::Docx => text_from_archive(label, bytes, DOCX_BODY),
        SourceFormat::Odt => text_from_archive(label, bytes, ODT_BODY),
        SourceFormat::Pdf => text_from_pdf(label, bytes),
    }
}

fn text_from_txt(label: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    std::str::from_utf8(bytes)
        .map(str::to_owned)
        .map_err(|err| ExtractError::failure(label, format!("invalid utf-8: {err}")))
}

#[cfg(feature = "office")]
fn text_from_archive(label: &str, bytes: &[u8], member: &str) -> Result<String, ExtractError> {
    use std::io::{Cursor, Read};

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|err| ExtractError::failure(label, format!("not a valid archive: {err}")))?;
    let mut entry = archive
        .by_name(member)
        .map_err(|err| ExtractError::failure(label, format!("missing {member}: {err}")))?;
    let mut xml = String::new();
    entry
        .read_to_string(&mut xml)
        .map_err(|err| ExtractError::failure(label, format!("unreadable {member}: {err}")))?;
    Ok(xml_to_text(&xml))
}

#[cfg(not(feature = "office"))]
fn text_from_archive(label: &str, _bytes: &[u8], _member: &str) -> Result<String, ExtractError> {
    Err(ExtractError::UnsupportedFormat {
        path: label.to_string(),
    })
}

#[cfg(feature = "pdf")]
fn text_from_pdf(label: &str, bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|err| ExtractError::failure(label, err))
}

#[cfg(not(feature = "pdf"))]
fn text_from_pdf(label: &str, _bytes: &[u8]) -> Result<String, ExtractError> {
    Err(ExtractError::UnsupportedFormat {
        path: label.to_string(),
    })
}

/// Strip markup from an office XML body and decode entities.
pub fn xml_to_text(xml: &str) -> String {
    let spaced = BREAK_TAGS.replace_all(xml, " ");
    let stripped = ANY_TAG.replace_all(&spaced, "");
    decode_entities(&stripped)
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    // One pass, so decoded text is never decoded again.
    ENTITY
        .replace_all(text, |caps: &Captures<'_>| {
            decode_entity(&caps[1]).map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}

fn decode_entity(body: &str) -> Option<char> {
    if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
        return u32::from_str_radix(hex, 16).ok().and_then(char::from_u32);
    }
    if let Some(dec) = body.strip_prefix('#') {
        return dec.parse().ok().and_then(char::from_u32);
    }
    match body {
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "amp" => Some('&'),
        _ => None,
    }
}
