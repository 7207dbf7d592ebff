use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Source document formats the extractor understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Txt,
    Docx,
    Odt,
    Pdf,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::Txt,
        SourceFormat::Docx,
        SourceFormat::Odt,
        SourceFormat::Pdf,
    ];

    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(SourceFormat::Txt),
            "docx" => Some(SourceFormat::Docx),
            "odt" => Some(SourceFormat::Odt),
            "pdf" => Some(SourceFormat::Pdf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            SourceFormat::Txt => "txt",
            SourceFormat::Docx => "docx",
            SourceFormat::Odt => "odt",
            SourceFormat::Pdf => "pdf",
        }
    }

    /// Whether support for this format was compiled in.
    pub fn is_enabled(&self) -> bool {
        match self {
            SourceFormat::Txt => true,
            SourceFormat::Docx | SourceFormat::Odt => cfg!(feature = "office"),
            SourceFormat::Pdf => cfg!(feature = "pdf"),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn detects_known_extensions_case_insensitively() {
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("a/b/Essay.DOCX")),
            Some(SourceFormat::Docx)
        );
        assert_eq!(
            SourceFormat::from_path(&PathBuf::from("notes.txt")),
            Some(SourceFormat::Txt)
        );
        assert_eq!(SourceFormat::from_extension("Pdf"), Some(SourceFormat::Pdf));
    }

    #[test]
    fn unknown_or_missing_extension_is_none() {
        assert_eq!(SourceFormat::from_path(&PathBuf::from("slides.pptx")), None);
        assert_eq!(SourceFormat::from_path(&PathBuf::from("README")), None);
    }

    #[test]
    fn extension_round_trips() {
        for format in SourceFormat::ALL {
            assert_eq!(SourceFormat::from_extension(format.extension()), Some(format));
        }
    }
}
