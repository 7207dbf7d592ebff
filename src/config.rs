//! YAML configuration file support.
//!
//! One file configures every stage. All sections and fields are optional;
//! missing values take the same defaults as the stage configs.
//!
//! ## Example
//!
//! ```yaml
//! version: "1.0"
//! name: "essay batch"
//!
//! extract:
//!   version: 1
//!   max_file_bytes: 52428800
//!   lowercase: true
//!   normalize_unicode: false
//!
//! matching:
//!   version: 1
//!   min_block_size: 3
//!   scorer: ratio
//!   locate: literal
//!   autojunk: false
//!   color_seed: 0
//!   use_parallel: true
//!
//! report:
//!   format: both
//!   output_dir: "results/batch-1"
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use canonical::TokenizeConfig;
use extract::ExtractConfig;
use matching::{LocateStrategy, MatchConfig, ScorerKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading YAML configuration files.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level configuration for a comparison run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct OverlapConfig {
    /// Configuration format version.
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub extract: ExtractYamlConfig,

    #[serde(default)]
    pub matching: MatchingYamlConfig,

    #[serde(default)]
    pub report: ReportYamlConfig,
}

impl OverlapConfig {
    /// Load a YAML configuration file from the given path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: OverlapConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration, including the derived stage configs.
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.extract.validate()?;
        self.matching.validate()?;
        Ok(())
    }

    pub fn extract_config(&self) -> ExtractConfig {
        self.extract.to_stage()
    }

    pub fn match_config(&self) -> MatchConfig {
        self.matching.to_stage()
    }
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            extract: ExtractYamlConfig::default(),
            matching: MatchingYamlConfig::default(),
            report: ReportYamlConfig::default(),
        }
    }
}

/// Extraction and tokenization settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: Option<u64>,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default)]
    pub normalize_unicode: bool,
}

impl ExtractYamlConfig {
    fn to_stage(&self) -> ExtractConfig {
        ExtractConfig {
            version: self.version,
            max_file_bytes: self.max_file_bytes,
            tokenize: TokenizeConfig {
                version: 1,
                lowercase: self.lowercase,
                normalize_unicode: self.normalize_unicode,
            },
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_stage()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("extract: {err}")))
    }
}

impl Default for ExtractYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            max_file_bytes: default_max_file_bytes(),
            lowercase: true,
            normalize_unicode: false,
        }
    }
}

/// Matching, scoring and highlighting settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchingYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_min_block_size")]
    pub min_block_size: usize,

    #[serde(default)]
    pub scorer: ScorerKind,

    #[serde(default)]
    pub locate: LocateStrategy,

    #[serde(default)]
    pub autojunk: bool,

    #[serde(default)]
    pub color_seed: u64,

    #[serde(default)]
    pub use_parallel: bool,
}

impl MatchingYamlConfig {
    fn to_stage(&self) -> MatchConfig {
        MatchConfig {
            version: self.version,
            min_block_size: self.min_block_size,
            locate: self.locate,
            autojunk: self.autojunk,
            color_seed: self.color_seed,
            use_parallel: self.use_parallel,
        }
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_stage()
            .validate()
            .map_err(|err| ConfigLoadError::Validation(format!("matching: {err}")))
    }
}

impl Default for MatchingYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            min_block_size: default_min_block_size(),
            scorer: ScorerKind::default(),
            locate: LocateStrategy::default(),
            autojunk: false,
            color_seed: 0,
            use_parallel: false,
        }
    }
}

/// Which report files a run writes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Html,
    Json,
    Both,
}

impl ReportFormat {
    pub fn html(&self) -> bool {
        matches!(self, ReportFormat::Html | ReportFormat::Both)
    }

    pub fn json(&self) -> bool {
        matches!(self, ReportFormat::Json | ReportFormat::Both)
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Both => "both",
        })
    }
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(ReportFormat::Html),
            "json" => Ok(ReportFormat::Json),
            "both" => Ok(ReportFormat::Both),
            other => Err(format!("unknown report format '{other}' (expected html, json or both)")),
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportYamlConfig {
    #[serde(default)]
    pub format: ReportFormat,

    /// Output directory; a timestamped directory under `results/` when unset.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

fn true_value() -> bool {
    true
}

fn default_max_file_bytes() -> Option<u64> {
    ExtractConfig::default().max_file_bytes
}

fn default_min_block_size() -> usize {
    MatchConfig::default().min_block_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_valid_yaml() {
        let yaml = r#"
version: "1.0"
name: "test config"
matching:
  min_block_size: 4
  scorer: jaccard
  locate: token_aligned
"#;

        let config = OverlapConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.name, Some("test config".to_string()));
        assert_eq!(config.matching.min_block_size, 4);
        assert_eq!(config.matching.scorer, ScorerKind::Jaccard);
        assert_eq!(config.match_config().locate, LocateStrategy::TokenAligned);
        assert_eq!(config.extract, ExtractYamlConfig::default());
        assert_eq!(config.report.format, ReportFormat::Html);
    }

    #[test]
    fn test_load_from_file() {
        let yaml = r#"
version: "1"
extract:
  max_file_bytes: 1024
  normalize_unicode: true
report:
  format: both
  output_dir: out/run
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let config = OverlapConfig::from_file(temp_file.path()).unwrap();
        let extract = config.extract_config();
        assert_eq!(extract.max_file_bytes, Some(1024));
        assert!(extract.tokenize.normalize_unicode);
        assert!(extract.tokenize.lowercase);
        assert!(config.report.format.html() && config.report.format.json());
        assert_eq!(config.report.output_dir, Some(PathBuf::from("out/run")));
    }

    #[test]
    fn test_default_config_matches_stage_defaults() {
        let config = OverlapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extract_config(), ExtractConfig::default());
        assert_eq!(config.match_config(), MatchConfig::default());
    }

    #[test]
    fn test_block_size_validation() {
        let yaml = r#"
version: "1.0"
matching:
  min_block_size: 0
"#;

        let err = OverlapConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Validation(_)));
        assert!(err.to_string().contains("min_block_size"));
    }

    #[test]
    fn test_unsupported_version() {
        let err = OverlapConfig::from_yaml("version: \"2.0\"\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::UnsupportedVersion(v) if v == "2.0"));
    }

    #[test]
    fn test_bad_enum_value_is_parse_error() {
        let yaml = r#"
version: "1.0"
matching:
  scorer: cosine
"#;
        assert!(matches!(
            OverlapConfig::from_yaml(yaml),
            Err(ConfigLoadError::YamlParse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = OverlapConfig::from_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigLoadError::FileRead(_)));
    }

    #[test]
    fn report_format_parses() {
        assert_eq!("JSON".parse(), Ok(ReportFormat::Json));
        assert!("pdf".parse::<ReportFormat>().is_err());
    }
}
