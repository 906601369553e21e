//! Configuration loading and management.
//!
//! [`ExtractionConfig`] can be built programmatically, loaded from TOML, YAML or JSON, or
//! discovered as `docuconvert.toml` in the current directory or one of its parents.

use crate::{DocuconvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the file searched for by [`ExtractionConfig::discover`].
pub const CONFIG_FILE_NAME: &str = "docuconvert.toml";

/// Main extraction configuration.
///
/// # Example
///
/// ```rust
/// use docuconvert::ExtractionConfig;
///
/// let config = ExtractionConfig::default();
/// assert!(config.excel.header_row);
/// assert!(config.staging_dir.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Directory for staged temporary files (None = system temp directory)
    #[serde(default)]
    pub staging_dir: Option<PathBuf>,

    /// Spreadsheet rendering options
    #[serde(default)]
    pub excel: ExcelConfig,

    /// Output artifact options
    #[serde(default)]
    pub artifacts: ArtifactConfig,
}

/// Spreadsheet rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcelConfig {
    /// Treat the first row of each sheet as the table header
    #[serde(default = "default_true")]
    pub header_row: bool,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self { header_row: true }
    }
}

/// Output artifact configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactConfig {
    #[serde(default)]
    pub naming: ArtifactNaming,
}

/// How artifact file names are derived from the source file name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactNaming {
    /// `<base>.md` / `<base>.txt`
    #[default]
    BaseName,
    /// `<base>_converted.md` / `<base>_converted.txt`
    ConvertedSuffix,
}

fn default_true() -> bool {
    true
}

impl ExtractionConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `DocuconvertError::Validation` if the file can't be read or is invalid TOML.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        toml::from_str(&content)
            .map_err(|e| DocuconvertError::validation(format!("Invalid TOML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_yaml_ng::from_str(&content)
            .map_err(|e| DocuconvertError::validation(format!("Invalid YAML in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = read_config(path.as_ref())?;

        serde_json::from_str(&content)
            .map_err(|e| DocuconvertError::validation(format!("Invalid JSON in {}: {}", path.as_ref().display(), e)))
    }

    /// Load configuration, picking the parser from the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            Some("json") => Self::from_json_file(path),
            _ => Err(DocuconvertError::validation(format!(
                "Unsupported config file format: {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }

    /// Discover `docuconvert.toml` in the current directory or its parents.
    ///
    /// # Returns
    ///
    /// - `Some(config)` if found
    /// - `None` if no config file found
    pub fn discover() -> Result<Option<Self>> {
        let mut current = std::env::current_dir().map_err(DocuconvertError::Io)?;

        loop {
            let candidate = current.join(CONFIG_FILE_NAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered configuration file");
                return Ok(Some(Self::from_toml_file(candidate)?));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }
}

fn read_config(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| DocuconvertError::validation(format!("Failed to read config file {}: {}", path.display(), e)))
}
