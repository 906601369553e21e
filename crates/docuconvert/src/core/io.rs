//! File I/O utilities.
//!
//! Reading happens before a batch is submitted, so errors here are ordinary `Result`s
//! rather than per-document failures.

use crate::types::SourceDocument;
use crate::{DocuconvertError, Result};
use std::path::Path;

/// Read a file synchronously.
///
/// # Errors
///
/// Returns `DocuconvertError::Io` for I/O errors (these always bubble up).
pub fn read_file_sync(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    std::fs::read(path.as_ref()).map_err(DocuconvertError::Io)
}

/// Validate that a path exists and is a regular file.
///
/// # Errors
///
/// Returns `DocuconvertError::Validation` if the path is missing or not a file.
pub fn validate_file_exists(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DocuconvertError::validation(format!(
            "File does not exist: {}",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(DocuconvertError::validation(format!("Not a file: {}", path.display())));
    }
    Ok(())
}

impl SourceDocument {
    /// Read a document from disk; its name is the path's final component.
    ///
    /// # Errors
    ///
    /// Returns `DocuconvertError::Validation` if the path is not a readable file name and
    /// `DocuconvertError::Io` if reading fails.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validate_file_exists(path)?;

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| DocuconvertError::validation(format!("Invalid file name: {}", path.display())))?
            .to_string();

        let content = read_file_sync(path)?;
        Ok(SourceDocument::new(name, content))
    }
}
