//! Scoped temporary storage for path-based readers.
//!
//! Some readers open a document from a filesystem path rather than from memory. A
//! [`StagedFile`] writes the bytes to a uniquely named temporary file and removes it when
//! dropped, so the file lives exactly as long as the extraction that needs it, whether that
//! extraction succeeds, fails or panics.

use crate::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const STAGING_PREFIX: &str = "docuconvert-";

/// A document's bytes staged to a temporary file, deleted on drop.
#[derive(Debug)]
pub struct StagedFile {
    file: NamedTempFile,
}

impl StagedFile {
    /// Stage `content` in `dir` (or the system temp directory) with the given suffix.
    ///
    /// # Errors
    ///
    /// Returns `DocuconvertError::Io` if the file can't be created or written.
    pub fn new(content: &[u8], suffix: &str, dir: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX).suffix(suffix);

        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };

        file.write_all(content)?;
        file.flush()?;

        tracing::trace!(path = %file.path().display(), bytes = content.len(), "Staged document");

        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}
