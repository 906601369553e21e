//! Output artifacts for converted documents.
//!
//! A converted document yields two files with identical content: a Markdown file and a
//! plain-text file, named after the source file without its final extension.
//!
//! Within one batch, two documents sharing a base name (`report.pdf`, `report.docx`) would
//! produce the same artifact names. [`write_batch_artifacts`] keeps the first document's
//! names and appends the source extension to later ones (`report_docx.md`).

use crate::Result;
use crate::core::config::ArtifactNaming;
use crate::core::formats::file_extension;
use crate::types::{BatchResult, DocumentReport};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const CONVERTED_SUFFIX: &str = "_converted";

/// Kind of artifact file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    Markdown,
    PlainText,
}

impl ArtifactKind {
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Markdown => "md",
            ArtifactKind::PlainText => "txt",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ArtifactKind::Markdown => "text/markdown",
            ArtifactKind::PlainText => "text/plain",
        }
    }
}

/// A file to be offered for download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputArtifact {
    pub file_name: String,
    pub kind: ArtifactKind,
    pub content: String,
}

/// The source file name without its final extension.
///
/// A leading dot does not start an extension, so `.profile` stays `.profile`.
pub fn base_name(file_name: &str) -> &str {
    let name = file_name.rsplit(['/', '\\']).next().unwrap_or(file_name);
    match name.rfind('.') {
        Some(0) | None => name,
        Some(index) => &name[..index],
    }
}

/// Build the Markdown and plain-text artifacts for `text`.
pub fn artifacts_for(file_name: &str, text: &str, naming: ArtifactNaming) -> [OutputArtifact; 2] {
    artifacts_with_stem(&artifact_stem(file_name, naming), text)
}

fn artifact_stem(file_name: &str, naming: ArtifactNaming) -> String {
    match naming {
        ArtifactNaming::BaseName => base_name(file_name).to_string(),
        ArtifactNaming::ConvertedSuffix => format!("{}{}", base_name(file_name), CONVERTED_SUFFIX),
    }
}

fn artifacts_with_stem(stem: &str, text: &str) -> [OutputArtifact; 2] {
    [ArtifactKind::Markdown, ArtifactKind::PlainText].map(|kind| OutputArtifact {
        file_name: format!("{}.{}", stem, kind.extension()),
        kind,
        content: text.to_string(),
    })
}

/// Artifacts for a report; empty unless the document was converted.
pub fn report_artifacts(report: &DocumentReport, naming: ArtifactNaming) -> Vec<OutputArtifact> {
    match report.converted_text() {
        Some(text) => artifacts_for(&report.name, text, naming).into(),
        None => Vec::new(),
    }
}

/// Write a report's artifacts into `dir`, returning the written paths.
///
/// # Errors
///
/// Returns `DocuconvertError::Io` if the directory can't be created or a file can't be written.
pub fn write_artifacts(dir: impl AsRef<Path>, report: &DocumentReport, naming: ArtifactNaming) -> Result<Vec<PathBuf>> {
    write_files(dir.as_ref(), report_artifacts(report, naming))
}

/// Write the artifacts of every converted report in `batch` into `dir`.
///
/// Returns one list of written paths per report, in batch order. Artifact names are unique
/// within the batch; see the module docs for how clashes are resolved.
///
/// # Errors
///
/// Returns `DocuconvertError::Io` if the directory can't be created or a file can't be written.
pub fn write_batch_artifacts(
    dir: impl AsRef<Path>,
    batch: &BatchResult,
    naming: ArtifactNaming,
) -> Result<Vec<Vec<PathBuf>>> {
    let dir = dir.as_ref();
    let mut taken = HashSet::new();
    let mut written = Vec::with_capacity(batch.len());

    for report in batch {
        let paths = match report.converted_text() {
            Some(text) => {
                let stem = unique_stem(&report.name, naming, &mut taken);
                write_files(dir, artifacts_with_stem(&stem, text).into())?
            }
            None => Vec::new(),
        };
        written.push(paths);
    }

    Ok(written)
}

/// Pick a stem not yet in `taken` (compared case-insensitively) and reserve it.
fn unique_stem(file_name: &str, naming: ArtifactNaming, taken: &mut HashSet<String>) -> String {
    let stem = artifact_stem(file_name, naming);
    if taken.insert(stem.to_lowercase()) {
        return stem;
    }

    let base = match file_extension(file_name) {
        Some(extension) => format!("{}_{}", stem, extension.trim_start_matches('.')),
        None => stem,
    };
    let mut candidate = base.clone();
    let mut counter = 2;
    while !taken.insert(candidate.to_lowercase()) {
        candidate = format!("{}_{}", base, counter);
        counter += 1;
    }

    tracing::warn!(document = file_name, stem = %candidate, "Artifact name already used in this batch, renamed");
    candidate
}

fn write_files(dir: &Path, artifacts: Vec<OutputArtifact>) -> Result<Vec<PathBuf>> {
    if artifacts.is_empty() {
        return Ok(Vec::new());
    }

    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, artifact.content.as_bytes())?;
        tracing::debug!(path = %path.display(), "Wrote artifact");
        written.push(path);
    }

    Ok(written)
}
