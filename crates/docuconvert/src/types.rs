use crate::analysis::SizeReport;
use crate::core::formats::{FormatTag, classify};
use crate::error::DocuconvertError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document submitted to the pipeline: a file name and its raw bytes.
///
/// The format tag is derived from the name once, at construction, so a document always
/// carries exactly one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    name: String,
    content: Vec<u8>,
    format: FormatTag,
}

impl SourceDocument {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        let name = name.into();
        let format = classify(&name);
        Self {
            name,
            content: content.into(),
            format,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }

    pub fn format(&self) -> FormatTag {
        self.format
    }

    pub fn byte_len(&self) -> u64 {
        self.content.len() as u64
    }
}

/// Why a document could not be extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The file extension is outside the recognized set; no extractor ran.
    UnsupportedFormat,
    /// The format-specific extractor failed while decoding the document.
    ParseFailure,
}

/// Structured, per-document failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionFailure {
    pub kind: FailureKind,
    pub format: FormatTag,
    pub message: String,
}

impl ExtractionFailure {
    pub fn unsupported(extension: Option<&str>) -> Self {
        let message = match extension {
            Some(ext) => format!("Format {} not supported.", ext),
            None => "Format not supported.".to_string(),
        };
        Self {
            kind: FailureKind::UnsupportedFormat,
            format: FormatTag::Unsupported,
            message,
        }
    }

    /// Convert an extractor error into a failure for `format`.
    pub fn from_error(format: FormatTag, error: &DocuconvertError) -> Self {
        match error {
            DocuconvertError::UnsupportedFormat(detail) => Self {
                kind: FailureKind::UnsupportedFormat,
                format,
                message: format!("Format {} not supported.", detail),
            },
            other => Self {
                kind: FailureKind::ParseFailure,
                format,
                message: format!("Error reading {}: {}", format.name(), other.cause()),
            },
        }
    }
}

impl fmt::Display for ExtractionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of running one extractor over one document.
///
/// `Text` may be empty: an empty successful extraction is distinct from a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExtractionResult {
    Text { content: String },
    Failure(ExtractionFailure),
}

impl ExtractionResult {
    pub fn text(content: impl Into<String>) -> Self {
        ExtractionResult::Text {
            content: content.into(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ExtractionResult::Text { content } => Some(content),
            ExtractionResult::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ExtractionFailure> {
        match self {
            ExtractionResult::Text { .. } => None,
            ExtractionResult::Failure(failure) => Some(failure),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ExtractionResult::Failure(_))
    }

    /// True when extraction succeeded but produced no non-whitespace text.
    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(|text| text.trim().is_empty())
    }
}

/// Reportable per-document status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Converted,
    /// Extraction succeeded but yielded no usable text ("no text extracted").
    NoText,
    Unsupported,
    Failed,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Converted => "converted",
            Outcome::NoText => "no text extracted",
            Outcome::Unsupported => "unsupported",
            Outcome::Failed => "failed",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the pipeline learned about one input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    pub name: String,
    pub format: FormatTag,
    pub original_bytes: u64,
    pub extraction: ExtractionResult,
    /// Present only when extraction yielded non-blank text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeReport>,
}

impl DocumentReport {
    pub fn outcome(&self) -> Outcome {
        match &self.extraction {
            ExtractionResult::Failure(failure) => match failure.kind {
                FailureKind::UnsupportedFormat => Outcome::Unsupported,
                FailureKind::ParseFailure => Outcome::Failed,
            },
            ExtractionResult::Text { content } if content.trim().is_empty() => Outcome::NoText,
            ExtractionResult::Text { .. } => Outcome::Converted,
        }
    }

    /// Extracted text, only for converted documents.
    pub fn converted_text(&self) -> Option<&str> {
        match self.outcome() {
            Outcome::Converted => self.extraction.as_text(),
            _ => None,
        }
    }
}

/// Aggregate counts over a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub converted: usize,
    pub no_text: usize,
    pub unsupported: usize,
    pub failed: usize,
    /// Original bytes of converted documents only.
    pub original_bytes: u64,
    /// Extracted UTF-8 bytes of converted documents only.
    pub extracted_bytes: u64,
}

/// Ordered per-document reports, one per input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub reports: Vec<DocumentReport>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DocumentReport> {
        self.reports.iter()
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total: self.reports.len(),
            ..Default::default()
        };

        for report in &self.reports {
            match report.outcome() {
                Outcome::Converted => summary.converted += 1,
                Outcome::NoText => summary.no_text += 1,
                Outcome::Unsupported => summary.unsupported += 1,
                Outcome::Failed => summary.failed += 1,
            }
            if let Some(size) = &report.size {
                summary.original_bytes += size.original_bytes;
                summary.extracted_bytes += size.extracted_bytes;
            }
        }

        summary
    }
}

impl IntoIterator for BatchResult {
    type Item = DocumentReport;
    type IntoIter = std::vec::IntoIter<DocumentReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a DocumentReport;
    type IntoIter = std::slice::Iter<'a, DocumentReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
