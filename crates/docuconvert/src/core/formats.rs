//! Format classification by file name.
//!
//! Classification is name-driven: the lower-cased extension of the final path component
//! selects a [`FormatTag`]. Content is never inspected, which keeps `classify` a total,
//! pure function that agrees with what the extractors expect.
//!
//! # Example
//!
//! ```rust
//! use docuconvert::{FormatTag, classify};
//!
//! assert_eq!(classify("Quarterly Report.PDF"), FormatTag::Pdf);
//! assert_eq!(classify("index.htm"), FormatTag::Html);
//! assert_eq!(classify("notes.odt"), FormatTag::Unsupported);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const POWER_POINT_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const EXCEL_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const HTML_MIME_TYPE: &str = "text/html";

/// Closed classification of a document's type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    Pdf,
    Docx,
    Pptx,
    Xlsx,
    Html,
    Unsupported,
}

impl FormatTag {
    /// Every supported tag, in the order they are listed to users.
    pub const SUPPORTED: [FormatTag; 5] = [
        FormatTag::Pdf,
        FormatTag::Docx,
        FormatTag::Pptx,
        FormatTag::Xlsx,
        FormatTag::Html,
    ];

    /// Map a bare extension (with or without the leading dot) to a tag.
    pub fn from_extension(extension: &str) -> Self {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => FormatTag::Pdf,
            "docx" => FormatTag::Docx,
            "pptx" => FormatTag::Pptx,
            "xlsx" => FormatTag::Xlsx,
            "html" | "htm" => FormatTag::Html,
            _ => FormatTag::Unsupported,
        }
    }

    /// Human-facing format name, used in failure messages.
    pub fn name(self) -> &'static str {
        match self {
            FormatTag::Pdf => "PDF",
            FormatTag::Docx => "DOCX",
            FormatTag::Pptx => "PPTX",
            FormatTag::Xlsx => "Excel",
            FormatTag::Html => "HTML",
            FormatTag::Unsupported => "Unsupported",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FormatTag::Pdf => &["pdf"],
            FormatTag::Docx => &["docx"],
            FormatTag::Pptx => &["pptx"],
            FormatTag::Xlsx => &["xlsx"],
            FormatTag::Html => &["html", "htm"],
            FormatTag::Unsupported => &[],
        }
    }

    pub fn mime_type(self) -> Option<&'static str> {
        match self {
            FormatTag::Pdf => Some(PDF_MIME_TYPE),
            FormatTag::Docx => Some(DOCX_MIME_TYPE),
            FormatTag::Pptx => Some(POWER_POINT_MIME_TYPE),
            FormatTag::Xlsx => Some(EXCEL_MIME_TYPE),
            FormatTag::Html => Some(HTML_MIME_TYPE),
            FormatTag::Unsupported => None,
        }
    }

    pub fn is_supported(self) -> bool {
        self != FormatTag::Unsupported
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lower-cased extension of the final path component, including the leading dot.
///
/// Returns `None` for names without an extension and for dotfiles such as `.pdf`.
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
}

/// Classify a document by its file name.
pub fn classify(file_name: &str) -> FormatTag {
    file_extension(file_name)
        .map(|ext| FormatTag::from_extension(&ext))
        .unwrap_or(FormatTag::Unsupported)
}
