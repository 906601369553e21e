//! Built-in document extractors and the dispatch boundary.
//!
//! Every supported [`FormatTag`] has exactly one extractor implementing
//! [`DocumentExtractor`]. [`extract_with_config`] is the single place where extractor
//! errors and panics become [`ExtractionFailure`]s, so nothing raised by a parser escapes.

use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;
use crate::error::DocuconvertError;
use crate::types::{ExtractionFailure, ExtractionResult};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

pub mod docx;
pub mod excel;
pub mod html;
pub mod pdf;
pub mod pptx;

pub use docx::DocxExtractor;
pub use excel::ExcelExtractor;
pub use html::HtmlExtractor;
pub use pdf::PdfExtractor;
pub use pptx::PptxExtractor;

/// A format-specific converter from document bytes to text.
pub trait DocumentExtractor {
    /// Stable identifier used in logs.
    fn name(&self) -> &'static str;

    /// The format this extractor handles.
    fn format(&self) -> FormatTag;

    /// Extract text from the raw document bytes.
    ///
    /// # Errors
    ///
    /// Any error is reported against this document only; see [`extract_with_config`].
    fn extract_bytes(&self, content: &[u8], config: &ExtractionConfig) -> Result<String>;
}

/// Look up the extractor for a format; `None` for [`FormatTag::Unsupported`].
pub fn extractor_for(format: FormatTag) -> Option<&'static dyn DocumentExtractor> {
    match format {
        FormatTag::Pdf => Some(&PdfExtractor),
        FormatTag::Docx => Some(&DocxExtractor),
        FormatTag::Pptx => Some(&PptxExtractor),
        FormatTag::Xlsx => Some(&ExcelExtractor),
        FormatTag::Html => Some(&HtmlExtractor),
        FormatTag::Unsupported => None,
    }
}

/// Extract text with the default configuration.
///
/// # Example
///
/// ```rust
/// use docuconvert::{FormatTag, extract};
///
/// let result = extract(FormatTag::Html, b"<p>Hello</p>");
/// assert_eq!(result.as_text(), Some("Hello"));
/// ```
pub fn extract(format: FormatTag, content: &[u8]) -> ExtractionResult {
    extract_with_config(format, content, &ExtractionConfig::default())
}

/// Extract text, converting every error or panic into an [`ExtractionFailure`].
pub fn extract_with_config(format: FormatTag, content: &[u8], config: &ExtractionConfig) -> ExtractionResult {
    let Some(extractor) = extractor_for(format) else {
        return ExtractionResult::Failure(ExtractionFailure::unsupported(None));
    };

    tracing::debug!(extractor = extractor.name(), bytes = content.len(), "Running extractor");
    run_guarded(format, || extractor.extract_bytes(content, config))
}

fn run_guarded<F>(format: FormatTag, extract: F) -> ExtractionResult
where
    F: FnOnce() -> Result<String>,
{
    let error = match panic::catch_unwind(AssertUnwindSafe(extract)) {
        Ok(Ok(text)) => return ExtractionResult::text(text),
        Ok(Err(err)) => err,
        Err(payload) => DocuconvertError::Other(format!("parser panicked: {}", panic_message(payload.as_ref()))),
    };

    let failure = ExtractionFailure::from_error(format, &error);
    tracing::warn!(format = %format, error = %error, "Extraction failed");
    ExtractionResult::Failure(failure)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
