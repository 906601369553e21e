//! PDF document extractor.

use super::DocumentExtractor;
use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;

/// PDF extractor using lopdf.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PdfExtractor {
    fn name(&self) -> &'static str {
        "pdf-extractor"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Pdf
    }

    fn extract_bytes(&self, content: &[u8], _config: &ExtractionConfig) -> Result<String> {
        crate::extraction::pdf::extract_text(content)
    }
}
