//! DOCX extractor.

use super::DocumentExtractor;
use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;

/// Word document extractor reading body paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for DocxExtractor {
    fn name(&self) -> &'static str {
        "docx-extractor"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Docx
    }

    fn extract_bytes(&self, content: &[u8], _config: &ExtractionConfig) -> Result<String> {
        crate::extraction::docx::extract_text(content)
    }
}
