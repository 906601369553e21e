//! Excel spreadsheet extractor.

use super::DocumentExtractor;
use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;

/// XLSX extractor rendering each sheet as a Markdown table.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExcelExtractor;

impl ExcelExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for ExcelExtractor {
    fn name(&self) -> &'static str {
        "excel-extractor"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Xlsx
    }

    fn extract_bytes(&self, content: &[u8], config: &ExtractionConfig) -> Result<String> {
        crate::extraction::excel::extract_text(content, &config.excel)
    }
}
