//! PowerPoint presentation extractor.

use super::DocumentExtractor;
use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;

/// PPTX extractor. The underlying reader works on a path, so bytes are staged to a
/// temporary file in `config.staging_dir` for the duration of the call.
#[derive(Debug, Clone, Copy, Default)]
pub struct PptxExtractor;

impl PptxExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for PptxExtractor {
    fn name(&self) -> &'static str {
        "pptx-extractor"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Pptx
    }

    fn extract_bytes(&self, content: &[u8], config: &ExtractionConfig) -> Result<String> {
        crate::extraction::pptx::extract_text(content, config.staging_dir.as_deref())
    }
}
