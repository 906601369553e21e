//! HTML document extractor.

use super::DocumentExtractor;
use crate::Result;
use crate::core::config::ExtractionConfig;
use crate::core::formats::FormatTag;

/// HTML extractor collecting visible text nodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExtractor;

impl HtmlExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for HtmlExtractor {
    fn name(&self) -> &'static str {
        "html-extractor"
    }

    fn format(&self) -> FormatTag {
        FormatTag::Html
    }

    fn extract_bytes(&self, content: &[u8], _config: &ExtractionConfig) -> Result<String> {
        crate::extraction::html::extract_text(content)
    }
}
