//! PDF text extraction using lopdf.
//!
//! Pages are visited in document order. Each page's text has its trailing whitespace
//! trimmed; pages with no text are skipped without a placeholder, and the remaining pages
//! are joined with a blank line.

use crate::error::{DocuconvertError, Result};
use lopdf::Document;

const PAGE_SEPARATOR: &str = "\n\n";

/// Extract text from PDF bytes.
///
/// # Errors
///
/// Returns `DocuconvertError::Parsing` if the document can't be loaded or a page's
/// content stream can't be decoded.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let document =
        Document::load_mem(bytes).map_err(|e| DocuconvertError::parsing(format!("Failed to load PDF: {}", e)))?;

    let pages = document.get_pages();
    tracing::debug!(page_count = pages.len(), "Loaded PDF");

    let mut texts = Vec::with_capacity(pages.len());
    for page_number in pages.keys() {
        let text = document.extract_text(&[*page_number]).map_err(|e| {
            DocuconvertError::parsing(format!("Failed to extract text from page {}: {}", page_number, e))
        })?;

        let text = text.trim_end();
        if text.trim().is_empty() {
            tracing::trace!(page = page_number, "Skipping page without text");
            continue;
        }
        texts.push(text.to_string());
    }

    Ok(texts.join(PAGE_SEPARATOR))
}
