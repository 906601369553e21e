//! HTML text extraction using scraper.
//!
//! Parsing is lenient: malformed markup never fails, and invalid UTF-8 is decoded lossily.
//! Text nodes are collected in document order, skipping anything inside `script`, `style`
//! or `template`. Each node is trimmed and whitespace-only nodes are dropped.
//!
//! The parser treats the contents of `noscript`, `iframe`, `noembed` and `noframes` as raw
//! text, so that text is parsed again as a fragment and walked the same way.

use crate::error::Result;
use scraper::{ElementRef, Html};

const SKIPPED_ELEMENTS: [&str; 3] = ["script", "style", "template"];
const RAW_TEXT_CONTAINERS: [&str; 4] = ["noscript", "iframe", "noembed", "noframes"];

/// Extract visible text from HTML bytes, one text node per line.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let source = String::from_utf8_lossy(bytes);
    let document = Html::parse_document(&source);

    let mut lines = Vec::new();
    collect_text(document.root_element(), &mut lines);

    tracing::debug!(text_nodes = lines.len(), "Parsed HTML document");

    Ok(lines.join("\n"))
}

fn collect_text(element: ElementRef, lines: &mut Vec<String>) {
    let name = element.value().name();
    if SKIPPED_ELEMENTS.contains(&name) {
        return;
    }
    if RAW_TEXT_CONTAINERS.contains(&name) {
        let markup: String = element.text().collect();
        let fragment = Html::parse_fragment(&markup);
        collect_text(fragment.root_element(), lines);
        return;
    }

    for node in element.children() {
        if let Some(child) = ElementRef::wrap(node) {
            collect_text(child, lines);
        } else if let Some(text) = node.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
    }
}
