//! DOCX (Microsoft Word) text extraction.
//!
//! Reads `word/document.xml` directly from the package and emits one line per body
//! paragraph. Only paragraphs that are direct children of `w:body` are visited, so tables,
//! text boxes, headers and footers are not part of the output.

use super::ooxml::{is_element, open_archive, parse_xml, require_part};
use crate::error::{DocuconvertError, Result};
use std::io::Cursor;

const W_NAMESPACE: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DOCUMENT_PART: &str = "word/document.xml";

/// Extract text from DOCX bytes.
///
/// # Errors
///
/// Returns `DocuconvertError::Parsing` if the bytes are not a ZIP package, the main
/// document part is missing, or its XML is malformed.
pub fn extract_text(bytes: &[u8]) -> Result<String> {
    let mut archive = open_archive(Cursor::new(bytes), "DOCX")?;
    let xml = require_part(&mut archive, DOCUMENT_PART)?;
    let doc = parse_xml(&xml, DOCUMENT_PART)?;

    let body = doc
        .root_element()
        .children()
        .find(|n| is_element(n, W_NAMESPACE, "body"))
        .ok_or_else(|| DocuconvertError::parsing("No <w:body> found in word/document.xml"))?;

    let paragraphs: Vec<String> = body
        .children()
        .filter(|n| is_element(n, W_NAMESPACE, "p"))
        .map(|p| paragraph_text(&p))
        .collect();

    tracing::debug!(paragraph_count = paragraphs.len(), "Parsed DOCX body");

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(p_node: &roxmltree::Node) -> String {
    let mut text = String::new();

    for child in p_node.children().filter(|n| n.is_element()) {
        if is_element(&child, W_NAMESPACE, "r") {
            push_run(&mut text, &child);
        } else if is_element(&child, W_NAMESPACE, "hyperlink") {
            for run in child.children().filter(|n| is_element(n, W_NAMESPACE, "r")) {
                push_run(&mut text, &run);
            }
        }
    }

    text
}

fn push_run(buffer: &mut String, r_node: &roxmltree::Node) {
    for child in r_node.children().filter(|n| n.is_element()) {
        if child.tag_name().namespace() != Some(W_NAMESPACE) {
            continue;
        }
        match child.tag_name().name() {
            "t" => buffer.push_str(child.text().unwrap_or_default()),
            "tab" => buffer.push('\t'),
            "br" if is_layout_break(&child) => {}
            "br" | "cr" => buffer.push('\n'),
            "noBreakHyphen" => buffer.push('-'),
            _ => {}
        }
    }
}

/// Page and column breaks end a page or column, not a line.
fn is_layout_break(br_node: &roxmltree::Node) -> bool {
    matches!(br_node.attribute((W_NAMESPACE, "type")), Some("page" | "column"))
}
