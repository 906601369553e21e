//! Shared helpers for Office Open XML packages (DOCX, PPTX).

use crate::error::{DocuconvertError, Result};
use std::io::{Read, Seek};
use zip::ZipArchive;

/// Open a ZIP container, keeping I/O errors distinct from format errors.
pub(crate) fn open_archive<R: Read + Seek>(reader: R, format: &str) -> Result<ZipArchive<R>> {
    match ZipArchive::new(reader) {
        Ok(archive) => Ok(archive),
        Err(zip::result::ZipError::Io(io_err)) => Err(io_err.into()), // Bubble up IO errors ~keep
        Err(e) => Err(DocuconvertError::parsing(format!(
            "Failed to read {} archive (invalid format): {}",
            format, e
        ))),
    }
}

/// Read a part of the package as UTF-8 text, `None` when the part doesn't exist.
pub(crate) fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(path) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(zip::result::ZipError::Io(io_err)) => return Err(io_err.into()), // Bubble up IO errors ~keep
        Err(e) => return Err(DocuconvertError::parsing(format!("Failed to read {}: {}", path, e))),
    };

    let mut contents = Vec::new();
    file.read_to_end(&mut contents)?;

    String::from_utf8(contents)
        .map(Some)
        .map_err(|e| DocuconvertError::parsing(format!("Invalid UTF-8 in {}: {}", path, e)))
}

/// Read a part that must be present.
pub(crate) fn require_part<R: Read + Seek>(archive: &mut ZipArchive<R>, path: &str) -> Result<String> {
    read_part(archive, path)?.ok_or_else(|| DocuconvertError::parsing(format!("Missing part {}", path)))
}

/// Parse XML text, naming the part in the error.
pub(crate) fn parse_xml<'a>(xml: &'a str, part: &str) -> Result<roxmltree::Document<'a>> {
    roxmltree::Document::parse(xml).map_err(|e| DocuconvertError::parsing(format!("Failed to parse {}: {}", part, e)))
}

/// True when `node` is an element named `name` in namespace `namespace`.
pub(crate) fn is_element(node: &roxmltree::Node, namespace: &str, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name && node.tag_name().namespace() == Some(namespace)
}
