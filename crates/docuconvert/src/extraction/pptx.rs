//! PowerPoint (PPTX) text extraction.
//!
//! The presentation is opened from a filesystem path. Byte input is first staged to a
//! scoped temporary file (see [`StagedFile`]) which is removed when extraction finishes.
//!
//! Slides are visited in presentation order: the `p:sldIdLst` of `ppt/presentation.xml`
//! resolved through `ppt/_rels/presentation.xml.rels`. When that list is unavailable the
//! relationship order is used, and as a last resort the `ppt/slides/slideN.xml` parts sorted
//! by `N`. Within a slide every top-level `p:sp` shape contributes one entry: its text body,
//! or an empty string when it has none.

use super::ooxml::{is_element, open_archive, parse_xml, read_part, require_part};
use crate::core::staging::StagedFile;
use crate::error::{DocuconvertError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;
use zip::ZipArchive;

const P_NAMESPACE: &str = "http://schemas.openxmlformats.org/presentationml/2006/main";
const A_NAMESPACE: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const RELS_NAMESPACE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const PRESENTATION_PART: &str = "ppt/presentation.xml";
const PRESENTATION_RELS_PART: &str = "ppt/_rels/presentation.xml.rels";
const SLIDE_PREFIX: &str = "ppt/slides/slide";

/// Extract text from PPTX bytes by staging them to a temporary file.
///
/// # Errors
///
/// Returns `DocuconvertError::Io` if staging fails and `DocuconvertError::Parsing` if the
/// presentation can't be read.
pub fn extract_text(bytes: &[u8], staging_dir: Option<&Path>) -> Result<String> {
    let staged = StagedFile::new(bytes, ".pptx", staging_dir)?;
    extract_text_from_path(staged.path())
}

/// Extract text from a PPTX file on disk.
pub fn extract_text_from_path(path: impl AsRef<Path>) -> Result<String> {
    // IO errors must bubble up unchanged - file access issues need user reports ~keep
    let file = File::open(path.as_ref())?;
    let mut archive = open_archive(file, "PPTX")?;

    let presentation_xml = require_part(&mut archive, PRESENTATION_PART)?;
    let slide_paths = find_slide_paths(&mut archive, &presentation_xml)?;
    tracing::debug!(slide_count = slide_paths.len(), "Resolved PPTX slide order");

    let mut texts = Vec::new();
    for slide_path in &slide_paths {
        let xml = require_part(&mut archive, slide_path)?;
        texts.extend(slide_texts(&xml, slide_path)?);
    }

    Ok(texts.join("\n"))
}

fn find_slide_paths<R: Read + Seek>(archive: &mut ZipArchive<R>, presentation_xml: &str) -> Result<Vec<String>> {
    let relationships = match read_part(archive, PRESENTATION_RELS_PART)? {
        Some(rels_xml) => parse_presentation_rels(&rels_xml)?,
        None => Vec::new(),
    };

    if !relationships.is_empty() {
        let slide_ids = parse_slide_id_list(presentation_xml)?;
        let targets: HashMap<&str, &str> = relationships
            .iter()
            .map(|rel| (rel.id.as_str(), rel.target.as_str()))
            .collect();

        let ordered: Vec<String> = slide_ids
            .iter()
            .filter_map(|id| targets.get(id.as_str()).map(|target| target.to_string()))
            .collect();

        if !ordered.is_empty() {
            return Ok(ordered);
        }

        return Ok(relationships.into_iter().map(|rel| rel.target).collect());
    }

    let mut numbered: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| slide_number(name).map(|number| (number, name.to_string())))
        .collect();
    numbered.sort();

    Ok(numbered.into_iter().map(|(_, name)| name).collect())
}

struct SlideRelationship {
    id: String,
    target: String,
}

fn parse_presentation_rels(xml: &str) -> Result<Vec<SlideRelationship>> {
    let doc = parse_xml(xml, PRESENTATION_RELS_PART)?;

    let mut slides = Vec::new();
    for node in doc.descendants() {
        if node.has_tag_name("Relationship")
            && let Some(rel_type) = node.attribute("Type")
            && rel_type.ends_with("/slide")
            && let (Some(id), Some(target)) = (node.attribute("Id"), node.attribute("Target"))
        {
            slides.push(SlideRelationship {
                id: id.to_string(),
                target: normalize_target(target),
            });
        }
    }

    Ok(slides)
}

fn normalize_target(target: &str) -> String {
    let normalized = target.strip_prefix('/').unwrap_or(target);
    if normalized.starts_with("ppt/") {
        normalized.to_string()
    } else {
        format!("ppt/{}", normalized)
    }
}

fn parse_slide_id_list(xml: &str) -> Result<Vec<String>> {
    let doc = parse_xml(xml, PRESENTATION_PART)?;

    let ids = doc
        .descendants()
        .find(|n| is_element(n, P_NAMESPACE, "sldIdLst"))
        .map(|list| {
            list.children()
                .filter(|n| is_element(n, P_NAMESPACE, "sldId"))
                .filter_map(|n| n.attribute((RELS_NAMESPACE, "id")).map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ids)
}

fn slide_number(part_name: &str) -> Option<u32> {
    part_name
        .strip_prefix(SLIDE_PREFIX)?
        .strip_suffix(".xml")?
        .parse()
        .ok()
}

fn slide_texts(xml: &str, slide_path: &str) -> Result<Vec<String>> {
    let doc = parse_xml(xml, slide_path)?;

    let c_sld = doc
        .root_element()
        .children()
        .find(|n| is_element(n, P_NAMESPACE, "cSld"))
        .ok_or_else(|| DocuconvertError::parsing(format!("No <p:cSld> tag found in {}", slide_path)))?;

    let Some(sp_tree) = c_sld.children().find(|n| is_element(n, P_NAMESPACE, "spTree")) else {
        return Ok(Vec::new());
    };

    let texts = sp_tree
        .children()
        .filter(|n| is_element(n, P_NAMESPACE, "sp"))
        .map(|sp| {
            sp.children()
                .find(|n| is_element(n, P_NAMESPACE, "txBody"))
                .map(|tx_body| text_body(&tx_body))
                .unwrap_or_default()
        })
        .collect();

    Ok(texts)
}

fn text_body(tx_body: &roxmltree::Node) -> String {
    tx_body
        .children()
        .filter(|n| is_element(n, A_NAMESPACE, "p"))
        .map(|p| paragraph_text(&p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn paragraph_text(p_node: &roxmltree::Node) -> String {
    let mut text = String::new();

    for child in p_node.children().filter(|n| n.is_element()) {
        if is_element(&child, A_NAMESPACE, "r") || is_element(&child, A_NAMESPACE, "fld") {
            if let Some(t) = child
                .children()
                .find(|n| is_element(n, A_NAMESPACE, "t"))
                .and_then(|t| t.text())
            {
                text.push_str(t);
            }
        } else if is_element(&child, A_NAMESPACE, "br") {
            text.push('\n');
        }
    }

    text
}


#[cfg(test)]
mod tests {
    use super::test_support::{build_pptx, build_pptx_with_order, slide_xml, text_shape};
    use super::*;
    use crate::extraction::ooxml::test_support::build_package;
    use tempfile::tempdir;

    #[test]
    fn test_extract_single_slide() {
        let pptx = build_pptx(&["Hello World"]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "Hello World");
    }

    #[test]
    fn test_slides_in_storage_order() {
        let pptx = build_pptx(&["Slide 1", "Slide 2", "Slide 3"]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "Slide 1\nSlide 2\nSlide 3");
    }

    #[test]
    fn test_slide_id_list_overrides_storage_order() {
        let slides = vec![
            slide_xml(&text_shape(&["stored first"])),
            slide_xml(&text_shape(&["stored second"])),
            slide_xml(&text_shape(&["stored third"])),
        ];
        let pptx = build_pptx_with_order(&slides, &[3, 1, 2]);

        assert_eq!(
            extract_text(&pptx, None).unwrap(),
            "stored third\nstored first\nstored second"
        );
    }

    #[test]
    fn test_numeric_fallback_sorts_slide10_after_slide2() {
        let mut parts = vec![(
            PRESENTATION_PART.to_string(),
            format!(r#"<p:presentation xmlns:p="{}"/>"#, P_NAMESPACE),
        )];
        for n in [10, 2, 1] {
            parts.push((
                format!("ppt/slides/slide{}.xml", n),
                slide_xml(&text_shape(&[&format!("number {}", n)])),
            ));
        }
        let borrowed: Vec<(&str, String)> = parts.iter().map(|(p, x)| (p.as_str(), x.clone())).collect();
        let pptx = build_package(&borrowed);

        assert_eq!(extract_text(&pptx, None).unwrap(), "number 1\nnumber 2\nnumber 10");
    }

    #[test]
    fn test_shape_paragraphs_joined_with_newline() {
        let slides = vec![slide_xml(&text_shape(&["Title", "Body line"]))];
        let pptx = build_pptx_with_order(&slides, &[1]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "Title\nBody line");
    }

    #[test]
    fn test_fields_and_line_breaks() {
        let shape = "<p:sp><p:txBody><a:p><a:r><a:t>Page </a:t></a:r><a:fld id=\"{1}\" type=\"slidenum\"><a:t>7</a:t></a:fld><a:br/><a:r><a:t>next</a:t></a:r></a:p></p:txBody></p:sp>";
        let pptx = build_pptx_with_order(&[slide_xml(shape)], &[1]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "Page 7\nnext");
    }

    #[test]
    fn test_pictures_and_groups_have_no_text() {
        let shapes = format!(
            "<p:pic/><p:grpSp>{}</p:grpSp>{}<p:cxnSp/>",
            text_shape(&["grouped"]),
            text_shape(&["top level"])
        );
        let pptx = build_pptx_with_order(&[slide_xml(&shapes)], &[1]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "top level");
    }

    #[test]
    fn test_shape_without_text_body_contributes_empty_line() {
        let shapes = format!("<p:sp><p:nvSpPr/></p:sp>{}", text_shape(&["only"]));
        let pptx = build_pptx_with_order(&[slide_xml(&shapes)], &[1]);
        assert_eq!(extract_text(&pptx, None).unwrap(), "\nonly");
    }

    #[test]
    fn test_staged_file_removed_after_success_and_failure() {
        let dir = tempdir().unwrap();
        let pptx = build_pptx(&["Hello"]);

        extract_text(&pptx, Some(dir.path())).unwrap();
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);

        assert!(extract_text(b"not a presentation", Some(dir.path())).is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_slide_part_fails() {
        let slides = vec![slide_xml(&text_shape(&["a"]))];
        let pptx = build_pptx_with_order(&slides, &[1]);
        let mut broken = Vec::new();
        {
            use std::io::Write;
            let mut source = ZipArchive::new(std::io::Cursor::new(&pptx)).unwrap();
            let mut writer = zip::ZipWriter::new(std::io::Cursor::new(&mut broken));
            for i in 0..source.len() {
                let mut file = source.by_index(i).unwrap();
                if file.name().starts_with(SLIDE_PREFIX) {
                    continue;
                }
                let name = file.name().to_string();
                let mut contents = Vec::new();
                file.read_to_end(&mut contents).unwrap();
                writer.start_file(name, zip::write::SimpleFileOptions::default()).unwrap();
                writer.write_all(&contents).unwrap();
            }
            writer.finish().unwrap();
        }

        let err = extract_text(&broken, None).unwrap_err();
        assert!(matches!(err, DocuconvertError::Parsing { .. }));
    }

    #[test]
    fn test_package_without_presentation_part_fails() {
        let bytes = build_package(&[("docProps/app.xml", "<Properties/>".to_string())]);
        let err = extract_text(&bytes, None).unwrap_err();
        assert!(err.to_string().contains(PRESENTATION_PART));
    }

    #[test]
    fn test_slide_number_parsing() {
        assert_eq!(slide_number("ppt/slides/slide12.xml"), Some(12));
        assert_eq!(slide_number("ppt/slides/_rels/slide1.xml.rels"), None);
        assert_eq!(slide_number("ppt/slideLayouts/slideLayout1.xml"), None);
    }

    #[test]
    fn test_normalize_target() {
        assert_eq!(normalize_target("slides/slide1.xml"), "ppt/slides/slide1.xml");
        assert_eq!(normalize_target("/ppt/slides/slide1.xml"), "ppt/slides/slide1.xml");
    }
}
