//! Fixture builders shared by the integration tests.
//!
//! Documents are generated in memory so the tests don't depend on binary files.

#![allow(dead_code)]

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use std::io::{Cursor, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

const PACKAGE_RELS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const OFFICE_RELS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

pub fn zip_parts(parts: &[(String, String)]) -> Vec<u8> {
    let mut buffer = Vec::new();
    {
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();
        for (path, contents) in parts {
            zip.start_file(path.as_str(), options).unwrap();
            zip.write_all(contents.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }
    buffer
}

pub fn build_pdf(pages: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let operations = if text.is_empty() {
            vec![]
        } else {
            vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 24.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ]
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, Content { operations }.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).unwrap();
    buffer
}

pub fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|text| format!("<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>", text))
        .collect();

    zip_parts(&[
        (
            "_rels/.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="word/document.xml"/></Relationships>"#,
                PACKAGE_RELS, OFFICE_RELS
            ),
        ),
        (
            "word/document.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
                body
            ),
        ),
    ])
}

fn slide_xml(text: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<p:sld xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main">
    <p:cSld><p:spTree><p:sp><p:txBody><a:p><a:r><a:t>{}</a:t></a:r></a:p></p:txBody></p:sp></p:spTree></p:cSld>
</p:sld>"#,
        text
    )
}

/// Slide `i` is stored as `slide{i+1}.xml`; `order` lists 1-based slide numbers in
/// presentation order.
pub fn build_pptx_with_order(slide_texts: &[&str], order: &[usize]) -> Vec<u8> {
    let mut rels = format!(r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{}">"#, PACKAGE_RELS);
    for i in 1..=slide_texts.len() {
        rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/slide" Target="slides/slide{}.xml"/>"#,
            i, OFFICE_RELS, i
        ));
    }
    rels.push_str("</Relationships>");

    let ids: String = order
        .iter()
        .enumerate()
        .map(|(position, number)| format!(r#"<p:sldId id="{}" r:id="rId{}"/>"#, 256 + position, number))
        .collect();
    let presentation = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?><p:presentation xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main" xmlns:r="{}"><p:sldIdLst>{}</p:sldIdLst></p:presentation>"#,
        OFFICE_RELS, ids
    );

    let mut parts = vec![
        ("ppt/presentation.xml".to_string(), presentation),
        ("ppt/_rels/presentation.xml.rels".to_string(), rels),
    ];
    for (i, text) in slide_texts.iter().enumerate() {
        parts.push((format!("ppt/slides/slide{}.xml", i + 1), slide_xml(text)));
    }
    zip_parts(&parts)
}

pub fn build_pptx(slide_texts: &[&str]) -> Vec<u8> {
    let order: Vec<usize> = (1..=slide_texts.len()).collect();
    build_pptx_with_order(slide_texts, &order)
}

/// Build an XLSX from `(sheet name, rows of inline strings)`.
pub fn build_xlsx(sheets: &[(&str, &[&[&str]])]) -> Vec<u8> {
    let mut workbook_sheets = String::new();
    let mut workbook_rels = format!(r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{}">"#, PACKAGE_RELS);
    let mut parts = Vec::new();

    for (i, (name, rows)) in sheets.iter().enumerate() {
        let n = i + 1;
        workbook_sheets.push_str(&format!(r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#, name, n, n));
        workbook_rels.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}/worksheet" Target="worksheets/sheet{}.xml"/>"#,
            n, OFFICE_RELS, n
        ));

        let mut data = String::new();
        for (r, row) in rows.iter().enumerate() {
            data.push_str(&format!(r#"<row r="{}">"#, r + 1));
            for (c, value) in row.iter().enumerate() {
                data.push_str(&format!(
                    r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                    (b'A' + c as u8) as char,
                    r + 1,
                    value
                ));
            }
            data.push_str("</row>");
        }
        parts.push((
            format!("xl/worksheets/sheet{}.xml", n),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>{}</sheetData></worksheet>"#,
                data
            ),
        ));
    }
    workbook_rels.push_str("</Relationships>");

    let mut all = vec![
        (
            "[Content_Types].xml".to_string(),
            r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/></Types>"#
                .to_string(),
        ),
        (
            "_rels/.rels".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="{}"><Relationship Id="rId1" Type="{}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#,
                PACKAGE_RELS, OFFICE_RELS
            ),
        ),
        (
            "xl/workbook.xml".to_string(),
            format!(
                r#"<?xml version="1.0" encoding="UTF-8"?><workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="{}"><sheets>{}</sheets></workbook>"#,
                OFFICE_RELS, workbook_sheets
            ),
        ),
        ("xl/_rels/workbook.xml.rels".to_string(), workbook_rels),
    ];
    all.extend(parts);
    zip_parts(&all)
}

/// Number of entries left in a directory.
pub fn entry_count(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}
