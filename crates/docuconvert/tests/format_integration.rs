//! Per-format integration tests.
//!
//! Well-formed samples of every supported format convert; corrupted samples fail with a
//! parse failure that names the format.

use docuconvert::{ExtractionConfig, FailureKind, FormatTag, Outcome, SourceDocument, extract, process_document};

mod helpers;
use helpers::{build_docx, build_pdf, build_pptx, build_xlsx};

fn report_for(name: &str, bytes: Vec<u8>) -> docuconvert::DocumentReport {
    process_document(&SourceDocument::new(name, bytes), &ExtractionConfig::default())
}

#[test]
fn test_pdf_converts() {
    let report = report_for("memo.pdf", build_pdf(&["Quarterly results", "Appendix"]));

    assert_eq!(report.outcome(), Outcome::Converted);
    let text = report.converted_text().unwrap();
    assert!(text.contains("Quarterly results"));
    assert!(text.contains("Appendix"));
}

#[test]
fn test_docx_converts() {
    let report = report_for("letter.docx", build_docx(&["Dear reader,", "Regards"]));
    assert_eq!(report.converted_text(), Some("Dear reader,\nRegards"));
}

#[test]
fn test_pptx_converts() {
    let report = report_for("deck.pptx", build_pptx(&["Intro", "Plan"]));
    assert_eq!(report.converted_text(), Some("Intro\nPlan"));
}

#[test]
fn test_xlsx_converts() {
    let rows: &[&[&str]] = &[&["Name", "Team"], &["Ada", "Core"]];
    let report = report_for("people.xlsx", build_xlsx(&[("People", rows)]));

    assert_eq!(
        report.converted_text(),
        Some("### Sheet: People\n\n| Name | Team |\n| --- | --- |\n| Ada | Core |")
    );
}

#[test]
fn test_html_converts() {
    let report = report_for("page.htm", b"<html><body><h1>Title</h1><p>Body</p></body></html>".to_vec());
    assert_eq!(report.converted_text(), Some("Title\nBody"));
}

#[test]
fn test_uppercase_extension_is_recognized() {
    let report = report_for("LETTER.DOCX", build_docx(&["Hi"]));
    assert_eq!(report.format, FormatTag::Docx);
    assert_eq!(report.outcome(), Outcome::Converted);
}

#[test]
fn test_corrupted_inputs_yield_parse_failures() {
    let cases = [
        (FormatTag::Pdf, "PDF"),
        (FormatTag::Docx, "DOCX"),
        (FormatTag::Pptx, "PPTX"),
        (FormatTag::Xlsx, "Excel"),
    ];

    for (format, name) in cases {
        let result = extract(format, b"\x00\x01 this is not a real document \xff");
        let failure = result
            .failure()
            .unwrap_or_else(|| panic!("{} should fail on corrupted input", name));

        assert_eq!(failure.kind, FailureKind::ParseFailure);
        assert_eq!(failure.format, format);
        assert!(
            failure.message.starts_with(&format!("Error reading {}: ", name)),
            "unexpected message: {}",
            failure.message
        );
    }
}

#[test]
fn test_truncated_office_package_fails() {
    let mut docx = build_docx(&["Will be cut"]);
    docx.truncate(docx.len() / 2);

    let result = extract(FormatTag::Docx, &docx);
    assert_eq!(result.failure().unwrap().kind, FailureKind::ParseFailure);
}

#[test]
fn test_html_never_fails() {
    let result = extract(FormatTag::Html, b"\xff\xfe<<<>>> </unclosed");
    assert!(!result.is_failure());
}
