//! Excel (XLSX) extraction to Markdown tables using calamine.
//!
//! Every sheet, in workbook order, becomes a `### Sheet: <name>` heading followed by a
//! pipe table. Sheets are separated by a blank line.

use crate::core::config::ExcelConfig;
use crate::error::{DocuconvertError, Result};
use calamine::{Data, Range, Reader, Xlsx};
use std::fmt::Write as _;
use std::io::Cursor;

const EMPTY_SHEET: &str = "*Empty sheet*";

/// Render every sheet of an XLSX workbook as Markdown.
///
/// # Errors
///
/// Returns `DocuconvertError::Parsing` if the workbook or one of its sheets can't be read.
pub fn extract_text(bytes: &[u8], config: &ExcelConfig) -> Result<String> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| DocuconvertError::parsing(format!("Failed to parse XLSX: {}", e)))?;

    let sheet_names = workbook.sheet_names();
    tracing::debug!(sheet_count = sheet_names.len(), "Opened XLSX workbook");

    let mut sections = Vec::with_capacity(sheet_names.len());
    for name in &sheet_names {
        let range = workbook.worksheet_range(name)?;
        sections.push(render_sheet(name, &range, config.header_row));
    }

    Ok(sections.join("\n\n"))
}

fn render_sheet(name: &str, range: &Range<Data>, header_row: bool) -> String {
    let (rows, cols) = range.get_size();
    let mut result = String::with_capacity(50 + (cols * 20) + (rows * cols * 12));

    result.push_str("### Sheet: ");
    result.push_str(name);
    result.push_str("\n\n");

    if rows == 0 || cols == 0 {
        result.push_str(EMPTY_SHEET);
        return result;
    }

    generate_markdown_table_into(&mut result, range, header_row);
    result
}

fn generate_markdown_table_into(result: &mut String, range: &Range<Data>, header_row: bool) {
    let rows: Vec<&[Data]> = range.rows().collect();

    let (header_len, body) = if header_row {
        let header = rows[0];
        result.push_str("| ");
        for (i, cell) in header.iter().enumerate() {
            if i > 0 {
                result.push_str(" | ");
            }
            format_cell_value_into(result, cell);
        }
        result.push_str(" |\n");
        (header.len(), &rows[1..])
    } else {
        let width = range.width();
        result.push_str("| ");
        for i in 0..width {
            if i > 0 {
                result.push_str(" | ");
            }
            let _ = write!(result, "Column {}", i + 1);
        }
        result.push_str(" |\n");
        (width, &rows[..])
    };

    result.push_str("| ");
    for i in 0..header_len {
        if i > 0 {
            result.push_str(" | ");
        }
        result.push_str("---");
    }
    result.push_str(" |");

    for row in body {
        result.push_str("\n| ");
        for i in 0..header_len {
            if i > 0 {
                result.push_str(" | ");
            }
            if let Some(cell) = row.get(i) {
                format_cell_value_into(result, cell);
            }
        }
        result.push_str(" |");
    }
}

#[inline]
fn format_cell_value_into(buffer: &mut String, data: &Data) {
    match data {
        Data::Empty => {}
        Data::String(s) => {
            if s.contains('|') || s.contains('\\') || s.contains('\n') {
                escape_markdown_into(buffer, s);
            } else {
                buffer.push_str(s);
            }
        }
        Data::Float(f) => {
            if f.fract() == 0.0 {
                let _ = write!(buffer, "{:.1}", f);
            } else {
                let _ = write!(buffer, "{}", f);
            }
        }
        Data::Int(i) => {
            let _ = write!(buffer, "{}", i);
        }
        Data::Bool(b) => {
            buffer.push_str(if *b { "true" } else { "false" });
        }
        Data::DateTime(dt) => {
            if let Some(datetime) = dt.as_datetime() {
                let _ = write!(buffer, "{}", datetime.format("%Y-%m-%d %H:%M:%S"));
            } else {
                let _ = write!(buffer, "{:?}", dt);
            }
        }
        Data::Error(e) => {
            let _ = write!(buffer, "#ERR: {:?}", e);
        }
        Data::DateTimeIso(s) => {
            buffer.push_str(s);
        }
        Data::DurationIso(s) => {
            buffer.push_str("DURATION: ");
            buffer.push_str(s);
        }
    }
}

#[inline]
fn escape_markdown_into(buffer: &mut String, s: &str) {
    for ch in s.chars() {
        match ch {
            '|' => buffer.push_str("\\|"),
            '\\' => buffer.push_str("\\\\"),
            '\n' => buffer.push(' '),
            _ => buffer.push(ch),
        }
    }
}
