//! Storage-efficiency analysis.
//!
//! Compares the byte size of an original document with the UTF-8 byte length of the text
//! extracted from it. The comparand is the encoded length, not the character count, so a
//! multi-byte character counts as every byte it occupies.
//!
//! # Example
//!
//! ```rust
//! use docuconvert::{analyze, format_size};
//!
//! let report = analyze(2048, "hello");
//! assert_eq!(report.extracted_bytes, 5);
//! assert_eq!(format_size(report.original_bytes), "2.00 KB");
//! ```

use serde::{Deserialize, Serialize};

const KIB: u64 = 1024;
const MIB: u64 = 1024 * 1024;

/// Size comparison between an original document and its extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeReport {
    pub original_bytes: u64,
    pub extracted_bytes: u64,
    /// `(1 - extracted / original) * 100`; `0` when the original is empty.
    ///
    /// Negative when the text is larger than the original.
    pub reduction_percent: f64,
}

impl SizeReport {
    /// Reduction rendered with one decimal, e.g. `"87.5%"`.
    pub fn space_saved(&self) -> String {
        format!("{:.1}%", self.reduction_percent)
    }

    /// Metric/value rows of the storage-efficiency table.
    pub fn comparison_rows(&self) -> [(&'static str, String); 3] {
        [
            ("Original File Size", format_size(self.original_bytes)),
            ("Converted Text Size", format_size(self.extracted_bytes)),
            ("Space Saved", self.space_saved()),
        ]
    }

    /// One-line callout for the comparison.
    pub fn summary(&self) -> String {
        format!(
            "The text version is {:.1}% smaller than the original file.",
            self.reduction_percent
        )
    }
}

/// Compute the size comparison for `extracted_text` against `original_bytes`.
pub fn analyze(original_bytes: u64, extracted_text: &str) -> SizeReport {
    let extracted_bytes = extracted_text.len() as u64;

    let reduction_percent = if original_bytes > 0 {
        (1.0 - (extracted_bytes as f64 / original_bytes as f64)) * 100.0
    } else {
        0.0
    };

    SizeReport {
        original_bytes,
        extracted_bytes,
        reduction_percent,
    }
}

/// Human-scale size: bytes below 1 KiB, then KB and MB with two decimals.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{} bytes", bytes)
    } else if bytes < MIB {
        format!("{:.2} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB as f64)
    }
}
