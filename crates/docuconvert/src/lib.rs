//! docuconvert - normalize office documents into text and measure the storage saved
//!
//! docuconvert takes a batch of documents (PDF, DOCX, PPTX, XLSX, HTML), extracts a
//! linear text representation from each one, and reports how much smaller the text is
//! than the original file.
//!
//! # Quick Start
//!
//! ```rust
//! use docuconvert::{Outcome, run_batch};
//!
//! let batch = run_batch(vec![
//!     ("page.html", b"<html><body><p>Hello</p></body></html>".to_vec()),
//!     ("notes.odt", b"...".to_vec()),
//! ]);
//!
//! assert_eq!(batch.reports[0].outcome(), Outcome::Converted);
//! assert_eq!(batch.reports[1].outcome(), Outcome::Unsupported);
//! ```
//!
//! # Architecture
//!
//! - **Core Module** (`core`): classification, configuration, staging and the batch pipeline
//! - **Extraction** (`extraction`): format-specific readers returning `Result<String>`
//! - **Extractors** (`extractors`): one [`DocumentExtractor`] per format and the boundary
//!   that turns errors and panics into per-document failures
//! - **Analysis** (`analysis`): size comparison between original and extracted text
//! - **Artifacts** (`artifacts`): `.md` / `.txt` outputs for converted documents
//!
//! Processing is synchronous and sequential. A failing document never affects the others.

#![deny(unsafe_code)]

pub mod analysis;
pub mod artifacts;
pub mod core;
pub mod error;
pub mod extraction;
pub mod extractors;
pub mod types;

pub use error::{DocuconvertError, Result};

pub use analysis::{SizeReport, analyze, format_size};
pub use artifacts::{
    ArtifactKind, OutputArtifact, artifacts_for, base_name, report_artifacts, write_artifacts,
    write_batch_artifacts,
};
pub use core::config::{ArtifactConfig, ArtifactNaming, ExcelConfig, ExtractionConfig};
pub use core::formats::{FormatTag, classify, file_extension};
pub use core::pipeline::{process_document, run_batch, run_batch_with_config};
pub use extractors::{DocumentExtractor, extract, extract_with_config, extractor_for};
pub use types::{
    BatchResult, BatchSummary, DocumentReport, ExtractionFailure, ExtractionResult, FailureKind, Outcome,
    SourceDocument,
};
