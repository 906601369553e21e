//! Batch pipeline: classify, extract and analyze each document independently.
//!
//! Documents are processed sequentially, in input order, each to completion before the next
//! one starts. No error escapes the pipeline: every problem ends up in the report of the
//! document that caused it.

use crate::analysis::analyze;
use crate::core::config::ExtractionConfig;
use crate::core::formats::{FormatTag, file_extension};
use crate::extractors::extract_with_config;
use crate::types::{BatchResult, DocumentReport, ExtractionFailure, ExtractionResult, Outcome, SourceDocument};

/// Run a batch with the default configuration.
///
/// Accepts anything that yields `(file name, bytes)` pairs.
pub fn run_batch<I, N, B>(documents: I) -> BatchResult
where
    I: IntoIterator<Item = (N, B)>,
    N: Into<String>,
    B: Into<Vec<u8>>,
{
    run_batch_with_config(documents, &ExtractionConfig::default())
}

/// Run a batch; the result holds exactly one report per input, in input order.
pub fn run_batch_with_config<I, N, B>(documents: I, config: &ExtractionConfig) -> BatchResult
where
    I: IntoIterator<Item = (N, B)>,
    N: Into<String>,
    B: Into<Vec<u8>>,
{
    let reports: Vec<DocumentReport> = documents
        .into_iter()
        .map(|(name, content)| process_document(&SourceDocument::new(name, content), config))
        .collect();

    let batch = BatchResult { reports };
    let summary = batch.summary();
    tracing::info!(
        total = summary.total,
        converted = summary.converted,
        no_text = summary.no_text,
        unsupported = summary.unsupported,
        failed = summary.failed,
        "Batch complete"
    );

    batch
}

/// Classify, extract and analyze a single document.
#[tracing::instrument(name = "document", skip_all, fields(name = %document.name(), format = %document.format()))]
pub fn process_document(document: &SourceDocument, config: &ExtractionConfig) -> DocumentReport {
    let format = document.format();

    let extraction = match format {
        FormatTag::Unsupported => {
            let extension = file_extension(document.name());
            let failure = ExtractionFailure::unsupported(extension.as_deref());
            tracing::warn!(reason = %failure.message, "Skipping unsupported document");
            ExtractionResult::Failure(failure)
        }
        _ => extract_with_config(format, document.content(), config),
    };

    let size = extraction
        .as_text()
        .filter(|text| !text.trim().is_empty())
        .map(|text| analyze(document.byte_len(), text));

    let report = DocumentReport {
        name: document.name().to_string(),
        format,
        original_bytes: document.byte_len(),
        extraction,
        size,
    };

    match report.outcome() {
        Outcome::Converted => {
            if let Some(size) = &report.size {
                tracing::debug!(
                    original_bytes = size.original_bytes,
                    extracted_bytes = size.extracted_bytes,
                    reduction_percent = size.reduction_percent,
                    "Document converted"
                );
            }
        }
        Outcome::NoText => tracing::warn!("No text extracted"),
        Outcome::Unsupported | Outcome::Failed => {}
    }

    report
}
