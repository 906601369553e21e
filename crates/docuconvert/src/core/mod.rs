//! Core orchestration: format classification, configuration, staging and the batch pipeline.
//!
//! # Example
//!
//! ```rust
//! use docuconvert::core::pipeline::run_batch;
//!
//! let batch = run_batch(vec![("notes.html", b"<p>Hello</p>".to_vec())]);
//! assert_eq!(batch.reports[0].extraction.as_text(), Some("Hello"));
//! ```

pub mod config;
pub mod formats;
pub mod io;
pub mod pipeline;
pub mod staging;

pub use config::{ArtifactConfig, ArtifactNaming, ExcelConfig, ExtractionConfig};
pub use formats::{FormatTag, classify, file_extension};
pub use pipeline::{process_document, run_batch, run_batch_with_config};
