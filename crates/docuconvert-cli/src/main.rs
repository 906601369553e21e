//! # docuconvert CLI
//!
//! Command-line interface for docuconvert: convert office documents to text/Markdown and
//! report how much storage the text version saves.
//!
//! ## Commands
//!
//! - `docuconvert convert <FILES>...` - Convert documents, optionally writing `.md`/`.txt` artifacts
//! - `docuconvert classify <NAMES>...` - Show the format tag derived from each file name
//! - `docuconvert formats` - List supported formats
//!
//! ## Examples
//!
//! ```bash
//! # Convert two files and write artifacts next to each other in ./out
//! docuconvert convert report.pdf budget.xlsx -o out
//!
//! # Machine-readable output
//! docuconvert convert slides.pptx --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use docuconvert::{
    ArtifactNaming, BatchResult, BatchSummary, DocumentReport, ExtractionConfig, FormatTag, Outcome, SourceDocument,
    classify, run_batch_with_config, write_batch_artifacts,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docuconvert")]
#[command(about = "Convert documents to text/Markdown and analyze storage efficiency")]
#[command(version)]
struct Cli {
    /// Path to config file (default: docuconvert.toml in the current directory or a parent)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Naming {
    /// `<base>.md` / `<base>.txt`
    Base,
    /// `<base>_converted.md` / `<base>_converted.txt`
    Converted,
}

impl From<Naming> for ArtifactNaming {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Base => ArtifactNaming::BaseName,
            Naming::Converted => ArtifactNaming::ConvertedSuffix,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Convert documents and report the size comparison
    Convert {
        /// Documents to convert
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory to write .md and .txt artifacts into
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Artifact naming convention (overrides the config file)
        #[arg(long)]
        naming: Option<Naming>,

        /// Print the converted text of each document
        #[arg(long)]
        preview: bool,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show the format tag derived from each file name
    Classify {
        /// File names to classify
        #[arg(required = true)]
        names: Vec<String>,
    },

    /// List supported formats
    Formats,
}

/// A path that could not be read and was left out of the batch.
#[derive(Debug, Serialize)]
struct SkippedInput {
    path: String,
    error: String,
}

#[derive(Serialize)]
struct ConvertOutput<'a> {
    documents: Vec<DocumentOutput<'a>>,
    skipped: &'a [SkippedInput],
    summary: BatchSummary,
}

#[derive(Serialize)]
struct DocumentOutput<'a> {
    #[serde(flatten)]
    report: &'a DocumentReport,
    outcome: Outcome,
    artifacts: &'a [PathBuf],
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    match cli.command {
        Commands::Convert {
            files,
            output,
            naming,
            preview,
            format,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(naming) = naming {
                config.artifacts.naming = naming.into();
            }
            convert(&files, output.as_deref(), preview, format, &config)
        }
        Commands::Classify { names } => {
            for name in names {
                println!("{}\t{:?}", name, classify(&name));
            }
            Ok(())
        }
        Commands::Formats => {
            for format in FormatTag::SUPPORTED {
                println!(
                    "{:<6} {:<12} {}",
                    format.name(),
                    format.extensions().join(", "),
                    format.mime_type().unwrap_or_default()
                );
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<ExtractionConfig> {
    match path {
        Some(path) => ExtractionConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(ExtractionConfig::discover()
            .context("Failed to discover docuconvert.toml")?
            .unwrap_or_default()),
    }
}

fn convert(
    files: &[PathBuf],
    output: Option<&Path>,
    preview: bool,
    format: OutputFormat,
    config: &ExtractionConfig,
) -> Result<()> {
    let mut documents = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();

    for path in files {
        match SourceDocument::from_path(path) {
            Ok(document) => documents.push(document),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable input");
                skipped.push(SkippedInput {
                    path: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    let batch = run_batch_with_config(documents.iter().map(|doc| (doc.name(), doc.content())), config);

    let artifacts = match output {
        Some(dir) => write_batch_artifacts(dir, &batch, config.artifacts.naming)
            .with_context(|| format!("Failed to write artifacts to {}", dir.display()))?,
        None => vec![Vec::new(); batch.len()],
    };

    match format {
        OutputFormat::Json => {
            let output = ConvertOutput {
                documents: batch
                    .iter()
                    .zip(&artifacts)
                    .map(|(report, written)| DocumentOutput {
                        report,
                        outcome: report.outcome(),
                        artifacts: written,
                    })
                    .collect(),
                skipped: &skipped,
                summary: batch.summary(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => print_text(&batch, &artifacts, &skipped, preview),
    }

    Ok(())
}

fn print_text(batch: &BatchResult, artifacts: &[Vec<PathBuf>], skipped: &[SkippedInput], preview: bool) {
    for input in skipped {
        println!("Skipped {}: {}\n", input.path, input.error);
    }

    for (report, written) in batch.iter().zip(artifacts) {
        println!("Processing: {}", report.name);

        match report.outcome() {
            Outcome::Converted => {
                if preview && let Some(text) = report.converted_text() {
                    println!("\n{}\n", text);
                }
                if let Some(size) = &report.size {
                    println!("Storage Efficiency Analysis");
                    println!("| Metric | Value |");
                    println!("| --- | --- |");
                    for (metric, value) in size.comparison_rows() {
                        println!("| {} | {} |", metric, value);
                    }
                    println!("{}", size.summary());
                }
                for path in written {
                    println!("Wrote {}", path.display());
                }
            }
            Outcome::NoText => println!("Warning: No text extracted."),
            Outcome::Unsupported | Outcome::Failed => {
                if let Some(failure) = report.extraction.failure() {
                    println!("Error: {}", failure);
                }
            }
        }
        println!();
    }

    let summary = batch.summary();
    println!(
        "{} document(s): {} converted, {} without text, {} unsupported, {} failed, {} skipped",
        summary.total,
        summary.converted,
        summary.no_text,
        summary.unsupported,
        summary.failed,
        skipped.len()
    );
}
