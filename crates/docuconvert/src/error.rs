//! Error types for docuconvert.
//!
//! Every fallible operation in the library returns [`Result`], whose error side is
//! [`DocuconvertError`]. Errors follow two rules:
//!
//! - System errors (`std::io::Error`) bubble up unchanged as [`DocuconvertError::Io`].
//! - Application errors (corrupt documents, bad configuration) carry a message and,
//!   when available, the underlying cause as `#[source]`.
//!
//! Inside the batch pipeline no error escapes: each one is converted into an
//! [`ExtractionFailure`](crate::types::ExtractionFailure) attached to the document it
//! came from. Outside the pipeline (configuration loading, artifact writing, reading
//! files from disk) errors propagate with `?`.
//!
//! # Example
//!
//! ```rust
//! use docuconvert::{DocuconvertError, Result};
//!
//! fn load(path: &str) -> Result<Vec<u8>> {
//!     let bytes = std::fs::read(path)?;
//!     if bytes.is_empty() {
//!         return Err(DocuconvertError::validation(format!("File is empty: {}", path)));
//!     }
//!     Ok(bytes)
//! }
//! ```
use thiserror::Error;

/// Result type alias using `DocuconvertError`.
pub type Result<T> = std::result::Result<T, DocuconvertError>;

/// Main error type for all docuconvert operations.
///
/// # Variants
///
/// - `Io` - File system and I/O errors (always bubble up)
/// - `Parsing` - Document parsing errors (corrupt or truncated files)
/// - `Validation` - Invalid configuration, paths or parameters
/// - `Serialization` - JSON/TOML/YAML encoding errors
/// - `UnsupportedFormat` - File extension outside the recognized set
/// - `Other` - Catch-all for uncommon errors
#[derive(Debug, Error)]
pub enum DocuconvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parsing error: {message}")]
    Parsing {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Serialization error: {message}")]
    Serialization {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Other(String),
}

impl From<calamine::XlsxError> for DocuconvertError {
    fn from(err: calamine::XlsxError) -> Self {
        DocuconvertError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<lopdf::Error> for DocuconvertError {
    fn from(err: lopdf::Error) -> Self {
        match err {
            // Real IO error - bubble up unchanged ~keep
            lopdf::Error::IO(io_err) => DocuconvertError::Io(io_err),
            other => DocuconvertError::parsing(other.to_string()),
        }
    }
}

impl From<zip::result::ZipError> for DocuconvertError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(io_err) => DocuconvertError::Io(io_err),
            other => DocuconvertError::Parsing {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

impl From<roxmltree::Error> for DocuconvertError {
    fn from(err: roxmltree::Error) -> Self {
        DocuconvertError::Parsing {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_json::Error> for DocuconvertError {
    fn from(err: serde_json::Error) -> Self {
        DocuconvertError::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

macro_rules! error_constructor {
    ($name:ident, $variant:ident) => {
        pastey::paste! {
            #[doc = "Create a " $variant " error"]
            pub fn $name<S: Into<String>>(message: S) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: None,
                }
            }

            #[doc = "Create a " $variant " error with source"]
            pub fn [<$name _with_source>]<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
                message: S,
                source: E,
            ) -> Self {
                Self::$variant {
                    message: message.into(),
                    source: Some(Box::new(source)),
                }
            }
        }
    };
}

impl DocuconvertError {
    error_constructor!(parsing, Parsing);
    error_constructor!(validation, Validation);
    error_constructor!(serialization, Serialization);

    /// Underlying cause without the variant prefix, used for per-document failure messages.
    pub fn cause(&self) -> String {
        match self {
            DocuconvertError::Io(err) => err.to_string(),
            DocuconvertError::Parsing { message, .. }
            | DocuconvertError::Validation { message, .. }
            | DocuconvertError::Serialization { message, .. } => message.clone(),
            DocuconvertError::UnsupportedFormat(detail) | DocuconvertError::Other(detail) => detail.clone(),
        }
    }
}
