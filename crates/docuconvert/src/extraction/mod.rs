//! Format-specific text extraction.
//!
//! Each submodule turns one format's bytes into text and reports problems as
//! [`DocuconvertError`](crate::DocuconvertError). Turning those errors into per-document
//! failures is the job of [`crate::extractors`].

pub mod docx;
pub mod excel;
pub mod html;
pub(crate) mod ooxml;
pub mod pdf;
pub mod pptx;
