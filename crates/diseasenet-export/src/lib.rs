//! diseasenet-export
//!
//! Report synthesis: a [`ReportDocument`](diseasenet_core::models::report::ReportDocument)
//! is rendered through a Tera template into a small line-oriented markup,
//! which the DOCX and PDF backends turn into a downloadable document.

pub mod docx;
pub mod error;
pub mod markup;
pub mod pdf;
pub mod render;
pub mod report;
pub mod styles;

pub use report::{ReportArtifact, ReportSynthesizer};
