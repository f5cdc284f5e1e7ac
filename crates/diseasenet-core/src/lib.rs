//! diseasenet-core
//!
//! Pure domain types for the DiseaseNet pipeline.
//! No model, template, or HTTP dependency: this is the shared vocabulary
//! of the catalog, model, export, and server crates.

pub mod error;
pub mod models;
