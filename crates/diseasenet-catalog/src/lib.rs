//! diseasenet-catalog
//!
//! Static lookup tables for the diagnosis pipeline. Pure data, no model or
//! I/O dependency: the canonical symptom index (which fixes feature-vector
//! positions) and the disease → treatment catalog.

pub mod error;
pub mod symptoms;
pub mod treatments;

pub use symptoms::SymptomIndex;
pub use treatments::TreatmentCatalog;
