//! diseasenet-model
//!
//! Loads the persisted classifier and runs the inference half of the
//! pipeline: encode → predict → resolve → treatment lookup.
//!
//! The classifier sits behind the [`DiagnosticModel`] trait, so the
//! concrete model family is swappable. Two families can be loaded from a
//! JSON artifact (see [`artifact::ModelArtifact`]): a linear scorer and a
//! decision tree.

pub mod artifact;
pub mod classifier;
pub mod engine;
pub mod error;
pub mod labels;

pub use classifier::DiagnosticModel;
pub use engine::DiagnosisEngine;
