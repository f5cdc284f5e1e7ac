use std::fmt;

use serde::{Deserialize, Serialize};

/// Recommendation returned for any disease label without a catalog entry.
pub const FALLBACK_TREATMENT: &str = "Consult a doctor for proper medication.";

/// Position in the class-label table emitted by a diagnostic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassIndex(pub usize);

impl fmt::Display for ClassIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease_label: String,
}

impl PredictionResult {
    pub fn new(disease_label: impl Into<String>) -> Self {
        Self {
            disease_label: disease_label.into(),
        }
    }
}

/// Ordered treatment names for one disease. Strings are kept verbatim,
/// parenthetical notes included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TreatmentRecommendation(Vec<String>);

impl TreatmentRecommendation {
    pub fn new<S: Into<String>>(treatments: impl IntoIterator<Item = S>) -> Self {
        Self(treatments.into_iter().map(Into::into).collect())
    }

    /// The single-entry recommendation used for unmapped diseases.
    pub fn fallback() -> Self {
        Self(vec![FALLBACK_TREATMENT.to_string()])
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.0.as_slice(), [only] if only == FALLBACK_TREATMENT)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Result of a full inference pass: the predicted disease and what to
/// recommend for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub prediction: PredictionResult,
    pub treatment: TreatmentRecommendation,
}
