use serde::{Deserialize, Serialize};

/// Caller-supplied patient details. Free-form and carried through to the
/// report unchanged; nothing here is validated for medical correctness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientContext {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
}
