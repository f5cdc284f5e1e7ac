use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate symptom identifier: {0}")]
    DuplicateSymptom(String),

    #[error("empty symptom identifier at position {position}")]
    EmptySymptom { position: usize },

    #[error("duplicate catalog entry for disease: {0}")]
    DuplicateDisease(String),

    #[error("catalog entry for '{0}' has no treatments")]
    EmptyTreatments(String),
}
