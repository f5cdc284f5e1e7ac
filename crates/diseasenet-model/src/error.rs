use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported model artifact version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("model has no class labels")]
    NoClasses,

    #[error("duplicate class label: {0}")]
    DuplicateClass(String),

    #[error("feature count mismatch: model expects {model}, symptom index has {index}")]
    FeatureCount { model: usize, index: usize },

    #[error("feature {position} is '{found}' in the model but '{expected}' in the symptom index")]
    FeatureOrder {
        position: usize,
        expected: String,
        found: String,
    },

    #[error("class count mismatch: model emits {model} classes, label table has {labels}")]
    ClassCount { model: usize, labels: usize },

    #[error("invalid classifier: {0}")]
    InvalidClassifier(String),
}
