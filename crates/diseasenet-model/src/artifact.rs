//! Persisted model artifact.
//!
//! A single JSON document holding the feature order the model was trained
//! on, the class labels (index-aligned with the classifier output), and the
//! classifier parameters:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "features": ["itching", "skin_rash"],
//!   "classes": ["Fungal infection", "Allergy"],
//!   "classifier": { "type": "linear", "weights": [[1.0, 0.5], [0.0, 0.2]], "intercepts": [0.0, 0.1] }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::classifier::{Classifier, DecisionTree, DiagnosticModel, LinearClassifier, TreeNode};
use crate::error::ModelError;
use crate::labels::ClassLabels;

/// The only artifact layout this build understands.
pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub features: Vec<String>,
    pub classes: Vec<String>,
    pub classifier: ClassifierSpec,
}

/// Classifier parameters as stored on disk, before validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClassifierSpec {
    Linear {
        weights: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    },
    DecisionTree {
        nodes: Vec<TreeNode>,
    },
}

/// A validated artifact, ready to be wired into an engine.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub features: Vec<String>,
    pub labels: ClassLabels,
    pub classifier: Classifier,
}

impl ModelArtifact {
    /// Read and parse an artifact from disk. Validation happens in
    /// [`ModelArtifact::into_model`].
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact = Self::from_slice(&bytes)?;
        info!(
            path = %path.display(),
            features = artifact.features.len(),
            classes = artifact.classes.len(),
            "model artifact read"
        );
        Ok(artifact)
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ModelError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn to_vec(&self) -> Result<Vec<u8>, ModelError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }

    /// Check the artifact's internal consistency and build the classifier.
    pub fn into_model(self) -> Result<LoadedModel, ModelError> {
        if self.format_version != ARTIFACT_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: self.format_version,
                expected: ARTIFACT_VERSION,
            });
        }

        let labels = ClassLabels::new(self.classes)?;

        let classifier = match self.classifier {
            ClassifierSpec::Linear {
                weights,
                intercepts,
            } => Classifier::Linear(LinearClassifier::new(weights, intercepts)?),
            ClassifierSpec::DecisionTree { nodes } => Classifier::DecisionTree(
                DecisionTree::new(nodes, self.features.len(), labels.len())?,
            ),
        };

        if classifier.feature_count() != self.features.len() {
            return Err(ModelError::FeatureCount {
                model: classifier.feature_count(),
                index: self.features.len(),
            });
        }
        if classifier.class_count() != labels.len() {
            return Err(ModelError::ClassCount {
                model: classifier.class_count(),
                labels: labels.len(),
            });
        }

        Ok(LoadedModel {
            features: self.features,
            labels,
            classifier,
        })
    }
}
