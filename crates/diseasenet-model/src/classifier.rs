use diseasenet_core::models::prediction::ClassIndex;
use diseasenet_core::models::symptoms::FeatureVector;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A pre-trained classifier: feature vector in, class index out.
///
/// Implementations are read-only after construction and shared across
/// requests, hence `Send + Sync`.
pub trait DiagnosticModel: Send + Sync {
    /// Number of positions every input vector must have.
    fn feature_count(&self) -> usize;

    /// Number of classes the model can emit. Every returned index is below
    /// this value.
    fn class_count(&self) -> usize;

    /// Pick a class for `features`.
    ///
    /// # Panics
    ///
    /// Panics if `features.len() != self.feature_count()`. The encoder
    /// always produces vectors of the index length, so a mismatch is a bug
    /// in the caller.
    fn predict(&self, features: &FeatureVector) -> ClassIndex;
}

/// Fail fast on a feature vector of the wrong width.
pub fn assert_feature_shape(expected: usize, features: &FeatureVector) {
    assert_eq!(
        features.len(),
        expected,
        "feature vector has {} positions, model expects {expected}",
        features.len()
    );
}

/// One score per class, `intercept + Σ weight · feature`; the highest
/// score wins and ties go to the lowest class index.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearClassifier {
    /// `weights` has one row per class, each row one weight per feature.
    pub fn new(weights: Vec<Vec<f64>>, intercepts: Vec<f64>) -> Result<Self, ModelError> {
        let Some(first) = weights.first() else {
            return Err(ModelError::InvalidClassifier(
                "linear classifier has no weight rows".to_string(),
            ));
        };
        let width = first.len();
        if width == 0 {
            return Err(ModelError::InvalidClassifier(
                "linear classifier has zero-width weight rows".to_string(),
            ));
        }
        if intercepts.len() != weights.len() {
            return Err(ModelError::InvalidClassifier(format!(
                "{} intercepts for {} weight rows",
                intercepts.len(),
                weights.len()
            )));
        }
        for (class, row) in weights.iter().enumerate() {
            if row.len() != width {
                return Err(ModelError::InvalidClassifier(format!(
                    "weight row {class} has {} entries, expected {width}",
                    row.len()
                )));
            }
            if row.iter().any(|w| !w.is_finite()) {
                return Err(ModelError::InvalidClassifier(format!(
                    "weight row {class} contains a non-finite value"
                )));
            }
        }
        if intercepts.iter().any(|b| !b.is_finite()) {
            return Err(ModelError::InvalidClassifier(
                "intercepts contain a non-finite value".to_string(),
            ));
        }

        Ok(Self {
            weights,
            intercepts,
        })
    }

    pub fn scores(&self, features: &FeatureVector) -> Vec<f64> {
        assert_feature_shape(self.feature_count(), features);
        self.weights
            .iter()
            .zip(&self.intercepts)
            .map(|(row, intercept)| {
                row.iter()
                    .zip(features.as_slice())
                    .map(|(w, &x)| w * f64::from(x))
                    .sum::<f64>()
                    + intercept
            })
            .collect()
    }
}

impl DiagnosticModel for LinearClassifier {
    fn feature_count(&self) -> usize {
        self.weights[0].len()
    }

    fn class_count(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &FeatureVector) -> ClassIndex {
        let mut best = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (class, score) in self.scores(features).into_iter().enumerate() {
            if score > best_score {
                best = class;
                best_score = score;
            }
        }
        ClassIndex(best)
    }
}

/// A node of a binary decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Go to `left` when `features[feature] <= threshold`, else `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        class: usize,
    },
}

/// Decision tree stored as a flat node list with node 0 as the root.
///
/// Children always sit after their parent in the list, so every walk ends
/// at a leaf.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    nodes: Vec<TreeNode>,
    feature_count: usize,
    class_count: usize,
}

impl DecisionTree {
    pub fn new(
        nodes: Vec<TreeNode>,
        feature_count: usize,
        class_count: usize,
    ) -> Result<Self, ModelError> {
        if nodes.is_empty() {
            return Err(ModelError::InvalidClassifier(
                "decision tree has no nodes".to_string(),
            ));
        }

        for (i, node) in nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= feature_count {
                        return Err(ModelError::InvalidClassifier(format!(
                            "node {i} splits on feature {feature}, model has {feature_count}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(ModelError::InvalidClassifier(format!(
                            "node {i} has a non-finite threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= i || child >= nodes.len() {
                            return Err(ModelError::InvalidClassifier(format!(
                                "node {i} points to node {child}; children must follow their parent \
                                 and exist ({} nodes)",
                                nodes.len()
                            )));
                        }
                    }
                }
                TreeNode::Leaf { class } => {
                    if class >= class_count {
                        return Err(ModelError::InvalidClassifier(format!(
                            "leaf {i} emits class {class}, model has {class_count}"
                        )));
                    }
                }
            }
        }

        Ok(Self {
            nodes,
            feature_count,
            class_count,
        })
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }
}

impl DiagnosticModel for DecisionTree {
    fn feature_count(&self) -> usize {
        self.feature_count
    }

    fn class_count(&self) -> usize {
        self.class_count
    }

    fn predict(&self, features: &FeatureVector) -> ClassIndex {
        assert_feature_shape(self.feature_count, features);
        let bits = features.as_slice();
        let mut i = 0;
        loop {
            match self.nodes[i] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    i = if f64::from(bits[feature]) <= threshold {
                        left
                    } else {
                        right
                    };
                }
                TreeNode::Leaf { class } => return ClassIndex(class),
            }
        }
    }
}

/// Any classifier family that can be loaded from an artifact.
#[derive(Debug, Clone)]
pub enum Classifier {
    Linear(LinearClassifier),
    DecisionTree(DecisionTree),
}

impl DiagnosticModel for Classifier {
    fn feature_count(&self) -> usize {
        match self {
            Classifier::Linear(m) => m.feature_count(),
            Classifier::DecisionTree(m) => m.feature_count(),
        }
    }

    fn class_count(&self) -> usize {
        match self {
            Classifier::Linear(m) => m.class_count(),
            Classifier::DecisionTree(m) => m.class_count(),
        }
    }

    fn predict(&self, features: &FeatureVector) -> ClassIndex {
        match self {
            Classifier::Linear(m) => m.predict(features),
            Classifier::DecisionTree(m) => m.predict(features),
        }
    }
}
