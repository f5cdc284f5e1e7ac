use std::path::{Path, PathBuf};

use diseasenet_core::models::prediction::ClassIndex;
use diseasenet_core::models::symptoms::FeatureVector;
use diseasenet_model::DiagnosticModel;
use diseasenet_model::artifact::{ARTIFACT_VERSION, ClassifierSpec, ModelArtifact};
use diseasenet_model::classifier::TreeNode;
use diseasenet_model::error::ModelError;

fn linear_artifact() -> ModelArtifact {
    ModelArtifact {
        format_version: ARTIFACT_VERSION,
        features: vec!["itching".to_string(), "cough".to_string()],
        classes: vec!["Fungal infection".to_string(), "Common Cold".to_string()],
        classifier: ClassifierSpec::Linear {
            weights: vec![vec![1.0, 0.0], vec![0.0, 1.0]],
            intercepts: vec![0.0, 0.0],
        },
    }
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn load_parses_and_validates_linear_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "model.json", &linear_artifact().to_vec().unwrap());

    let loaded = ModelArtifact::load(&path).unwrap().into_model().unwrap();
    assert_eq!(loaded.features, vec!["itching", "cough"]);
    assert_eq!(loaded.labels.resolve(ClassIndex(1)), "Common Cold");
    assert_eq!(loaded.classifier.class_count(), 2);
    assert_eq!(
        loaded.classifier.predict(&FeatureVector::with_positions(2, [1])),
        ClassIndex(1)
    );
}

#[test]
fn decision_tree_artifact_from_json() {
    let json = br#"{
        "format_version": 1,
        "features": ["a", "b"],
        "classes": ["X", "Y"],
        "classifier": {
            "type": "decision_tree",
            "nodes": [
                {"kind": "split", "feature": 1, "threshold": 0.5, "left": 1, "right": 2},
                {"kind": "leaf", "class": 0},
                {"kind": "leaf", "class": 1}
            ]
        }
    }"#;

    let artifact = ModelArtifact::from_slice(json).unwrap();
    assert!(matches!(
        &artifact.classifier,
        ClassifierSpec::DecisionTree { nodes } if nodes[1] == TreeNode::Leaf { class: 0 }
    ));

    let loaded = artifact.into_model().unwrap();
    assert_eq!(
        loaded.classifier.predict(&FeatureVector::with_positions(2, [1])),
        ClassIndex(1)
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ModelArtifact::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ModelError::Io { .. }));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "model.json", b"{\"format_version\": 1, ");
    let err = ModelArtifact::load(&path).unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}

#[test]
fn unknown_version_is_rejected() {
    let mut artifact = linear_artifact();
    artifact.format_version = 7;
    let err = artifact.into_model().unwrap_err();
    assert!(matches!(err, ModelError::UnsupportedVersion { found: 7, expected: 1 }));
}

#[test]
fn weight_width_must_match_feature_list() {
    let mut artifact = linear_artifact();
    artifact.features.push("chills".to_string());
    let err = artifact.into_model().unwrap_err();
    assert!(matches!(err, ModelError::FeatureCount { model: 2, index: 3 }));
}

#[test]
fn class_rows_must_match_label_table() {
    let mut artifact = linear_artifact();
    artifact.classes.push("Allergy".to_string());
    let err = artifact.into_model().unwrap_err();
    assert!(matches!(err, ModelError::ClassCount { model: 2, labels: 3 }));
}

#[test]
fn labels_must_be_unique_and_present() {
    let mut artifact = linear_artifact();
    artifact.classes = vec!["Same".to_string(), "Same".to_string()];
    assert!(matches!(
        artifact.into_model().unwrap_err(),
        ModelError::DuplicateClass(label) if label == "Same"
    ));

    let mut artifact = linear_artifact();
    artifact.classes.clear();
    assert!(matches!(artifact.into_model().unwrap_err(), ModelError::NoClasses));
}
