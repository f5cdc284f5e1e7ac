use std::path::Path;

use diseasenet_catalog::{SymptomIndex, TreatmentCatalog};
use diseasenet_core::models::prediction::{Diagnosis, PredictionResult};
use diseasenet_core::models::symptoms::{FeatureVector, SymptomSelection};
use tracing::{debug, info};

use crate::artifact::ModelArtifact;
use crate::classifier::DiagnosticModel;
use crate::error::ModelError;
use crate::labels::ClassLabels;

/// The process-wide, read-only state of the inference pipeline.
///
/// Built once at startup and shared by reference (typically behind an
/// `Arc`) with every request. Nothing in here changes after construction.
pub struct DiagnosisEngine {
    symptoms: SymptomIndex,
    model: Box<dyn DiagnosticModel>,
    labels: ClassLabels,
    treatments: TreatmentCatalog,
}

impl DiagnosisEngine {
    /// Wire the pipeline together, checking that the model's input width
    /// matches the symptom index and its output classes match the label
    /// table.
    pub fn new(
        symptoms: SymptomIndex,
        model: impl DiagnosticModel + 'static,
        labels: ClassLabels,
        treatments: TreatmentCatalog,
    ) -> Result<Self, ModelError> {
        if model.feature_count() != symptoms.len() {
            return Err(ModelError::FeatureCount {
                model: model.feature_count(),
                index: symptoms.len(),
            });
        }
        if model.class_count() != labels.len() {
            return Err(ModelError::ClassCount {
                model: model.class_count(),
                labels: labels.len(),
            });
        }

        let uncatalogued = labels.iter().filter(|l| !treatments.contains(l)).count();
        info!(
            symptoms = symptoms.len(),
            classes = labels.len(),
            treatments = treatments.len(),
            uncatalogued,
            "diagnosis engine ready"
        );

        Ok(Self {
            symptoms,
            model: Box::new(model),
            labels,
            treatments,
        })
    }

    /// Build an engine from a parsed artifact. The artifact's feature list
    /// must match `symptoms` position by position.
    pub fn from_artifact(
        symptoms: SymptomIndex,
        artifact: ModelArtifact,
        treatments: TreatmentCatalog,
    ) -> Result<Self, ModelError> {
        let loaded = artifact.into_model()?;

        if loaded.features.len() != symptoms.len() {
            return Err(ModelError::FeatureCount {
                model: loaded.features.len(),
                index: symptoms.len(),
            });
        }
        if let Some((position, (found, expected))) = loaded
            .features
            .iter()
            .zip(symptoms.ids())
            .enumerate()
            .find(|(_, (found, expected))| found != expected)
        {
            return Err(ModelError::FeatureOrder {
                position,
                expected: expected.clone(),
                found: found.clone(),
            });
        }

        Self::new(symptoms, loaded.classifier, loaded.labels, treatments)
    }

    /// Load the artifact at `path` and pair it with the built-in symptom
    /// index and treatment catalog.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let artifact = ModelArtifact::load(path)?;
        Self::from_artifact(
            SymptomIndex::standard(),
            artifact,
            TreatmentCatalog::standard(),
        )
    }

    /// Known symptom identifiers, in feature order.
    pub fn list_symptoms(&self) -> &[String] {
        self.symptoms.ids()
    }

    pub fn symptoms(&self) -> &SymptomIndex {
        &self.symptoms
    }

    pub fn labels(&self) -> &ClassLabels {
        &self.labels
    }

    pub fn treatments(&self) -> &TreatmentCatalog {
        &self.treatments
    }

    pub fn encode(&self, selection: &SymptomSelection) -> FeatureVector {
        self.symptoms.encode(selection)
    }

    /// encode → predict → resolve.
    pub fn predict(&self, selection: &SymptomSelection) -> PredictionResult {
        let features = self.encode(selection);
        let class = self.model.predict(&features);
        let label = self.labels.resolve(class);
        debug!(
            selected = selection.len(),
            encoded = features.count_set(),
            class = class.0,
            disease = label,
            "prediction"
        );
        PredictionResult::new(label)
    }

    /// The full inference pass: prediction plus treatment lookup.
    pub fn infer(&self, selection: &SymptomSelection) -> Diagnosis {
        let prediction = self.predict(selection);
        let treatment = self.treatments.lookup(&prediction.disease_label);
        if treatment.is_fallback() {
            debug!(disease = %prediction.disease_label, "no catalog entry, using fallback");
        }
        Diagnosis {
            prediction,
            treatment,
        }
    }
}
