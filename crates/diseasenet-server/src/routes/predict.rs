use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use diseasenet_core::models::patient::PatientContext;
use diseasenet_core::models::prediction::TreatmentRecommendation;
use diseasenet_core::models::symptoms::SymptomSelection;

use crate::state::AppState;

#[derive(Deserialize)]
pub struct PredictRequest {
    #[serde(flatten)]
    pub patient: PatientContext,
    #[serde(default)]
    pub symptoms: SymptomSelection,
}

/// Everything the report step needs, echoed back to the caller.
#[derive(Serialize)]
pub struct PredictResponse {
    pub patient: PatientContext,
    pub symptoms: SymptomSelection,
    pub predicted_disease: String,
    pub treatments: TreatmentRecommendation,
}

pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Json<PredictResponse> {
    let diagnosis = state.engine.infer(&req.symptoms);

    Json(PredictResponse {
        patient: req.patient,
        symptoms: req.symptoms,
        predicted_disease: diagnosis.prediction.disease_label,
        treatments: diagnosis.treatment,
    })
}
