use axum::Json;
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use diseasenet_core::models::patient::PatientContext;
use diseasenet_core::models::prediction::{PredictionResult, TreatmentRecommendation};
use diseasenet_core::models::report::ReportFormat;
use diseasenet_core::models::symptoms::SymptomSelection;
use diseasenet_export::ReportSynthesizer;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub patient: PatientContext,
    #[serde(default)]
    pub symptoms: SymptomSelection,
    pub predicted_disease: String,
    pub treatments: Vec<String>,
    pub format: Option<ReportFormat>,
}

/// Synthesize a report and return it as a download.
pub async fn build_report(
    State(state): State<AppState>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, ApiError> {
    let format = req.format.unwrap_or(state.default_format);

    // Document encoding is CPU-bound.
    let artifact = tokio::task::spawn_blocking(move || {
        ReportSynthesizer::new(format).build_report(
            &req.patient,
            &req.symptoms,
            &PredictionResult::new(req.predicted_disease),
            &TreatmentRecommendation::new(req.treatments),
        )
    })
    .await??;

    Ok((
        [
            (header::CONTENT_TYPE, artifact.content_type.to_string()),
            (header::CONTENT_DISPOSITION, artifact.disposition),
        ],
        artifact.bytes,
    )
        .into_response())
}
