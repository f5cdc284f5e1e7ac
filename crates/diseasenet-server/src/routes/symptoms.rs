use axum::Json;
use axum::extract::State;

use diseasenet_catalog::symptoms::SymptomEntry;

use crate::state::AppState;

/// Every known symptom with its display label, in feature order.
pub async fn list_symptoms(State(state): State<AppState>) -> Json<Vec<SymptomEntry>> {
    Json(state.engine.symptoms().entries())
}
