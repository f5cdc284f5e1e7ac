use std::sync::Arc;

use diseasenet_core::models::report::ReportFormat;
use diseasenet_model::DiagnosisEngine;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The engine is immutable after startup, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<DiagnosisEngine>,
    pub default_format: ReportFormat,
}

impl AppState {
    pub fn new(engine: Arc<DiagnosisEngine>, default_format: ReportFormat) -> Self {
        Self {
            engine,
            default_format,
        }
    }
}
