//! diseasenet-server
//!
//! HTTP surface over the diagnosis engine and report synthesizer. The
//! binary in `main.rs` loads configuration and the model, then serves
//! [`app`].

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/symptoms", get(routes::symptoms::list_symptoms))
        .route("/predict", post(routes::predict::predict))
        .route("/report", post(routes::report::build_report))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
