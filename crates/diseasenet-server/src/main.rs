use std::sync::Arc;

use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

use diseasenet_model::DiagnosisEngine;
use diseasenet_server::config::ServerConfig;
use diseasenet_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = ServerConfig::from_env()?;

    let engine = DiagnosisEngine::load(&config.model_path).wrap_err_with(|| {
        format!("failed to load model from {}", config.model_path.display())
    })?;

    let state = AppState::new(Arc::new(engine), config.report_format);
    let app = diseasenet_server::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .wrap_err_with(|| format!("failed to bind {}", config.addr))?;
    tracing::info!(
        addr = %config.addr,
        report_format = %config.report_format,
        "listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
