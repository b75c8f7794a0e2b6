use std::process::ExitCode;
use std::sync::Arc;

use sighting_extractor::config::{AppConfig, ConfigError};
use sighting_extractor::extract::{Extractor, ExtractorConfig};
use sighting_extractor::ingest::{JsonLinesSink, SinkError};
use sighting_extractor::reference::{ReferenceData, ReferenceDataError};
use sighting_extractor::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Anything that stops the server from starting.
#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    ReferenceData(#[from] ReferenceDataError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    let extractor_config = match &config.extractor_config_path {
        Some(path) => ExtractorConfig::load(path)?,
        None => ExtractorConfig::default(),
    };

    // Load reference data once; it is read-only from here on.
    let reference = ReferenceData::load(&config.reference_data_path)?;
    info!(
        lines = reference.line_count(),
        stations = reference.station_count(),
        path = %config.reference_data_path.display(),
        "loaded reference data"
    );

    let extractor = Extractor::new(Arc::new(reference), extractor_config);
    let sink = JsonLinesSink::open(&config.reports_path)?;
    info!(path = %sink.path().display(), "storing reports");

    let state = AppState::new(extractor, Arc::new(sink));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("sighting extractor listening on http://{}", config.bind_addr);
    info!("  GET  /health    - Health check");
    info!("  POST /extract   - Extract without storing");
    info!("  POST /messages  - Extract and store a chat message");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
    }
}
