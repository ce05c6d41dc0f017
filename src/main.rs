//! Server binary for the Price Point Engine.
//!
//! Reads settings from the environment, initializes tracing, and serves
//! the API router.

use tracing::info;
use tracing_subscriber::EnvFilter;

use price_point_engine::api::{AppState, create_router};
use price_point_engine::config::Settings;
use price_point_engine::error::{EngineError, EngineResult};

#[tokio::main]
async fn main() -> EngineResult<()> {
    let settings = Settings::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let addr = format!("0.0.0.0:{}", settings.port);
    info!(
        environment = %settings.environment,
        %addr,
        cors_origin = %settings.cors_origin,
        "Starting price point engine"
    );

    let app = create_router(AppState::new(settings));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| EngineError::Server {
            message: format!("failed to bind {addr}: {e}"),
        })?;

    axum::serve(listener, app)
        .await
        .map_err(|e| EngineError::Server {
            message: format!("server error: {e}"),
        })?;

    Ok(())
}
