use std::net::SocketAddr;

use api_gateway::{routes, state::AppState};
use common::config::AppConfig;
use common::telemetry::{init_telemetry, shutdown_telemetry, TelemetryConfig};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = AppConfig::from_env()?;
    init_telemetry(TelemetryConfig::from_app_config("api-gateway", &config))?;

    tracing::info!("Starting api-gateway with {:?} repository", config.repository);

    let state = AppState::from_config(&config).await?;
    let app = routes::build_router(state).layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Api gateway listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        e
    })?;

    shutdown_telemetry();

    Ok(())
}
