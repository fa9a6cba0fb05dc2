use axum::http::StatusCode;
use common::metrics::gather_metrics;
use tracing::error;

/// Prometheus text exposition
pub async fn handle() -> Result<String, (StatusCode, String)> {
    gather_metrics().map_err(|e| {
        error!("Failed to gather metrics: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })
}
