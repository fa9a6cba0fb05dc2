use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}

pub async fn handle() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Hello API".to_string(),
    })
}
