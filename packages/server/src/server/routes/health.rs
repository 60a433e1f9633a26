use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
}

/// Liveness check endpoint.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// Welcome message at the API root.
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Welcome to AI Assistant" }))
}
