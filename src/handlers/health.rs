use axum::Json;
use serde_json::{json, Value};

/// `GET /health`: liveness probe, never touches the database
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "product-api"
    }))
}
