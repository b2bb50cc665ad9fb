use axum::response::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// Liveness probe; sits outside the authenticated `/api` tree.
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
