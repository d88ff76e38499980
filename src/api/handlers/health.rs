use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::storage::LocalFilesystemStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    pub storage: &'static str,
}

/// GET /health
/// Liveness plus a check that the storage layout is still in place
pub async fn health_handler(
    State(store): State<Arc<LocalFilesystemStore>>,
) -> (StatusCode, Json<HealthResponse>) {
    let ready = store.layout_ready().await;

    let (status, storage, code) = if ready {
        ("healthy", "ready", StatusCode::OK)
    } else {
        ("unhealthy", "missing", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        Json(HealthResponse {
            status,
            service: "hashdrop",
            version: env!("CARGO_PKG_VERSION"),
            timestamp: chrono::Utc::now().to_rfc3339(),
            storage,
        }),
    )
}
