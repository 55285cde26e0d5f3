//! Health API Handlers

use axum::Json;
use serde::Serialize;

use crate::utils::now_rfc3339;

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// GET /api/health - 存活探针
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: now_rfc3339(),
    })
}
