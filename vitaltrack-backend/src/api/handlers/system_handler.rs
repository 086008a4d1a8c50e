// src/api/handlers/system_handler.rs
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const API_VERSION: &str = "1.0.0";

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerInfoResponse {
    pub message: String,
    pub version: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

pub async fn root_handler() -> Json<ServerInfoResponse> {
    Json(ServerInfoResponse {
        message: "VitalTrack API Server".to_string(),
        version: API_VERSION.to_string(),
        status: "running".to_string(),
    })
}

pub async fn health_check_handler() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "OK".to_string(),
        timestamp: Utc::now(),
    })
}

pub fn system_router() -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_check_handler))
}
