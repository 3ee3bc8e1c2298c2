//! Health check handlers for liveness and readiness probes.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// "ok" or "not_ready: <reason>".
    pub status: String,

    pub service: String,

    pub version: String,

    /// RFC 3339 time the status was produced.
    pub timestamp: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub buildings_loaded: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_loaded: Option<usize>,
}

impl HealthStatus {
    fn base(status: String, service: &str, version: &str) -> Self {
        Self {
            status,
            service: service.to_string(),
            version: version.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            buildings_loaded: None,
            nodes_loaded: None,
        }
    }

    pub fn alive(service: &str, version: &str) -> Self {
        Self::base("ok".to_string(), service, version)
    }

    /// Ready status with the size of the loaded campus.
    pub fn ready(service: &str, version: &str, buildings: usize, nodes: usize) -> Self {
        Self {
            buildings_loaded: Some(buildings),
            nodes_loaded: Some(nodes),
            ..Self::base("ok".to_string(), service, version)
        }
    }

    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self::base(format!("not_ready: {}", reason), service, version)
    }
}

/// Liveness probe handler. Does not look at the dataset.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"campuspaths-service-shared","version":"0.1.0","timestamp":"..."}
/// ```
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler. Ready once the campus has at least one building
/// and one path node.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let map = state.map();
    let buildings = map.buildings().len();
    let nodes = map.graph().node_count();

    if buildings == 0 {
        let status = HealthStatus::not_ready(service, version, "no buildings loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }
    if nodes == 0 {
        let status = HealthStatus::not_ready(service, version, "no paths loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, buildings, nodes);
    (StatusCode::OK, Json(status)).into_response()
}
