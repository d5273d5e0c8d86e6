use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// Response for the root endpoint
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub status: &'static str,
}

/// Service name and version
///
/// GET /
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "Agent Flows API",
        version: env!("CARGO_PKG_VERSION"),
        status: "running",
    })
}

/// Response for the health endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

/// Returns the request body unchanged
///
/// POST /echo
pub async fn echo(Json(body): Json<Value>) -> Json<Value> {
    Json(body)
}
