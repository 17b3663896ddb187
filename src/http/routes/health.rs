//! Root info and health check endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// API info returned from the root endpoint
#[derive(Serialize)]
pub struct ApiInfo {
    pub nombre: &'static str,
    pub descripcion: &'static str,
    pub version: &'static str,
}

/// GET /
async fn root() -> Json<ApiInfo> {
    Json(ApiInfo {
        nombre: "API de Música",
        descripcion: "API RESTful para gestionar usuarios, canciones y favoritos",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Root and health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(root)).route("/health", get(health))
}
