//! Cancion endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{Cancion, CancionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;

/// Create/update cancion request
#[derive(Deserialize)]
pub struct CancionRequest {
    pub titulo: String,
    pub artista: String,
    /// Duration in seconds, optional.
    #[serde(default)]
    pub duracion: Option<i64>,
}

/// Cancion response
#[derive(Serialize)]
pub struct CancionResponse {
    pub id: i64,
    pub titulo: String,
    pub artista: String,
    pub duracion: Option<i64>,
}

impl From<Cancion> for CancionResponse {
    fn from(c: Cancion) -> Self {
        Self {
            id: c.id,
            titulo: c.titulo,
            artista: c.artista,
            duracion: c.duracion,
        }
    }
}

/// GET /api/canciones/ - list all canciones
async fn list_canciones(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CancionResponse>>, ApiError> {
    let canciones = CancionRepo::new(&state.pool).list().await?;
    Ok(Json(canciones.into_iter().map(CancionResponse::from).collect()))
}

/// GET /api/canciones/{id} - get a single cancion
async fn get_cancion(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<CancionResponse>, ApiError> {
    let cancion = CancionRepo::new(&state.pool).get(id).await?;
    Ok(Json(cancion.into()))
}

/// POST /api/canciones/ - create a cancion
async fn create_cancion(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CancionRequest>,
) -> Result<(StatusCode, Json<CancionResponse>), ApiError> {
    let cancion = CancionRepo::new(&state.pool)
        .create(&req.titulo, &req.artista, req.duracion)
        .await?;
    Ok((StatusCode::CREATED, Json(cancion.into())))
}

/// PUT /api/canciones/{id} - update a cancion
async fn update_cancion(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<CancionRequest>,
) -> Result<Json<CancionResponse>, ApiError> {
    let cancion = CancionRepo::new(&state.pool)
        .update(id, &req.titulo, &req.artista, req.duracion)
        .await?;
    Ok(Json(cancion.into()))
}

/// DELETE /api/canciones/{id} - delete a cancion
async fn delete_cancion(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Value>, ApiError> {
    CancionRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "mensaje": "Canción eliminada correctamente" })))
}

/// Cancion routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/canciones/", get(list_canciones).post(create_cancion))
        .route(
            "/api/canciones/{id}",
            get(get_cancion).put(update_cancion).delete(delete_cancion),
        )
}
