//! Favorito endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{Favorito, FavoritoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;

/// Create favorito request
#[derive(Deserialize)]
pub struct FavoritoRequest {
    pub usuario_id: i64,
    pub cancion_id: i64,
}

/// Favorito response: the raw join row
#[derive(Serialize)]
pub struct FavoritoResponse {
    pub id: i64,
    pub usuario_id: i64,
    pub cancion_id: i64,
}

impl From<Favorito> for FavoritoResponse {
    fn from(f: Favorito) -> Self {
        Self {
            id: f.id,
            usuario_id: f.usuario_id,
            cancion_id: f.cancion_id,
        }
    }
}

/// GET /api/favoritos/ - list all favoritos
async fn list_favoritos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FavoritoResponse>>, ApiError> {
    let favoritos = FavoritoRepo::new(&state.pool).list().await?;
    Ok(Json(favoritos.into_iter().map(FavoritoResponse::from).collect()))
}

/// GET /api/favoritos/usuario/{id} - favoritos of one usuario
async fn list_favoritos_usuario(
    State(state): State<Arc<AppState>>,
    ValidId(usuario_id): ValidId,
) -> Result<Json<Vec<FavoritoResponse>>, ApiError> {
    let favoritos = FavoritoRepo::new(&state.pool)
        .list_for_usuario(usuario_id)
        .await?;
    Ok(Json(favoritos.into_iter().map(FavoritoResponse::from).collect()))
}

/// POST /api/favoritos/ - create a favorito
async fn create_favorito(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<FavoritoRequest>,
) -> Result<(StatusCode, Json<FavoritoResponse>), ApiError> {
    let favorito = FavoritoRepo::new(&state.pool)
        .create(req.usuario_id, req.cancion_id)
        .await?;
    Ok((StatusCode::CREATED, Json(favorito.into())))
}

/// DELETE /api/favoritos/{id} - delete a favorito by its own id
async fn delete_favorito(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Value>, ApiError> {
    FavoritoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "mensaje": "Favorito eliminado correctamente" })))
}

/// Favorito routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/favoritos/", get(list_favoritos).post(create_favorito))
        .route("/api/favoritos/usuario/{id}", get(list_favoritos_usuario))
        .route("/api/favoritos/{id}", axum::routing::delete(delete_favorito))
}
