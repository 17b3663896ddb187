//! Usuario endpoints

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::db::repos::{Usuario, UsuarioRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ValidId, ValidJson};
use crate::http::server::AppState;

/// Create/update usuario request
#[derive(Deserialize)]
pub struct UsuarioRequest {
    pub nombre: String,
    pub email: String,
}

/// Usuario response
#[derive(Serialize)]
pub struct UsuarioResponse {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

impl From<Usuario> for UsuarioResponse {
    fn from(u: Usuario) -> Self {
        Self {
            id: u.id,
            nombre: u.nombre,
            email: u.email,
        }
    }
}

/// GET /api/usuarios/ - list all usuarios
async fn list_usuarios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UsuarioResponse>>, ApiError> {
    let usuarios = UsuarioRepo::new(&state.pool).list().await?;
    Ok(Json(usuarios.into_iter().map(UsuarioResponse::from).collect()))
}

/// GET /api/usuarios/{id} - get a single usuario
async fn get_usuario(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<UsuarioResponse>, ApiError> {
    let usuario = UsuarioRepo::new(&state.pool).get(id).await?;
    Ok(Json(usuario.into()))
}

/// POST /api/usuarios/ - create a usuario
async fn create_usuario(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<UsuarioRequest>,
) -> Result<(StatusCode, Json<UsuarioResponse>), ApiError> {
    let usuario = UsuarioRepo::new(&state.pool)
        .create(&req.nombre, &req.email)
        .await?;
    Ok((StatusCode::CREATED, Json(usuario.into())))
}

/// PUT /api/usuarios/{id} - update a usuario
async fn update_usuario(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    ValidJson(req): ValidJson<UsuarioRequest>,
) -> Result<Json<UsuarioResponse>, ApiError> {
    let usuario = UsuarioRepo::new(&state.pool)
        .update(id, &req.nombre, &req.email)
        .await?;
    Ok(Json(usuario.into()))
}

/// DELETE /api/usuarios/{id} - delete a usuario
async fn delete_usuario(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<Value>, ApiError> {
    UsuarioRepo::new(&state.pool).delete(id).await?;
    Ok(Json(json!({ "mensaje": "Usuario eliminado correctamente" })))
}

/// Usuario routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/usuarios/", get(list_usuarios).post(create_usuario))
        .route(
            "/api/usuarios/{id}",
            get(get_usuario).put(update_usuario).delete(delete_usuario),
        )
}
