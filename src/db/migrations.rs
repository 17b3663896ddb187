//! Schema creation for the music store
//!
//! Idempotent: tables and indexes are only created if absent. Foreign-key
//! enforcement is left at SQLite's default (off), so deleting a usuario or
//! cancion leaves its favorito rows in place.

use sqlx::SqlitePool;

/// Create all tables if they do not exist.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    tracing::info!("Creating tables if absent...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS usuario (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            nombre TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS cancion (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo TEXT NOT NULL,
            artista TEXT NOT NULL,
            duracion INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS favorito (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            usuario_id INTEGER NOT NULL REFERENCES usuario(id),
            cancion_id INTEGER NOT NULL REFERENCES cancion(id),
            UNIQUE (usuario_id, cancion_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Schema ready");
    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_favorito_usuario ON favorito(usuario_id)")
        .execute(pool)
        .await?;

    Ok(())
}
