//! Cancion repository
//!
//! No uniqueness constraint: identical titles and artists may coexist.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Cancion record from database
#[derive(Debug, Clone, FromRow)]
pub struct Cancion {
    pub id: i64,
    pub titulo: String,
    pub artista: String,
    /// Duration in seconds, if known.
    pub duracion: Option<i64>,
}

/// Cancion repository
pub struct CancionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CancionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all canciones in insertion order.
    pub async fn list(&self) -> Result<Vec<Cancion>, DbError> {
        let canciones =
            sqlx::query_as("SELECT id, titulo, artista, duracion FROM cancion ORDER BY id")
                .fetch_all(self.pool)
                .await?;
        Ok(canciones)
    }

    /// Get a single cancion by id.
    pub async fn get(&self, id: i64) -> Result<Cancion, DbError> {
        sqlx::query_as("SELECT id, titulo, artista, duracion FROM cancion WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound("Canción no encontrada"))
    }

    /// Create a cancion.
    pub async fn create(
        &self,
        titulo: &str,
        artista: &str,
        duracion: Option<i64>,
    ) -> Result<Cancion, DbError> {
        let cancion = sqlx::query_as(
            r#"
            INSERT INTO cancion (titulo, artista, duracion)
            VALUES (?, ?, ?)
            RETURNING id, titulo, artista, duracion
            "#,
        )
        .bind(titulo)
        .bind(artista)
        .bind(duracion)
        .fetch_one(self.pool)
        .await?;

        Ok(cancion)
    }

    /// Overwrite titulo, artista and duracion of an existing cancion.
    pub async fn update(
        &self,
        id: i64,
        titulo: &str,
        artista: &str,
        duracion: Option<i64>,
    ) -> Result<Cancion, DbError> {
        sqlx::query_as(
            r#"
            UPDATE cancion SET titulo = ?, artista = ?, duracion = ?
            WHERE id = ?
            RETURNING id, titulo, artista, duracion
            "#,
        )
        .bind(titulo)
        .bind(artista)
        .bind(duracion)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound("Canción no encontrada"))
    }

    /// Delete a cancion. Dependent favorito rows are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM cancion WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Canción no encontrada"));
        }
        Ok(())
    }
}
