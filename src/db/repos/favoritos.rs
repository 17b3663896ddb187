//! Favorito repository
//!
//! Creation validates, in order: the usuario exists, the cancion exists,
//! the (usuario, cancion) pair is not already present. All three checks
//! and the insert share one transaction.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Favorito record from database: raw join row, not denormalized.
#[derive(Debug, Clone, FromRow)]
pub struct Favorito {
    pub id: i64,
    pub usuario_id: i64,
    pub cancion_id: i64,
}

/// Favorito repository
pub struct FavoritoRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FavoritoRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all favoritos in insertion order.
    pub async fn list(&self) -> Result<Vec<Favorito>, DbError> {
        let favoritos =
            sqlx::query_as("SELECT id, usuario_id, cancion_id FROM favorito ORDER BY id")
                .fetch_all(self.pool)
                .await?;
        Ok(favoritos)
    }

    /// List the favoritos of one usuario, verifying the usuario exists.
    pub async fn list_for_usuario(&self, usuario_id: i64) -> Result<Vec<Favorito>, DbError> {
        let (usuario_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM usuario WHERE id = ?)")
                .bind(usuario_id)
                .fetch_one(self.pool)
                .await?;
        if !usuario_exists {
            return Err(DbError::NotFound("Usuario no encontrado"));
        }

        let favoritos = sqlx::query_as(
            "SELECT id, usuario_id, cancion_id FROM favorito WHERE usuario_id = ? ORDER BY id",
        )
        .bind(usuario_id)
        .fetch_all(self.pool)
        .await?;
        Ok(favoritos)
    }

    /// Create a favorito after the ordered existence and uniqueness checks.
    pub async fn create(&self, usuario_id: i64, cancion_id: i64) -> Result<Favorito, DbError> {
        let mut tx = self.pool.begin().await?;

        let (usuario_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM usuario WHERE id = ?)")
                .bind(usuario_id)
                .fetch_one(&mut *tx)
                .await?;
        if !usuario_exists {
            return Err(DbError::NotFound("Usuario no encontrado"));
        }

        let (cancion_exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cancion WHERE id = ?)")
                .bind(cancion_id)
                .fetch_one(&mut *tx)
                .await?;
        if !cancion_exists {
            return Err(DbError::NotFound("Canción no encontrada"));
        }

        let (pair_exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM favorito WHERE usuario_id = ? AND cancion_id = ?)",
        )
        .bind(usuario_id)
        .bind(cancion_id)
        .fetch_one(&mut *tx)
        .await?;
        if pair_exists {
            return Err(DbError::Conflict("Esta canción ya está en favoritos"));
        }

        let favorito = sqlx::query_as(
            r#"
            INSERT INTO favorito (usuario_id, cancion_id)
            VALUES (?, ?)
            RETURNING id, usuario_id, cancion_id
            "#,
        )
        .bind(usuario_id)
        .bind(cancion_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(favorito)
    }

    /// Delete a favorito by its own id (not by the pair).
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM favorito WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Favorito no encontrado"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::{CancionRepo, UsuarioRepo};
    use crate::db::test_util::memory_pool;

    async fn seed_usuario_y_cancion(pool: &SqlitePool) -> (i64, i64) {
        let usuario = UsuarioRepo::new(pool)
            .create("Ana", "ana@x.com")
            .await
            .expect("usuario");
        let cancion = CancionRepo::new(pool)
            .create("T", "A", Some(180))
            .await
            .expect("cancion");
        (usuario.id, cancion.id)
    }

    #[tokio::test]
    async fn create_requires_usuario_first() {
        let pool = memory_pool().await;
        let repo = FavoritoRepo::new(&pool);

        // Neither exists: the usuario check fires first
        let err = repo.create(1, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound("Usuario no encontrado")));
    }

    #[tokio::test]
    async fn create_requires_cancion_second() {
        let pool = memory_pool().await;
        UsuarioRepo::new(&pool)
            .create("Ana", "ana@x.com")
            .await
            .expect("usuario");

        let err = FavoritoRepo::new(&pool).create(1, 1).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound("Canción no encontrada")));
    }

    #[tokio::test]
    async fn duplicate_pair_is_conflict() {
        let pool = memory_pool().await;
        let (usuario_id, cancion_id) = seed_usuario_y_cancion(&pool).await;
        let repo = FavoritoRepo::new(&pool);

        repo.create(usuario_id, cancion_id).await.expect("first");
        let err = repo.create(usuario_id, cancion_id).await.unwrap_err();
        assert!(matches!(err, DbError::Conflict(_)));

        // Exactly one matching row remains
        let favoritos = repo.list().await.expect("list");
        assert_eq!(favoritos.len(), 1);
    }

    #[tokio::test]
    async fn list_for_usuario_checks_existence() {
        let pool = memory_pool().await;
        let repo = FavoritoRepo::new(&pool);

        let err = repo.list_for_usuario(99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound("Usuario no encontrado")));
    }

    #[tokio::test]
    async fn list_for_usuario_empty_is_ok() {
        let pool = memory_pool().await;
        let (usuario_id, _) = seed_usuario_y_cancion(&pool).await;

        let favoritos = FavoritoRepo::new(&pool)
            .list_for_usuario(usuario_id)
            .await
            .expect("list");
        assert!(favoritos.is_empty());
    }

    #[tokio::test]
    async fn deleting_usuario_leaves_favoritos() {
        let pool = memory_pool().await;
        let (usuario_id, cancion_id) = seed_usuario_y_cancion(&pool).await;
        let repo = FavoritoRepo::new(&pool);

        repo.create(usuario_id, cancion_id).await.expect("create");
        UsuarioRepo::new(&pool)
            .delete(usuario_id)
            .await
            .expect("delete usuario");

        // No cascade: the raw join row is still queryable
        let favoritos = repo.list().await.expect("list");
        assert_eq!(favoritos.len(), 1);
        assert_eq!(favoritos[0].usuario_id, usuario_id);
    }

    #[tokio::test]
    async fn deleting_cancion_leaves_favoritos() {
        let pool = memory_pool().await;
        let (usuario_id, cancion_id) = seed_usuario_y_cancion(&pool).await;
        let repo = FavoritoRepo::new(&pool);

        repo.create(usuario_id, cancion_id).await.expect("create");
        CancionRepo::new(&pool)
            .delete(cancion_id)
            .await
            .expect("delete cancion");

        let favoritos = repo.list().await.expect("list");
        assert_eq!(favoritos.len(), 1);
        assert_eq!(favoritos[0].cancion_id, cancion_id);
    }

    #[tokio::test]
    async fn delete_by_id() {
        let pool = memory_pool().await;
        let (usuario_id, cancion_id) = seed_usuario_y_cancion(&pool).await;
        let repo = FavoritoRepo::new(&pool);

        let favorito = repo.create(usuario_id, cancion_id).await.expect("create");
        repo.delete(favorito.id).await.expect("delete");

        assert!(matches!(
            repo.delete(favorito.id).await,
            Err(DbError::NotFound("Favorito no encontrado"))
        ));
    }
}
