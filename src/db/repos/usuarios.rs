//! Usuario repository
//!
//! Email uniqueness is enforced with an existence query before insert,
//! inside the same transaction as the write.

use sqlx::{FromRow, SqlitePool};

use super::DbError;

/// Usuario record from database
#[derive(Debug, Clone, FromRow)]
pub struct Usuario {
    pub id: i64,
    pub nombre: String,
    pub email: String,
}

/// Usuario repository
pub struct UsuarioRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UsuarioRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all usuarios in insertion order.
    pub async fn list(&self) -> Result<Vec<Usuario>, DbError> {
        let usuarios = sqlx::query_as("SELECT id, nombre, email FROM usuario ORDER BY id")
            .fetch_all(self.pool)
            .await?;
        Ok(usuarios)
    }

    /// Get a single usuario by id.
    pub async fn get(&self, id: i64) -> Result<Usuario, DbError> {
        sqlx::query_as("SELECT id, nombre, email FROM usuario WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or(DbError::NotFound("Usuario no encontrado"))
    }

    /// Create a usuario, rejecting duplicate emails.
    pub async fn create(&self, nombre: &str, email: &str) -> Result<Usuario, DbError> {
        let mut tx = self.pool.begin().await?;

        let (email_taken,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM usuario WHERE email = ?)")
                .bind(email)
                .fetch_one(&mut *tx)
                .await?;
        if email_taken {
            return Err(DbError::Conflict("El email ya está registrado"));
        }

        let usuario = sqlx::query_as(
            "INSERT INTO usuario (nombre, email) VALUES (?, ?) RETURNING id, nombre, email",
        )
        .bind(nombre)
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(usuario)
    }

    /// Overwrite nombre and email of an existing usuario.
    ///
    /// Email uniqueness is only checked on create; an update that collides
    /// with another row's email fails on the column constraint instead.
    pub async fn update(&self, id: i64, nombre: &str, email: &str) -> Result<Usuario, DbError> {
        sqlx::query_as(
            "UPDATE usuario SET nombre = ?, email = ? WHERE id = ? RETURNING id, nombre, email",
        )
        .bind(nombre)
        .bind(email)
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound("Usuario no encontrado"))
    }

    /// Delete a usuario. Dependent favorito rows are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM usuario WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound("Usuario no encontrado"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::memory_pool;

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let pool = memory_pool().await;
        let repo = UsuarioRepo::new(&pool);

        let created = repo.create("Ana", "ana@x.com").await.expect("create");
        assert_eq!(created.id, 1);

        let fetched = repo.get(created.id).await.expect("get");
        assert_eq!(fetched.nombre, "Ana");
        assert_eq!(fetched.email, "ana@x.com");
    }

    #[tokio::test]
    async fn duplicate_email_is_conflict() {
        let pool = memory_pool().await;
        let repo = UsuarioRepo::new(&pool);

        repo.create("Ana", "ana@x.com").await.expect("first create");
        let err = repo.create("Otra", "ana@x.com").await.unwrap_err();
        assert!(matches!(err, DbError::Conflict(_)));

        // No second row was created
        let usuarios = repo.list().await.expect("list");
        assert_eq!(usuarios.len(), 1);
    }

    #[tokio::test]
    async fn absent_id_is_not_found() {
        let pool = memory_pool().await;
        let repo = UsuarioRepo::new(&pool);

        assert!(matches!(repo.get(99).await, Err(DbError::NotFound(_))));
        assert!(matches!(
            repo.update(99, "x", "x@x.com").await,
            Err(DbError::NotFound(_))
        ));
        assert!(matches!(repo.delete(99).await, Err(DbError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_overwrites_both_fields() {
        let pool = memory_pool().await;
        let repo = UsuarioRepo::new(&pool);

        let created = repo.create("Ana", "ana@x.com").await.expect("create");
        let updated = repo
            .update(created.id, "Ana María", "anamaria@x.com")
            .await
            .expect("update");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.nombre, "Ana María");
        assert_eq!(updated.email, "anamaria@x.com");
    }

    #[tokio::test]
    async fn list_is_insertion_ordered() {
        let pool = memory_pool().await;
        let repo = UsuarioRepo::new(&pool);

        repo.create("Ana", "ana@x.com").await.expect("create");
        repo.create("Beto", "beto@x.com").await.expect("create");

        let usuarios = repo.list().await.expect("list");
        let nombres: Vec<_> = usuarios.iter().map(|u| u.nombre.as_str()).collect();
        assert_eq!(nombres, ["Ana", "Beto"]);
    }
}
