//! Repository implementations for database access
//!
//! Each repository borrows the pool and encapsulates CRUD plus invariant
//! checks for one entity. Check-then-write sequences run inside a single
//! transaction: commit on success, rollback on any error path.

pub mod canciones;
pub mod favoritos;
pub mod usuarios;

pub use canciones::{Cancion, CancionRepo};
pub use favoritos::{Favorito, FavoritoRepo};
pub use usuarios::{Usuario, UsuarioRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Referenced entity does not exist; carries the caller-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    /// Uniqueness violation; carries the caller-facing message.
    #[error("{0}")]
    Conflict(&'static str),
}
