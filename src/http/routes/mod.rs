//! Route handlers organized by resource

pub mod canciones;
pub mod favoritos;
pub mod health;
pub mod usuarios;
