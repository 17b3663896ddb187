//! musica-api: HTTP backend for usuarios, canciones and favoritos
//!
//! CRUD over a SQLite store with three resources:
//! - `/api/usuarios` - users (unique email)
//! - `/api/canciones` - songs
//! - `/api/favoritos` - the user/song favorites join

pub mod config;
pub mod db;
pub mod http;

pub use config::ServerConfig;
pub use http::{build_router, run_server, AppState};
