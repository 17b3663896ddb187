//! HTTP layer
//!
//! Axum router with:
//! - Permissive CORS (the API serves arbitrary frontends)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{build_router, run_server, AppState};
