//! musica-api server binary
//!
//! Startup order: env, tracing, config, pool, connection check, schema,
//! serve until Ctrl+C/SIGTERM.

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use musica_api::config::ServerConfig;
use musica_api::db;
use musica_api::http::run_server;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing()?;

    let config = ServerConfig::from_env();
    tracing::info!(database_url = %config.database_url, "Starting musica-api");

    let pool = db::create_pool(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!("Failed to open the database: {}", e))
        .context("database connection failed")?;

    // Connection check, logged either way
    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => tracing::info!("Database connection OK: {}", config.database_url),
        Err(e) => tracing::error!("Database connection check failed: {}", e),
    }

    db::migrations::run(&pool)
        .await
        .inspect_err(|e| tracing::error!("Schema creation failed: {}", e))
        .context("schema creation failed")?;

    run_server(pool, &config).await?;
    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
