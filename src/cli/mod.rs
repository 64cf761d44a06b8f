//! Command-line interface.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::adapters::cache::build_backend;
use crate::adapters::sqlite::{initialize_database, PoolConfig, SqliteProductRepository};
use crate::domain::models::Config;
use crate::domain::ports::CacheBackend;
use crate::services::{ProductCache, ProductService};

/// Lookup service wired to the configured store and cache.
pub type AppProductService = ProductService<SqliteProductRepository, dyn CacheBackend>;

/// Open the durable store and bring its schema up to date.
pub async fn open_store(config: &Config) -> Result<SqlitePool> {
    initialize_database(&config.database.url(), Some(PoolConfig::from(&config.database)))
        .await
        .with_context(|| format!("Failed to open database at {}", config.database.path))
}

/// Build the cache backend and the lookup service over `pool`.
pub fn build_product_service(config: &Config, pool: SqlitePool) -> Result<Arc<AppProductService>> {
    let repository = Arc::new(SqliteProductRepository::new(pool));
    let backend = build_backend(&config.cache).context("Invalid cache backend configuration")?;

    tracing::info!(backend = backend.name(), ttl_secs = config.cache.ttl_secs, "cache backend ready");

    let service = ProductService::new(repository, ProductCache::new(backend)).with_ttl(config.cache.ttl());
    Ok(Arc::new(service))
}

/// Report a failed command and exit non-zero.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({ "error": format!("{err:#}") });
        eprintln!("{body}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1)
}
