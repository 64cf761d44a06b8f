//! Product Cache - read-through cache-aside product lookups
//!
//! A request for a product by id consults the cache first, falls back to the
//! durable store on a miss and repopulates the cache with a time-bounded
//! entry.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Product model, errors and port traits
//! - **Service Layer** (`services`): Cache-aside lookup, cache codec, seeding
//! - **Adapters** (`adapters`): SQLite store, Redis/moka caches, HTTP server
//! - **Infrastructure Layer** (`infrastructure`): Configuration and logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use product_cache::adapters::cache::MemoryCacheBackend;
//! use product_cache::adapters::sqlite::{create_migrated_test_pool, SqliteProductRepository};
//! use product_cache::services::{ProductCache, ProductService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = create_migrated_test_pool().await?;
//!     let repository = Arc::new(SqliteProductRepository::new(pool));
//!     let cache = ProductCache::new(Arc::new(MemoryCacheBackend::new()));
//!     let service = ProductService::new(repository, cache);
//!     let product = service.get_product("1").await;
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{CacheError, DomainError, DomainResult};
pub use domain::models::{Config, Product, ProductId};
pub use domain::ports::{CacheBackend, ProductRepository};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{CacheLookup, ProductCache, ProductService, SeedService};
