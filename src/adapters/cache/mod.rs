//! Cache backends for product lookups.
//!
//! `RedisCacheBackend` is the shared, out-of-process cache used in
//! production. `MemoryCacheBackend` keeps entries in process with `moka`
//! and backs single-instance deployments and tests.

pub mod memory_backend;
pub mod redis_backend;

pub use memory_backend::MemoryCacheBackend;
pub use redis_backend::RedisCacheBackend;

use std::sync::Arc;

use crate::domain::errors::CacheError;
use crate::domain::models::{CacheBackendKind, CacheConfig};
use crate::domain::ports::CacheBackend;

/// Build the backend selected by `config`. Redis is connected on first use.
pub fn build_backend(config: &CacheConfig) -> Result<Arc<dyn CacheBackend>, CacheError> {
    let backend: Arc<dyn CacheBackend> = match config.backend {
        CacheBackendKind::Redis => Arc::new(RedisCacheBackend::new(&config.url)?),
        CacheBackendKind::Memory => Arc::new(MemoryCacheBackend::with_capacity(config.max_capacity)),
    };
    Ok(backend)
}
