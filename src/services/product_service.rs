//! Cache-aside product lookup.
//!
//! Per request: parse the id, check the cache, fall back to the store on a
//! miss, repopulate the cache, respond. Steps run strictly in that order and
//! nothing is shared between requests beyond the two injected adapters.

use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Product, ProductId};
use crate::domain::ports::{CacheBackend, ProductRepository};
use crate::services::product_cache::{CacheLookup, ProductCache};

/// Lifetime of a repopulated cache entry unless configured otherwise.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

pub struct ProductService<R, C>
where
    R: ProductRepository + ?Sized,
    C: CacheBackend + ?Sized,
{
    repository: Arc<R>,
    cache: ProductCache<C>,
    ttl: Duration,
}

impl<R, C> ProductService<R, C>
where
    R: ProductRepository + ?Sized,
    C: CacheBackend + ?Sized,
{
    pub fn new(repository: Arc<R>, cache: ProductCache<C>) -> Self {
        Self {
            repository,
            cache,
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Override the lifetime of entries written on a cache miss.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub const fn cache(&self) -> &ProductCache<C> {
        &self.cache
    }

    /// Resolve a product from a raw request identifier.
    ///
    /// Malformed identifiers fail with [`DomainError::InvalidProductId`]
    /// before either backend is touched.
    pub async fn get_product(&self, raw_id: &str) -> DomainResult<Product> {
        let id: ProductId = raw_id.parse()?;
        self.get_by_id(id).await
    }

    /// Cache-aside lookup for an already parsed id.
    ///
    /// A failing cache read aborts the request instead of falling through to
    /// the store. A failing cache write after a store hit is logged and
    /// ignored.
    #[instrument(skip_all, fields(product_id = %id))]
    pub async fn get_by_id(&self, id: ProductId) -> DomainResult<Product> {
        let key = id.cache_key();

        match self.cache.get(&key).await {
            Ok(CacheLookup::Found(product)) => {
                debug!("cache hit");
                return Ok(product);
            }
            Ok(CacheLookup::Absent) => debug!("cache miss"),
            Err(err) => {
                error!(error = %err, backend = self.cache.backend().name(), "cache lookup failed");
                return Err(err.into());
            }
        }

        let product = match self.repository.get(id).await {
            Ok(Some(product)) => product,
            Ok(None) => {
                debug!("product not found");
                return Err(DomainError::ProductNotFound(id));
            }
            Err(err) => {
                error!(error = %err, "store lookup failed");
                return Err(err);
            }
        };

        if let Err(err) = self.cache.set(&key, &product, self.ttl).await {
            warn!(error = %err, backend = self.cache.backend().name(), "failed to repopulate cache");
        }

        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::MemoryCacheBackend;
    use crate::adapters::sqlite::{create_migrated_test_pool, SqliteProductRepository};

    async fn setup_service() -> (
        ProductService<SqliteProductRepository, MemoryCacheBackend>,
        Arc<MemoryCacheBackend>,
    ) {
        let pool = create_migrated_test_pool().await.unwrap();
        let repo = Arc::new(SqliteProductRepository::new(pool));
        repo.insert_missing(&[Product::new(ProductId::new(3), "Sample Product 3", "Description of Sample Product 3", 39.99)])
            .await
            .unwrap();

        let backend = Arc::new(MemoryCacheBackend::new());
        let service = ProductService::new(repo, ProductCache::new(backend.clone()));
        (service, backend)
    }

    #[tokio::test]
    async fn test_miss_reads_store_and_fills_cache() {
        let (service, backend) = setup_service().await;

        let product = service.get_product("3").await.unwrap();
        assert_eq!(product.name, "Sample Product 3");

        let cached = service.cache().get("3").await.unwrap();
        assert_eq!(cached, CacheLookup::Found(product));
        let ttl = backend.ttl("3").await.unwrap().unwrap();
        assert!(ttl > DEFAULT_CACHE_TTL - Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (service, backend) = setup_service().await;

        let err = service.get_product("999").await.unwrap_err();
        assert!(matches!(err, DomainError::ProductNotFound(id) if id == ProductId::new(999)));
        assert_eq!(backend.get("999").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_malformed_id_is_rejected() {
        let (service, _) = setup_service().await;
        assert!(matches!(
            service.get_product("abc").await,
            Err(DomainError::InvalidProductId(_))
        ));
    }

    #[tokio::test]
    async fn test_custom_ttl_is_applied() {
        let (service, backend) = setup_service().await;
        let service = service.with_ttl(Duration::from_secs(30));

        service.get_product("3").await.unwrap();

        let ttl = backend.ttl("3").await.unwrap().unwrap();
        assert!(ttl <= Duration::from_secs(30));
    }
}
