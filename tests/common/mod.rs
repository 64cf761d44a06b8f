//! Shared fixtures for integration tests: an in-memory SQLite store and
//! adapters that count calls or fail on demand.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use product_cache::adapters::cache::MemoryCacheBackend;
use product_cache::adapters::sqlite::{create_migrated_test_pool, SqliteProductRepository};
use product_cache::{CacheBackend, CacheError, DomainError, DomainResult, Product, ProductId, ProductRepository};

/// Migrated in-memory store holding `products`.
pub async fn seeded_store(products: &[Product]) -> Arc<SqliteProductRepository> {
    let pool = create_migrated_test_pool().await.expect("Failed to create test pool");
    let repo = SqliteProductRepository::new(pool);
    repo.insert_missing(products).await.expect("Failed to insert products");
    Arc::new(repo)
}

pub fn product(id: i64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Sample Product {id}"),
        format!("Description of Sample Product {id}"),
        9.99 + id as f64 * 10.0,
    )
}

/// Repository decorator counting store lookups.
pub struct CountingRepository<R: ProductRepository> {
    inner: Arc<R>,
    gets: AtomicUsize,
}

impl<R: ProductRepository> CountingRepository<R> {
    pub fn new(inner: Arc<R>) -> Self {
        Self {
            inner,
            gets: AtomicUsize::new(0),
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<R: ProductRepository> ProductRepository for CountingRepository<R> {
    async fn get(&self, id: ProductId) -> DomainResult<Option<Product>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(id).await
    }

    async fn insert_missing(&self, products: &[Product]) -> DomainResult<u64> {
        self.inner.insert_missing(products).await
    }
}

/// Store whose every query fails.
pub struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn get(&self, _id: ProductId) -> DomainResult<Option<Product>> {
        Err(DomainError::DatabaseError("connection refused".to_string()))
    }

    async fn insert_missing(&self, _products: &[Product]) -> DomainResult<u64> {
        Err(DomainError::DatabaseError("connection refused".to_string()))
    }
}

/// Memory cache that counts calls and can be told to fail reads or writes.
#[derive(Default)]
pub struct RecordingCache {
    inner: MemoryCacheBackend,
    gets: AtomicUsize,
    sets: AtomicUsize,
    fail_reads: bool,
    fail_writes: bool,
}

impl RecordingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails as if the server were unreachable.
    pub fn unreachable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Reads work, writes fail.
    pub fn read_only() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    /// Write straight into the underlying store, bypassing counters and failures.
    pub async fn preload(&self, key: &str, value: &str) {
        self.inner
            .set(key, value, Duration::from_secs(3600))
            .await
            .expect("memory cache write cannot fail");
    }

    /// Read straight from the underlying store, bypassing counters and failures.
    pub async fn peek(&self, key: &str) -> Option<(String, Duration)> {
        let value = self.inner.get(key).await.ok()??;
        let ttl = self.inner.ttl(key).await.ok()??;
        Some((value, ttl))
    }
}

#[async_trait]
impl CacheBackend for RecordingCache {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_reads {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        self.inner.set(key, value, ttl).await
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, CacheError> {
        if self.fail_reads {
            return Err(CacheError::Unavailable("connection refused".to_string()));
        }
        self.inner.ttl(key).await
    }
}
