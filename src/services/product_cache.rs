//! Typed product cache on top of a raw [`CacheBackend`].
//!
//! Owns the wire format: a cached product is the JSON object
//! `{"id", "name", "description", "price"}` stored under its decimal id.

use std::sync::Arc;
use std::time::Duration;

use crate::domain::errors::CacheError;
use crate::domain::models::Product;
use crate::domain::ports::CacheBackend;

/// Outcome of a successful cache read.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Found(Product),
    Absent,
}

/// Encode a product in the cache wire format.
pub fn encode_product(product: &Product) -> Result<String, CacheError> {
    serde_json::to_string(product).map_err(|e| CacheError::Serialization(e.to_string()))
}

/// Decode a cached value. Extra fields are ignored; missing or mistyped ones are errors.
pub fn decode_product(raw: &str) -> Result<Product, CacheError> {
    serde_json::from_str(raw).map_err(|e| CacheError::Deserialization(e.to_string()))
}

pub struct ProductCache<C: CacheBackend + ?Sized> {
    backend: Arc<C>,
}

impl<C: CacheBackend + ?Sized> Clone for ProductCache<C> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
        }
    }
}

impl<C: CacheBackend + ?Sized> ProductCache<C> {
    pub fn new(backend: Arc<C>) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &C {
        &self.backend
    }

    /// Look up the product cached under `key`.
    ///
    /// A miss is `Ok(CacheLookup::Absent)`. Backend faults and undecodable
    /// payloads are errors.
    pub async fn get(&self, key: &str) -> Result<CacheLookup, CacheError> {
        match self.backend.get(key).await? {
            Some(raw) => decode_product(&raw).map(CacheLookup::Found),
            None => Ok(CacheLookup::Absent),
        }
    }

    /// Cache `product` under `key` for `ttl`, replacing any previous entry.
    pub async fn set(&self, key: &str, product: &Product, ttl: Duration) -> Result<(), CacheError> {
        let payload = encode_product(product)?;
        self.backend.set(key, &payload, ttl).await
    }
}
