//! Product repository port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Product, ProductId};

/// Repository interface for the durable product store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID.
    ///
    /// A missing row is `Ok(None)`; only query or connectivity faults are errors.
    async fn get(&self, id: ProductId) -> DomainResult<Option<Product>>;

    /// Insert products that are not already present, in one transaction.
    ///
    /// Returns the number of rows actually inserted.
    async fn insert_missing(&self, products: &[Product]) -> DomainResult<u64>;
}
