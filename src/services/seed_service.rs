//! Startup seeding of sample products.

use std::sync::Arc;
use tracing::info;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Product, ProductId};
use crate::domain::ports::ProductRepository;

/// The sample catalogue inserted before the server accepts traffic.
pub fn sample_products() -> Vec<Product> {
    [(1, 19.99), (2, 29.99), (3, 39.99)]
        .into_iter()
        .map(|(id, price)| {
            Product::new(
                ProductId::new(id),
                format!("Sample Product {id}"),
                format!("Description of Sample Product {id}"),
                price,
            )
        })
        .collect()
}

pub struct SeedService<R: ProductRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProductRepository + ?Sized> SeedService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Insert the sample products that are not in the store yet.
    ///
    /// Safe to run on every start. Returns how many rows were added.
    pub async fn seed_samples(&self) -> DomainResult<u64> {
        let products = sample_products();
        let inserted = self.repository.insert_missing(&products).await?;
        info!(inserted, total = products.len(), "seeded sample products");
        Ok(inserted)
    }
}
