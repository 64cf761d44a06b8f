//! SQLite implementation of the ProductRepository.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Product, ProductId};
use crate::domain::ports::ProductRepository;

#[derive(Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    async fn get(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let row: Option<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price FROM products WHERE id = ?"
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Product::from))
    }

    async fn insert_missing(&self, products: &[Product]) -> DomainResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for product in products {
            let result = sqlx::query(
                r#"INSERT INTO products (id, name, description, price)
                   VALUES (?, ?, ?, ?)
                   ON CONFLICT(id) DO NOTHING"#
            )
            .bind(product.id.get())
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;
        Ok(inserted)
    }
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: String,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sqlite::create_migrated_test_pool;

    async fn setup_repo() -> SqliteProductRepository {
        let pool = create_migrated_test_pool().await.unwrap();
        SqliteProductRepository::new(pool)
    }

    #[tokio::test]
    async fn test_get_existing_product() {
        let repo = setup_repo().await;
        let product = Product::new(ProductId::new(3), "Lamp", "A desk lamp", 39.99);
        repo.insert_missing(std::slice::from_ref(&product)).await.unwrap();

        let fetched = repo.get(ProductId::new(3)).await.unwrap();
        assert_eq!(fetched, Some(product));
    }

    #[tokio::test]
    async fn test_get_missing_product_is_none() {
        let repo = setup_repo().await;
        assert!(repo.get(ProductId::new(999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_missing_skips_existing_rows() {
        let repo = setup_repo().await;
        let original = Product::new(ProductId::new(1), "First", "Original row", 1.0);
        assert_eq!(repo.insert_missing(&[original.clone()]).await.unwrap(), 1);

        let conflicting = Product::new(ProductId::new(1), "Changed", "Should not replace", 2.0);
        let fresh = Product::new(ProductId::new(2), "Second", "New row", 2.5);
        assert_eq!(repo.insert_missing(&[conflicting, fresh.clone()]).await.unwrap(), 1);

        assert_eq!(repo.get(ProductId::new(1)).await.unwrap(), Some(original));
        assert_eq!(repo.get(ProductId::new(2)).await.unwrap(), Some(fresh));
    }

    #[tokio::test]
    async fn test_closed_pool_is_an_error_not_a_miss() {
        let pool = create_migrated_test_pool().await.unwrap();
        let repo = SqliteProductRepository::new(pool.clone());
        pool.close().await;

        assert!(repo.get(ProductId::new(1)).await.is_err());
    }
}
