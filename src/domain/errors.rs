//! Domain errors for the product cache service.

use thiserror::Error;

use crate::domain::models::ProductId;

/// Failures reported by a cache backend or by the product wire codec.
///
/// A cache miss is not an error and never appears here.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache backend unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize cached product: {0}")]
    Serialization(String),

    #[error("Failed to deserialize cached product: {0}")]
    Deserialization(String),
}

/// Domain-level errors that can occur while serving a product lookup.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid product ID: {0:?}")]
    InvalidProductId(String),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl DomainError {
    /// Whether the error is a client mistake rather than a backend fault.
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidProductId(_) | Self::ProductNotFound(_))
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        Self::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(DomainError::InvalidProductId("abc".to_string()).is_client_error());
        assert!(DomainError::ProductNotFound(ProductId::new(9)).is_client_error());
        assert!(!DomainError::DatabaseError("gone".to_string()).is_client_error());
        assert!(!DomainError::from(CacheError::Unavailable("refused".to_string())).is_client_error());
    }

    #[test]
    fn test_cache_error_converts() {
        let err: DomainError = CacheError::Deserialization("bad json".to_string()).into();
        assert!(matches!(err, DomainError::Cache(CacheError::Deserialization(_))));
        assert_eq!(err.to_string(), "Cache error: Failed to deserialize cached product: bad json");
    }
}
