//! Product domain model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::DomainError;

/// Identifier of a product, shared by the durable store and the cache.
///
/// Always non-negative. The decimal `Display` form is the cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw id. Values read back from the store are trusted as-is.
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }

    /// Key under which this product is cached.
    pub fn cache_key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ProductId> for i64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

impl TryFrom<i64> for ProductId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(DomainError::InvalidProductId(value.to_string()));
        }
        Ok(Self(value))
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    /// Parse an id taken from a request path.
    ///
    /// Accepts ASCII digits with an optional leading `+`. Leading zeros are
    /// allowed, so `"007"` and `"7"` name the same product.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidProductId(s.to_string());

        let digits = s.strip_prefix('+').unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }

        digits.parse::<i64>().map(Self).map_err(|_| invalid())
    }
}

/// A product record.
///
/// Field names and types are the cache wire format: a JSON object with
/// `id`, `name`, `description` and `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, description: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
