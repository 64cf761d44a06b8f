//! Cache backend port - raw string storage with expiry.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::errors::CacheError;

/// Key/value store holding serialized values with a time-to-live.
///
/// Implementations must be safe to share across concurrent requests.
/// Transport and connectivity faults are [`CacheError::Unavailable`]; a
/// stored value that cannot be read back as text is
/// [`CacheError::Deserialization`]. A missing or expired key is `Ok(None)`.
#[async_trait]
pub trait CacheBackend: Send + Sync {
    /// Backend name used in logs.
    fn name(&self) -> &'static str;

    /// Read the raw value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any existing value and resetting its expiry.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Remaining lifetime of the entry under `key`, `None` if there is no live entry.
    async fn ttl(&self, key: &str) -> Result<Option<Duration>, CacheError>;
}
