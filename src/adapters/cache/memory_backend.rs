//! In-process cache backend using moka.
//!
//! Each entry carries its own deadline so the TTL passed to `set` is honored
//! per key, and every write resets it.

use async_trait::async_trait;
use moka::future::Cache;
use moka::Expiry;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::domain::errors::CacheError;
use crate::domain::ports::CacheBackend;

/// Default maximum number of cached entries.
const DEFAULT_MAX_CAPACITY: u64 = 10_000;

#[derive(Clone)]
struct CachedValue {
    payload: Arc<str>,
    expires_at: Instant,
}

impl CachedValue {
    fn remaining(&self, now: Instant) -> Option<Duration> {
        let left = self.expires_at.saturating_duration_since(now);
        (!left.is_zero()).then_some(left)
    }
}

/// Expiry policy reading the deadline stored in each value.
struct PerEntryDeadline;

impl Expiry<String, CachedValue> for PerEntryDeadline {
    fn expire_after_create(&self, _key: &String, value: &CachedValue, created_at: Instant) -> Option<Duration> {
        Some(value.expires_at.saturating_duration_since(created_at))
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &CachedValue,
        updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.expires_at.saturating_duration_since(updated_at))
    }
}

/// Cache backend held in process memory.
///
/// Entries are lost on restart and are not shared between instances.
#[derive(Clone)]
pub struct MemoryCacheBackend {
    entries: Cache<String, CachedValue>,
}

impl MemoryCacheBackend {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_MAX_CAPACITY)
    }

    pub fn with_capacity(max_capacity: u64) -> Self {
        let entries = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryDeadline)
            .build();

        Self { entries }
    }

    async fn live_entry(&self, key: &str) -> Option<(CachedValue, Duration)> {
        let value = self.entries.get(key).await?;
        let remaining = value.remaining(Instant::now())?;
        Some((value, remaining))
    }
}

impl Default for MemoryCacheBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for MemoryCacheBackend {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.live_entry(key).await.map(|(value, _)| value.payload.to_string()))
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let entry = CachedValue {
            payload: Arc::from(value),
            expires_at: Instant::now() + ttl,
        };
        self.entries.insert(key.to_string(), entry).await;
        Ok(())
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, CacheError> {
        Ok(self.live_entry(key).await.map(|(_, remaining)| remaining))
    }
}
