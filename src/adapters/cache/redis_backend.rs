//! Redis cache backend.
//!
//! The connection is opened on first use rather than at startup, so the
//! service comes up while Redis is down and reports each affected request
//! as a cache outage. Once established, one `ConnectionManager` is cloned
//! per command; it multiplexes commands over a single connection and
//! reconnects on its own after a failure.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;

use crate::domain::errors::CacheError;
use crate::domain::ports::CacheBackend;

fn unavailable(context: &str, err: &redis::RedisError) -> CacheError {
    CacheError::Unavailable(format!("{context}: {err}"))
}

/// Translate a Redis `TTL` reply. `-2` (missing) and `-1` (no expiry) both map to `None`.
fn ttl_from_reply(seconds: i64) -> Option<Duration> {
    u64::try_from(seconds).ok().map(Duration::from_secs)
}

/// Turn a raw `GET` reply into text. Bytes that are not UTF-8 are a corrupt
/// payload, not a transport fault.
fn text_from_reply(raw: Option<Vec<u8>>) -> Result<Option<String>, CacheError> {
    raw.map(|bytes| {
        String::from_utf8(bytes)
            .map_err(|e| CacheError::Deserialization(format!("cached value is not UTF-8: {e}")))
    })
    .transpose()
}

/// Cache backend storing values in Redis with `SET .. EX`.
#[derive(Clone)]
pub struct RedisCacheBackend {
    client: Client,
    connection: Arc<OnceCell<ConnectionManager>>,
}

impl RedisCacheBackend {
    /// Build a backend for the Redis server at `url` (e.g. `redis://127.0.0.1:6379/0`).
    ///
    /// Only the URL is checked here; no connection is attempted.
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = Client::open(url).map_err(|e| unavailable("invalid Redis URL", &e))?;
        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
        })
    }

    /// Shared connection, established on first call. A failed attempt is
    /// retried on the next call.
    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let manager = self
            .connection
            .get_or_try_init(|| async {
                let manager = self
                    .client
                    .get_connection_manager()
                    .await
                    .map_err(|e| unavailable("failed to connect to Redis", &e))?;
                tracing::info!("connected to Redis cache");
                Ok::<_, CacheError>(manager)
            })
            .await?;
        Ok(manager.clone())
    }
}

#[async_trait]
impl CacheBackend for RedisCacheBackend {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        let raw = conn
            .get::<_, Option<Vec<u8>>>(key)
            .await
            .map_err(|e| unavailable("Redis GET failed", &e))?;
        text_from_reply(raw)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let mut conn = self.connection().await?;
        // SET EX rejects a zero expiry.
        let seconds = ttl.as_secs().max(1);
        conn.set_ex::<_, _, ()>(key, value, seconds)
            .await
            .map_err(|e| unavailable("Redis SET failed", &e))
    }

    async fn ttl(&self, key: &str) -> Result<Option<Duration>, CacheError> {
        let mut conn = self.connection().await?;
        let seconds = conn
            .ttl::<_, i64>(key)
            .await
            .map_err(|e| unavailable("Redis TTL failed", &e))?;
        Ok(ttl_from_reply(seconds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{SystemTime, UNIX_EPOCH};

    #[test]
    fn test_ttl_reply_translation() {
        assert_eq!(ttl_from_reply(86_400), Some(Duration::from_secs(86_400)));
        assert_eq!(ttl_from_reply(0), Some(Duration::ZERO));
        assert_eq!(ttl_from_reply(-1), None);
        assert_eq!(ttl_from_reply(-2), None);
    }

    #[test]
    fn test_get_reply_translation() {
        assert_eq!(text_from_reply(None).unwrap(), None);
        assert_eq!(
            text_from_reply(Some(br#"{"id":1}"#.to_vec())).unwrap(),
            Some(r#"{"id":1}"#.to_string())
        );
    }

    #[test]
    fn test_non_utf8_value_is_deserialization_error() {
        let result = text_from_reply(Some(vec![0xff, 0xfe, b'{']));
        assert!(matches!(result, Err(CacheError::Deserialization(_))));
    }

    #[test]
    fn test_invalid_url_is_unavailable() {
        let result = RedisCacheBackend::new("http://not-redis");
        assert!(matches!(result, Err(CacheError::Unavailable(_))));
    }

    #[test]
    fn test_construction_does_not_connect() {
        // Nothing listens on port 1; the backend is still built.
        let backend = RedisCacheBackend::new("redis://127.0.0.1:1/0").unwrap();
        assert!(backend.connection.get().is_none());
        assert!(backend.clone().connection.get().is_none());
    }

    fn unique_key(label: &str) -> String {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        format!("product-cache-test:{label}:{}:{nanos}", std::process::id())
    }

    #[tokio::test]
    #[ignore] // Needs a live server - run with: PRODUCT_CACHE_TEST_REDIS_URL=redis://127.0.0.1:6379/15 cargo test -- --ignored
    async fn test_live_redis_round_trip() {
        let url = match std::env::var("PRODUCT_CACHE_TEST_REDIS_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => {
                eprintln!("Skipping live Redis test: PRODUCT_CACHE_TEST_REDIS_URL not set");
                return;
            }
        };
        let backend = RedisCacheBackend::new(&url).unwrap();

        let key = unique_key("round-trip");
        assert_eq!(backend.get(&key).await.unwrap(), None);
        assert_eq!(backend.ttl(&key).await.unwrap(), None);

        let day = Duration::from_secs(86_400);
        backend.set(&key, r#"{"id":1}"#, day).await.unwrap();
        assert_eq!(backend.get(&key).await.unwrap(), Some(r#"{"id":1}"#.to_string()));
        let ttl = backend.ttl(&key).await.unwrap().unwrap();
        assert!(ttl <= day && ttl > day - Duration::from_secs(60));

        // Overwrite resets the expiry; a zero TTL is raised to one second.
        backend.set(&key, r#"{"id":2}"#, Duration::ZERO).await.unwrap();
        assert_eq!(backend.get(&key).await.unwrap(), Some(r#"{"id":2}"#.to_string()));
        assert!(backend.ttl(&key).await.unwrap().unwrap() <= Duration::from_secs(1));

        let corrupt = unique_key("corrupt");
        let mut conn = backend.connection().await.unwrap();
        conn.set_ex::<_, _, ()>(&corrupt, vec![0xffu8, 0xfe, b'{'], 60).await.unwrap();
        assert!(matches!(backend.get(&corrupt).await, Err(CacheError::Deserialization(_))));

        conn.del::<_, ()>(vec![key, corrupt]).await.unwrap();
    }
}
