//! Redis-backed record store.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisResult, Script, aio::ConnectionManager};
use tracing::{debug, error, info};

use crate::domain::codec;
use crate::domain::entities::ShortCodeRecord;
use crate::domain::repositories::{RecordStore, StoreError, StoreResult};

/// Key holding the global id counter.
///
/// Record keys are `{key_prefix}{code}`; a prefix rejected by
/// [`prefix_shadows_counter`] is the only way the two can meet.
pub const COUNTER_KEY: &str = "url_counter";

/// Returns `true` if some issuable code under `key_prefix` would be stored at
/// [`COUNTER_KEY`] (e.g. prefix `url_count` and code `er`).
pub fn prefix_shadows_counter(key_prefix: &str) -> bool {
    COUNTER_KEY
        .strip_prefix(key_prefix)
        .is_some_and(codec::is_canonical)
}

/// Adds one click to a JSON record in a single server-side step, so
/// concurrent redirects of the same code never lose an increment.
///
/// Returns 1 if the record was updated, 0 if the key does not exist, -1 if
/// the stored value is not a JSON object.
const INCREMENT_CLICKS_SCRIPT: &str = r"
local raw = redis.call('GET', KEYS[1])
if not raw then
    return 0
end
local ok, record = pcall(cjson.decode, raw)
if not ok or type(record) ~= 'table' then
    return -1
end
record.click_count = (record.click_count or 0) + 1
redis.call('SET', KEYS[1], cjson.encode(record))
return 1
";

/// Record store keeping each record as a JSON string and the counter as a
/// Redis integer advanced with `INCR`.
///
/// Uses `ConnectionManager` for automatic reconnection. Every command is
/// bounded by `op_timeout`; errors and timeouts surface as
/// [`StoreError::Unavailable`] without retries.
pub struct RedisRecordStore {
    client: ConnectionManager,
    key_prefix: String,
    op_timeout: Duration,
    increment_script: Script,
}

impl RedisRecordStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://:pass@localhost:6379/0"`)
    /// - `key_prefix` - namespace prepended to every short-code key
    /// - `op_timeout` - upper bound for each command round-trip
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails. A `key_prefix` for which
    /// [`prefix_shadows_counter`] holds is refused before connecting.
    pub async fn connect(
        redis_url: &str,
        key_prefix: impl Into<String>,
        op_timeout: Duration,
    ) -> StoreResult<Self> {
        let key_prefix = key_prefix.into();
        if prefix_shadows_counter(&key_prefix) {
            return Err(StoreError::Unavailable(format!(
                "Key prefix {:?} overlaps the counter key {:?}",
                key_prefix, COUNTER_KEY
            )));
        }

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Unavailable(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(op_timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Unavailable("Timed out connecting to Redis".to_string()))?
            .map_err(|e| StoreError::Unavailable(format!("Failed to connect to Redis: {}", e)))?;

        let store = Self {
            client: manager,
            key_prefix,
            op_timeout,
            increment_script: Script::new(INCREMENT_CLICKS_SCRIPT),
        };
        store.health_check().await?;

        info!("✓ Connected to Redis");

        Ok(store)
    }

    /// Constructs the full Redis key for a short code.
    fn build_key(&self, code: &str) -> String {
        format!("{}{}", self.key_prefix, code)
    }

    /// Awaits a Redis command, applying the operation timeout.
    async fn bounded<T, F>(&self, op: &'static str, fut: F) -> StoreResult<T>
    where
        F: Future<Output = RedisResult<T>>,
    {
        match tokio::time::timeout(self.op_timeout, fut).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                error!("Redis {} error: {}", op, e);
                Err(StoreError::Unavailable(format!("{} failed: {}", op, e)))
            }
            Err(_) => {
                error!("Redis {} timed out after {:?}", op, self.op_timeout);
                Err(StoreError::Unavailable(format!("{} timed out", op)))
            }
        }
    }
}

/// Maps the increment script's status reply.
fn click_script_reply(code: &str, reply: i64) -> StoreResult<bool> {
    match reply {
        1 => Ok(true),
        0 => Ok(false),
        _ => Err(StoreError::Corrupt {
            code: code.to_string(),
            reason: "stored value is not a JSON object".to_string(),
        }),
    }
}

#[async_trait]
impl RecordStore for RedisRecordStore {
    async fn next_id(&self) -> StoreResult<u64> {
        let mut conn = self.client.clone();
        let id: u64 = self.bounded("INCR", conn.incr(COUNTER_KEY, 1u64)).await?;
        debug!("Issued id {}", id);
        Ok(id)
    }

    async fn put(&self, code: &str, record: ShortCodeRecord) -> StoreResult<()> {
        let key = self.build_key(code);
        let payload = serde_json::to_string(&record).map_err(|e| StoreError::Corrupt {
            code: code.to_string(),
            reason: e.to_string(),
        })?;

        let mut conn = self.client.clone();
        self.bounded("SET", conn.set::<_, _, ()>(&key, payload)).await?;
        debug!("Stored {} -> {}", code, record.original_url);
        Ok(())
    }

    async fn get(&self, code: &str) -> StoreResult<Option<ShortCodeRecord>> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let raw: Option<String> = self.bounded("GET", conn.get(&key)).await?;
        let Some(raw) = raw else {
            debug!("No record for {}", code);
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StoreError::Corrupt {
                code: code.to_string(),
                reason: e.to_string(),
            })
    }

    async fn increment_clicks(&self, code: &str) -> StoreResult<bool> {
        let key = self.build_key(code);
        let mut conn = self.client.clone();

        let invocation = self.increment_script.key(&key);
        let reply: i64 = self
            .bounded("EVALSHA", invocation.invoke_async(&mut conn))
            .await?;
        click_script_reply(code, reply)
    }

    async fn health_check(&self) -> StoreResult<()> {
        let mut conn = self.client.clone();
        self.bounded("PING", conn.ping::<()>()).await
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_shadows_counter() {
        // "url_count" + "er" == "url_counter", and "er" is issued for id 895
        assert!(prefix_shadows_counter("url_count"));
        assert!(prefix_shadows_counter("url_"));
        assert!(prefix_shadows_counter("url_counte"));
        assert_eq!(format!("url_count{}", codec::encode(895)), COUNTER_KEY);

        assert!(!prefix_shadows_counter("url:"));
        assert!(!prefix_shadows_counter(""));
        assert!(!prefix_shadows_counter("url"));
        assert!(!prefix_shadows_counter("url_counter"));
        assert!(!prefix_shadows_counter("links:"));
    }

    #[tokio::test]
    async fn test_connect_refuses_overlapping_prefix() {
        // Refused before any connection attempt, so no server is needed
        let result =
            RedisRecordStore::connect("redis://127.0.0.1:1/0", "url_count", Duration::from_secs(1))
                .await;

        match result {
            Err(StoreError::Unavailable(message)) => assert!(message.contains("counter key")),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("overlapping prefix was accepted"),
        }
    }

    #[test]
    fn test_click_script_reply() {
        assert!(matches!(click_script_reply("a", 1), Ok(true)));
        assert!(matches!(click_script_reply("a", 0), Ok(false)));
        assert!(matches!(
            click_script_reply("a", -1),
            Err(StoreError::Corrupt { ref code, .. }) if code == "a"
        ));
    }
}
