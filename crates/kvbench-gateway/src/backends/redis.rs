//! Remote cache backend over a shared Redis client.
//!
//! One process-wide client is built from environment-supplied credentials
//! the first time any instance needs it; every call then opens a cheap
//! multiplexed connection off that client. The provider pools connections,
//! so no locking happens here. Values are stored as native integers.

use async_trait::async_trait;
use redis::{AsyncCommands, Client};
use tokio::sync::OnceCell;
use tracing::{debug, error};

use kvbench_core::{CounterBackend, KvBenchError, Result};

pub struct RedisBackend {
    name: String,
}

impl RedisBackend {
    /// Build the backend, initializing the shared client eagerly so an
    /// unusable URL fails at startup rather than on the first request.
    pub async fn connect(name: &str) -> Result<Self> {
        shared_client().await?;
        Ok(Self { name: name.to_string() })
    }
}

#[async_trait]
impl CounterBackend for RedisBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<u64>> {
        let mut con = connection().await?;
        let value: Option<u64> = con.get(key).await.map_err(map_err)?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: u64) -> Result<()> {
        let mut con = connection().await?;
        con.set::<_, _, ()>(key, value).await.map_err(map_err)?;
        Ok(())
    }
}

/// Shared process-wide client; construction is credentials-from-env only,
/// no network round-trip.
static REDIS_CLIENT: OnceCell<Client> = OnceCell::const_new();

async fn shared_client() -> Result<&'static Client> {
    REDIS_CLIENT
        .get_or_try_init(|| async {
            debug!("initializing redis client");

            let url = match std::env::var("REDIS_URL") {
                Ok(url) => url,
                Err(_) => {
                    let protocol =
                        std::env::var("REDIS_PROTOCOL").unwrap_or_else(|_| "redis".to_string());
                    let host =
                        std::env::var("REDIS_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
                    let port = std::env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
                    let password = std::env::var("REDIS_PASSWORD").unwrap_or_default();
                    format!("{protocol}://:{password}@{host}:{port}")
                }
            };

            Client::open(url).map_err(|e| {
                error!("failed to initialize redis client: {e}");
                KvBenchError::BackendUnavailable(format!("redis client init: {e}"))
            })
        })
        .await
}

async fn connection() -> Result<redis::aio::MultiplexedConnection> {
    let client = shared_client().await?;
    client
        .get_multiplexed_async_connection()
        .await
        .map_err(|e| KvBenchError::BackendUnavailable(format!("redis connect: {e}")))
}

/// A reply that cannot be read as an integer is a corrupted counter, not a
/// connectivity problem.
fn map_err(e: redis::RedisError) -> KvBenchError {
    if e.kind() == redis::ErrorKind::TypeError {
        KvBenchError::MalformedValue(e.to_string())
    } else {
        KvBenchError::BackendUnavailable(e.to_string())
    }
}
