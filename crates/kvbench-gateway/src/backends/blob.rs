//! Durable blob-store backend over RocksDB.
//!
//! The database holds a directory lock, so it is opened once at startup;
//! the per-request handle of the increment path is the `Arc` clone taken
//! out of the registry. Reads are strongly consistent. Values are stored
//! as JSON-encoded integers, matching the blob-provider convention of
//! typed JSON blobs.

use std::sync::Arc;

use async_trait::async_trait;
use rocksdb::{DBWithThreadMode, MultiThreaded};
use tracing::debug;

use kvbench_core::{CounterBackend, KvBenchError, Result};

type Db = DBWithThreadMode<MultiThreaded>;

pub struct BlobBackend {
    name: String,
    db: Arc<Db>,
}

impl BlobBackend {
    pub fn open(name: &str, path: &str) -> Result<Self> {
        let db = Db::open_default(path)
            .map_err(|e| KvBenchError::BackendUnavailable(format!("blob store open: {e}")))?;
        debug!(%path, "opened blob store");
        Ok(Self { name: name.to_string(), db: Arc::new(db) })
    }
}

#[async_trait]
impl CounterBackend for BlobBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<u64>> {
        match self.db.get(key.as_bytes()) {
            Ok(Some(raw)) => {
                let value: u64 = serde_json::from_slice(&raw).map_err(|e| {
                    KvBenchError::MalformedValue(format!("blob {key}: {e}"))
                })?;
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(KvBenchError::BackendUnavailable(format!("blob get: {e}"))),
        }
    }

    async fn set(&self, key: &str, value: u64) -> Result<()> {
        let encoded = serde_json::to_vec(&value)
            .map_err(|e| KvBenchError::Internal(format!("encode counter: {e}")))?;
        self.db
            .put(key.as_bytes(), encoded)
            .map_err(|e| KvBenchError::BackendUnavailable(format!("blob set: {e}")))
    }
}
