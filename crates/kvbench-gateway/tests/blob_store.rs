#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

//! Blob backend round-trip against a throwaway RocksDB directory.

use std::time::{SystemTime, UNIX_EPOCH};

use kvbench_core::{timed_increment, CounterBackend, COUNTER_KEY};
use kvbench_gateway::backends::BlobBackend;

fn scratch_dir() -> std::path::PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    std::env::temp_dir().join(format!("kvbench-blob-test-{}-{nanos}", std::process::id()))
}

#[tokio::test]
async fn json_encoded_counter_roundtrip() {
    let dir = scratch_dir();
    {
        let backend = BlobBackend::open("Blob store", dir.to_str().unwrap()).unwrap();

        // Fresh store: absent reads as None, first increment shows 0.
        assert_eq!(backend.get(COUNTER_KEY).await.unwrap(), None);
        let outcome = timed_increment(&backend).await.unwrap();
        assert_eq!(outcome.count, 0);

        // Stored value is the JSON-decodable integer 1.
        assert_eq!(backend.get(COUNTER_KEY).await.unwrap(), Some(1));

        backend.set(COUNTER_KEY, 0).await.unwrap();
        assert_eq!(backend.get(COUNTER_KEY).await.unwrap(), Some(0));
    }
    let _ = std::fs::remove_dir_all(&dir);
}
