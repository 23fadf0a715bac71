//! In-memory backend, for local runs and tests.

use async_trait::async_trait;
use dashmap::DashMap;

use kvbench_core::{CounterBackend, Result};

/// DashMap-backed counter store. Never fails, shared freely across
/// requests.
pub struct MemoryBackend {
    name: String,
    map: DashMap<String, u64>,
}

impl MemoryBackend {
    pub fn new(name: &str) -> Self {
        Self { name: name.to_string(), map: DashMap::new() }
    }
}

#[async_trait]
impl CounterBackend for MemoryBackend {
    fn name(&self) -> &str {
        &self.name
    }

    async fn get(&self, key: &str) -> Result<Option<u64>> {
        Ok(self.map.get(key).map(|e| *e.value()))
    }

    async fn set(&self, key: &str, value: u64) -> Result<()> {
        self.map.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kvbench_core::COUNTER_KEY;

    #[tokio::test]
    async fn absent_then_roundtrip() {
        let backend = MemoryBackend::new("mem");
        assert_eq!(backend.get(COUNTER_KEY).await.unwrap(), None);

        backend.set(COUNTER_KEY, 7).await.unwrap();
        assert_eq!(backend.get(COUNTER_KEY).await.unwrap(), Some(7));
    }
}
