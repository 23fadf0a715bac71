//! Counter backend contract.

use async_trait::async_trait;

use crate::error::Result;

/// The single key every backend stores its counter under.
pub const COUNTER_KEY: &str = "counter";

/// One key-value storage provider exposing `get`/`set` for the counter key.
///
/// Construction strategy is per-implementation: a connection-pooled client
/// shared process-wide, or a cheap handle cloned per request. The
/// orchestration in [`crate::increment`] and [`crate::reset`] depends only
/// on this trait, never on provider types.
#[async_trait]
pub trait CounterBackend: Send + Sync {
    /// Stable display name (e.g. "Redis").
    fn name(&self) -> &str;

    /// Read the counter. `None` means the key was never written.
    async fn get(&self, key: &str) -> Result<Option<u64>>;

    /// Write the counter.
    async fn set(&self, key: &str, value: u64) -> Result<()>;
}
