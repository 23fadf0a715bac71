//! Shared application state for the kvbench gateway.
//!
//! Backend construction happens here, once, at startup: the registry hands
//! out `Arc` clones per request afterwards. Construction is fallible so
//! `main` can report startup errors instead of panicking mid-boot.

use std::sync::Arc;

use kvbench_core::error::Result;
use kvbench_core::CounterBackend;

use crate::backends::{BlobBackend, MemoryBackend, RedisBackend};
use crate::config::{BackendKind, GatewayConfig};
use crate::obs::GatewayMetrics;
use crate::registry::BackendRegistry;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    registry: BackendRegistry,
    metrics: GatewayMetrics,
}

impl AppState {
    /// Build application state: construct and register every configured
    /// backend. The config is already validated, so `path` is present
    /// whenever a blob backend asks for it.
    pub async fn new(cfg: GatewayConfig) -> Result<Self> {
        let registry = BackendRegistry::new();

        for b in &cfg.backends {
            let backend: Arc<dyn CounterBackend> = match b.kind {
                BackendKind::Memory => Arc::new(MemoryBackend::new(&b.name)),
                BackendKind::Redis => Arc::new(RedisBackend::connect(&b.name).await?),
                BackendKind::Blob => {
                    let path = b.path.as_deref().unwrap_or_default();
                    Arc::new(BlobBackend::open(&b.name, path)?)
                }
            };
            registry.register(&b.route, backend);
            tracing::info!(route = %b.route, name = %b.name, kind = ?b.kind, "registered backend");
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { registry, metrics: GatewayMetrics::default() }),
        })
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.inner.registry
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }
}
