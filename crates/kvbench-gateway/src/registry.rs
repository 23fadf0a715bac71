//! Route-slug registry of counter backends.

use std::sync::Arc;

use dashmap::DashMap;

use kvbench_core::CounterBackend;

/// Registry mapping route slugs (e.g. `redis`) to backend handles.
#[derive(Default)]
pub struct BackendRegistry {
    map: DashMap<String, Arc<dyn CounterBackend>>,
    // Registration order, for deterministic reset fan-out and listings.
    order: std::sync::Mutex<Vec<String>>,
}

impl BackendRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self, route: &str, backend: Arc<dyn CounterBackend>) {
        self.map.insert(route.to_string(), backend);
        if let Ok(mut order) = self.order.lock() {
            order.push(route.to_string());
        }
    }

    /// Look up a backend by route slug. Cloning the `Arc` out of the map is
    /// the per-request handle construction.
    pub fn lookup(&self, route: &str) -> Option<Arc<dyn CounterBackend>> {
        self.map.get(route).map(|e| e.value().clone())
    }

    /// All registered backends in registration order.
    pub fn all(&self) -> Vec<Arc<dyn CounterBackend>> {
        let order = match self.order.lock() {
            Ok(order) => order.clone(),
            Err(_) => return Vec::new(),
        };
        order.iter().filter_map(|route| self.lookup(route)).collect()
    }

    pub fn routes(&self) -> Vec<String> {
        match self.order.lock() {
            Ok(order) => order.clone(),
            Err(_) => Vec::new(),
        }
    }
}
