use serde::Deserialize;

use kvbench_core::error::{KvBenchError, Result};

/// Paths the router reserves for itself; no backend may claim them.
pub const RESERVED_ROUTES: [&str; 3] = ["reset", "healthz", "metrics"];

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,

    #[serde(default)]
    pub backends: Vec<BackendConfig>,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(KvBenchError::BadRequest(format!(
                "unsupported config version: {}",
                self.version
            )));
        }
        if self.backends.is_empty() {
            return Err(KvBenchError::BadRequest("backends must not be empty".into()));
        }

        let mut seen = std::collections::HashSet::new();
        for b in &self.backends {
            b.validate()?;
            if !seen.insert(b.route.as_str()) {
                return Err(KvBenchError::BadRequest(format!(
                    "duplicate backend route: {}",
                    b.route
                )));
            }
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self { listen: default_listen() }
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}

/// Storage provider behind a backend route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// DashMap-backed store, for local runs and tests.
    Memory,
    /// Shared-client remote cache; credentials come from the environment.
    Redis,
    /// Durable blob store at `path`, values JSON-encoded.
    Blob,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    pub kind: BackendKind,
    /// URL path segment the backend is served under (e.g. `redis` -> `/redis`).
    pub route: String,
    /// Display name used in rendered results.
    pub name: String,
    /// Blob store directory. Required for `kind: blob`, ignored otherwise.
    #[serde(default)]
    pub path: Option<String>,
}

impl BackendConfig {
    pub fn validate(&self) -> Result<()> {
        if self.route.is_empty()
            || !self.route.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        {
            return Err(KvBenchError::BadRequest(format!(
                "backend route must be non-empty [a-z0-9-]: {:?}",
                self.route
            )));
        }
        if RESERVED_ROUTES.contains(&self.route.as_str()) {
            return Err(KvBenchError::BadRequest(format!(
                "backend route is reserved: {}",
                self.route
            )));
        }
        if self.name.is_empty() {
            return Err(KvBenchError::BadRequest(format!(
                "backend name must not be empty (route {})",
                self.route
            )));
        }
        if self.kind == BackendKind::Blob && self.path.is_none() {
            return Err(KvBenchError::BadRequest(format!(
                "blob backend requires a path (route {})",
                self.route
            )));
        }
        Ok(())
    }
}
