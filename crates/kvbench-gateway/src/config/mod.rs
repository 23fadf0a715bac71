//! Configuration: strict YAML parsing plus post-parse validation.

pub mod schema;

use std::path::Path;

use kvbench_core::error::{KvBenchError, Result};

pub use schema::{BackendConfig, BackendKind, GatewayConfig, GatewaySection};

/// Read, parse, and validate a config file.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<GatewayConfig> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        KvBenchError::Internal(format!("cannot read config {}: {e}", path.display()))
    })?;
    load_from_str(&raw)
}

/// Parse and validate config from a YAML string.
pub fn load_from_str(raw: &str) -> Result<GatewayConfig> {
    let cfg: GatewayConfig = serde_yaml::from_str(raw)
        .map_err(|e| KvBenchError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
