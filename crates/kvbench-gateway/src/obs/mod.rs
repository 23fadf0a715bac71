//! Observability: the gateway metrics registry.

pub mod metrics;

pub use metrics::GatewayMetrics;
