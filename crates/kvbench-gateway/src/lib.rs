//! kvbench gateway: the HTTP surface over the counter backends.
//!
//! One route per registered backend runs a timed increment and renders the
//! latency fragment; `/reset` zeroes every backend; `/healthz` and
//! `/metrics` are operational.

pub mod app_state;
pub mod backends;
pub mod config;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod registry;
pub mod render;
pub mod router;
