//! Top-level facade crate for kvbench.
//!
//! Re-exports the core contract and the gateway library so users can depend
//! on a single crate.

pub mod core {
    pub use kvbench_core::*;
}

pub mod gateway {
    pub use kvbench_gateway::*;
}
