//! kvbench core: the counter-backend contract and the timed increment
//! operation.
//!
//! This crate defines the storage contract and the measurement protocol
//! shared by the gateway and any future drivers. It intentionally carries
//! no HTTP or provider-SDK dependencies so backends can be implemented and
//! benchmarked in any hosting context.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `KvBenchError`/`Result` so a failing
//! storage provider never crashes the process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod backend;
pub mod error;
pub mod increment;
pub mod reset;

pub use backend::{CounterBackend, COUNTER_KEY};
pub use error::{KvBenchError, Result, StatusClass};
pub use increment::{timed_increment, IncrementError, IncrementOutcome, Phase, TimingSample};
pub use reset::{reset_all, ResetReport};
