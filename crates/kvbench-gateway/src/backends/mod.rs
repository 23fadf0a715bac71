//! Concrete counter backends.
//!
//! Each module implements [`kvbench_core::CounterBackend`] for one storage
//! provider. Construction strategies differ per provider and are documented
//! on each type.

pub mod blob;
pub mod memory;
pub mod redis;

pub use blob::BlobBackend;
pub use memory::MemoryBackend;
pub use redis::RedisBackend;
