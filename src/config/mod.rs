//! Engine and pool configuration.
//!
//! [`EngineConfig`] is the top-level document (loadable from JSON); it
//! holds global thresholds and a list of [`PoolConfig`] entries, one per
//! market to create at start-up.

mod engine;
mod pool;

pub use engine::EngineConfig;
pub use pool::PoolConfig;
