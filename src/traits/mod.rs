//! Trait seams of the engine.
//!
//! [`FromConfig`] builds pools and registries from configuration;
//! [`Versioned`] carries the optimistic-concurrency stamp shared by pools,
//! quotes and snapshots.

mod from_config;
mod versioned;

pub use from_config::FromConfig;
pub use versioned::Versioned;
