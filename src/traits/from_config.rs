//! Construction from a validated configuration.
//!
//! [`FromConfig`] is the single entry point for building engine state from
//! declarative configuration:
//!
//! ```text
//! PoolConfig   => Pool::from_config(&cfg)
//! EngineConfig => PoolRegistry::from_config(&cfg)
//! ```
//!
//! Implementations validate the whole configuration before building
//! anything, so a successfully constructed value is always in a valid
//! initial state.  There is no blanket implementation; every pairing is
//! written out explicitly.

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// # Implementors
///
/// - `impl FromConfig<PoolConfig> for Pool`
/// - `impl FromConfig<EngineConfig> for PoolRegistry`
pub trait FromConfig<C> {
    /// Creates a new instance from the given configuration.
    ///
    /// The configuration is taken by reference so the caller may keep it
    /// (e.g. for logging or to rebuild after a reset).
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the document is inconsistent.
    /// - [`AmmError::InvalidPool`] if a pool's reserves or fee are invalid.
    /// - [`AmmError::InvalidAsset`] if a symbol or pair is malformed.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
