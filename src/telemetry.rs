//! Logging setup for binaries and demos embedding the engine.
//!
//! The library itself only emits [`tracing`] events; installing a
//! subscriber is left to the caller.  [`init_tracing`] is a convenience
//! that reads `RUST_LOG` and falls back to a given directive.

use tracing_subscriber::EnvFilter;

use crate::error::{AmmError, Result};

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`, or by
/// `default_directive` (e.g. `"hydra_cpmm=info"`) when unset.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if the directive does not
/// parse or a global subscriber is already installed.
pub fn init_tracing(default_directive: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directive)
            .map_err(|e| AmmError::InvalidConfiguration(format!("log filter: {e}")))?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| AmmError::InvalidConfiguration(format!("log subscriber: {e}")))
}
