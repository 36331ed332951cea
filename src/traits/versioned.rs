//! Optimistic-concurrency version stamps.

use crate::error::{AmmError, Result};

/// Something tagged with the pool version it was observed at.
///
/// Pools expose their current version; quotes expose the version they were
/// priced against.  Applying a quote whose version differs from the pool's
/// is rejected as stale.
pub trait Versioned {
    /// The pool version this value refers to.
    fn pool_version(&self) -> u64;

    /// Fails with [`AmmError::StaleQuote`] unless `quote` was computed at
    /// this value's version.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::StaleQuote`] on a version mismatch.
    fn ensure_current<Q: Versioned + ?Sized>(&self, quote: &Q) -> Result<()> {
        let (quoted, current) = (quote.pool_version(), self.pool_version());
        if quoted == current {
            Ok(())
        } else {
            Err(AmmError::StaleQuote { quoted, current })
        }
    }
}

impl Versioned for crate::domain::SwapQuote {
    fn pool_version(&self) -> u64 {
        Self::pool_version(self)
    }
}

impl Versioned for crate::domain::LiquidityQuote {
    fn pool_version(&self) -> u64 {
        Self::pool_version(self)
    }
}

impl Versioned for crate::domain::AddLiquidityQuote {
    fn pool_version(&self) -> u64 {
        Self::pool_version(self)
    }
}

impl Versioned for crate::domain::RemoveLiquidityQuote {
    fn pool_version(&self) -> u64 {
        Self::pool_version(self)
    }
}

impl Versioned for crate::domain::PoolSnapshot {
    fn pool_version(&self) -> u64 {
        self.version
    }
}
