//! Top-level engine configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::PoolConfig;
use crate::domain::BasisPoints;
use crate::error::{AmmError, Result};

const fn default_slippage_bps() -> BasisPoints {
    BasisPoints::new(50)
}

const fn default_high_impact_bps() -> BasisPoints {
    BasisPoints::new(500)
}

/// Declarative blueprint for a [`PoolRegistry`](crate::registry::PoolRegistry).
///
/// # Fields
///
/// - `default_slippage_bps`: tolerance applied by
///   [`PoolRegistry::default_slippage`](crate::registry::PoolRegistry::default_slippage)
///   (default 50 bp = 0.5%).
/// - `high_impact_bps`: price-impact magnitude above which the registry
///   logs a warning for a quote (default 500 bp = 5%).
/// - `pools`: pools to create at start-up.
///
/// # Validation
///
/// Call [`validate()`](EngineConfig::validate) (done automatically by
/// [`from_json_str`](EngineConfig::from_json_str)) to check every pool and
/// reject duplicates; a pair and its reverse count as the same market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_slippage_bps")]
    pub default_slippage_bps: BasisPoints,
    #[serde(default = "default_high_impact_bps")]
    pub high_impact_bps: BasisPoints,
    #[serde(default)]
    pub pools: Vec<PoolConfig>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_slippage_bps: default_slippage_bps(),
            high_impact_bps: default_high_impact_bps(),
            pools: Vec::new(),
        }
    }
}

impl EngineConfig {
    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the JSON is malformed or a
    ///   value fails to deserialize (including invalid symbols or decimals).
    /// - Any error from [`validate`](Self::validate).
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| AmmError::InvalidConfiguration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates thresholds, every pool, and pair uniqueness.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if a threshold exceeds 100% or
    ///   a market is configured twice.
    /// - The first error returned by a pool's [`PoolConfig::validate`].
    pub fn validate(&self) -> Result<()> {
        if !self.default_slippage_bps.is_valid_percent() {
            return Err(AmmError::InvalidConfiguration(format!(
                "default_slippage_bps {} exceeds 100%",
                self.default_slippage_bps.get()
            )));
        }
        if !self.high_impact_bps.is_valid_percent() {
            return Err(AmmError::InvalidConfiguration(format!(
                "high_impact_bps {} exceeds 100%",
                self.high_impact_bps.get()
            )));
        }
        let mut seen = HashSet::with_capacity(self.pools.len());
        for pool in &self.pools {
            pool.validate()?;
            let id = pool.pair_id()?;
            if seen.contains(&id) || seen.contains(&id.reversed()) {
                return Err(AmmError::InvalidConfiguration(format!(
                    "pool {id} configured more than once"
                )));
            }
            seen.insert(id);
        }
        Ok(())
    }
}
