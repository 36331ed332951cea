//! Configuration of a single constant-product pool.

use serde::{Deserialize, Serialize};

use crate::domain::{Amount, Asset, AssetPair, BasisPoints, FeeTier, PairId};
use crate::error::{AmmError, Result};

const fn default_fee_bps() -> u32 {
    30
}

/// Declarative description of one pool: its two assets, fee and opening
/// reserves.
///
/// # Derived Values
///
/// - Pair identifier: `asset_a/asset_b`
/// - Initial LP supply: `⌊√(reserve_a × reserve_b)⌋`
/// - Initial spot price of A in B: `reserve_b / reserve_a`
///
/// # Validation
///
/// - The assets must have distinct symbols.
/// - `fee_bps` must be below 10 000 (defaults to 30).
/// - Reserves are either both non-zero (a live pool) or both zero, which
///   registers an empty pool awaiting its first deposit.  Reserves default
///   to zero when omitted.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::config::PoolConfig;
///
/// let cfg: PoolConfig = serde_json::from_str(r#"{
///     "asset_a": { "symbol": "ETH", "decimals": 18 },
///     "asset_b": { "symbol": "USDC", "decimals": 6 },
///     "reserve_a": 1000000,
///     "reserve_b": 2450320000
/// }"#).expect("well-formed");
/// assert_eq!(cfg.fee_bps, 30);
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.pair_id().map(|id| id.to_string()), Ok("ETH/USDC".to_owned()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolConfig {
    /// Asset A (the base of the pair).
    pub asset_a: Asset,
    /// Asset B (the quote of the pair).
    pub asset_b: Asset,
    /// Swap fee in basis points.
    #[serde(default = "default_fee_bps")]
    pub fee_bps: u32,
    /// Opening reserve of asset A.
    #[serde(default)]
    pub reserve_a: Amount,
    /// Opening reserve of asset B.
    #[serde(default)]
    pub reserve_b: Amount,
}

impl PoolConfig {
    /// Creates a configuration for a live pool with the given reserves.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`validate`](Self::validate).
    pub fn new(
        asset_a: Asset,
        asset_b: Asset,
        fee_bps: u32,
        reserve_a: Amount,
        reserve_b: Amount,
    ) -> Result<Self> {
        let config = Self {
            asset_a,
            asset_b,
            fee_bps,
            reserve_a,
            reserve_b,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAsset`] if both assets share a symbol.
    /// - [`AmmError::InvalidPool`] if the fee is 100% or more, or exactly
    ///   one reserve is zero.
    pub fn validate(&self) -> Result<()> {
        self.pair()?;
        self.fee()?;
        if self.reserve_a.is_zero() != self.reserve_b.is_zero() {
            return Err(AmmError::InvalidPool(
                "reserves must be both zero or both non-zero",
            ));
        }
        Ok(())
    }

    /// Returns `true` if the pool starts empty.
    #[must_use]
    pub const fn is_uninitialized(&self) -> bool {
        self.reserve_a.is_zero() && self.reserve_b.is_zero()
    }

    /// Returns the validated asset pair.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both assets share a symbol.
    pub fn pair(&self) -> Result<AssetPair> {
        AssetPair::new(self.asset_a.clone(), self.asset_b.clone())
    }

    /// Returns the `A/B` pair identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both assets share a symbol.
    pub fn pair_id(&self) -> Result<PairId> {
        self.pair().map(|p| p.id())
    }

    /// Returns the validated fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPool`] if `fee_bps ≥ 10 000`.
    pub fn fee(&self) -> Result<FeeTier> {
        FeeTier::new(BasisPoints::new(self.fee_bps))
            .map_err(|_| AmmError::InvalidPool("fee must be below 10000 bps"))
    }
}
