//! Trading-pair identity.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Asset;
use super::asset::validate_symbol;
use crate::error::{AmmError, Result};

/// Identifier of a trading pair, written `BASE/QUOTE` (e.g. `ETH/USDC`).
///
/// The order is significant: the base is the pool's asset A and the quote
/// its asset B, so `ETH/USDC` and `USDC/ETH` name opposite orientations
/// of the same market.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::PairId;
///
/// let id: PairId = "ETH/USDC".parse().expect("valid pair");
/// assert_eq!(id.base(), "ETH");
/// assert_eq!(id.quote(), "USDC");
/// assert_eq!(id.reversed().to_string(), "USDC/ETH");
/// assert!("ETH/ETH".parse::<PairId>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PairId {
    base: String,
    quote: String,
}

impl PairId {
    /// Creates a pair identifier from two symbols.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if either symbol is malformed or
    /// both are equal.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Result<Self> {
        let base = base.into();
        let quote = quote.into();
        validate_symbol(&base)?;
        validate_symbol(&quote)?;
        if base == quote {
            return Err(AmmError::InvalidAsset(
                "pair requires two distinct symbols",
            ));
        }
        Ok(Self { base, quote })
    }

    /// Returns the base (asset A) symbol.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the quote (asset B) symbol.
    #[must_use]
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Returns the identifier with base and quote swapped.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
        }
    }
}

impl FromStr for PairId {
    type Err = AmmError;

    fn from_str(s: &str) -> Result<Self> {
        let Some((base, quote)) = s.split_once('/') else {
            return Err(AmmError::InvalidAsset("pair must be written BASE/QUOTE"));
        };
        Self::new(base.trim(), quote.trim())
    }
}

impl TryFrom<String> for PairId {
    type Error = AmmError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PairId> for String {
    fn from(id: PairId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base, self.quote)
    }
}

/// The two assets of a pool, in A/B order.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Asset, AssetPair, Decimals};
///
/// let eth = Asset::new("ETH", Decimals::new(18).expect("ok")).expect("ok");
/// let usdc = Asset::new("USDC", Decimals::new(6).expect("ok")).expect("ok");
/// let pair = AssetPair::new(eth, usdc).expect("distinct");
/// assert_eq!(pair.id().to_string(), "ETH/USDC");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AssetPair {
    asset_a: Asset,
    asset_b: Asset,
}

impl AssetPair {
    /// Creates a pair of two distinct assets.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if both assets share a symbol.
    pub fn new(asset_a: Asset, asset_b: Asset) -> Result<Self> {
        if asset_a.symbol() == asset_b.symbol() {
            return Err(AmmError::InvalidAsset(
                "pair requires two distinct symbols",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A (the base).
    #[must_use]
    pub const fn asset_a(&self) -> &Asset {
        &self.asset_a
    }

    /// Returns asset B (the quote).
    #[must_use]
    pub const fn asset_b(&self) -> &Asset {
        &self.asset_b
    }

    /// Returns the `A/B` identifier of this pair.
    #[must_use]
    pub fn id(&self) -> PairId {
        PairId {
            base: self.asset_a.symbol().to_owned(),
            quote: self.asset_b.symbol().to_owned(),
        }
    }
}
