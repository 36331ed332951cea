//! Asset identity.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Decimals};
use crate::error::{AmmError, Result};

/// Longest accepted asset symbol.
const MAX_SYMBOL_LEN: usize = 16;

/// An immutable asset identity: a ticker symbol plus its decimal precision.
///
/// The symbol is opaque to the engine; the precision is only used at the
/// presentation boundary to scale human amounts.  Symbols are 1–16 ASCII
/// alphanumeric characters (`.`, `-` and `_` are also allowed), which
/// keeps the `BASE/QUOTE` pair notation unambiguous.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Asset, Decimals};
///
/// let usdc = Asset::new("USDC", Decimals::new(6).expect("valid")).expect("valid symbol");
/// assert_eq!(usdc.symbol(), "USDC");
/// assert_eq!(usdc.parse_amount("2.5"), Ok(Amount::new(2_500_000)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawAsset")]
pub struct Asset {
    symbol: String,
    decimals: Decimals,
}

#[derive(Deserialize)]
struct RawAsset {
    symbol: String,
    decimals: Decimals,
}

impl TryFrom<RawAsset> for Asset {
    type Error = AmmError;

    fn try_from(raw: RawAsset) -> Result<Self> {
        Self::new(raw.symbol, raw.decimals)
    }
}

impl Asset {
    /// Creates a validated asset.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if the symbol is empty, too long,
    /// or contains characters outside `[A-Za-z0-9._-]`.
    pub fn new(symbol: impl Into<String>, decimals: Decimals) -> Result<Self> {
        let symbol = symbol.into();
        validate_symbol(&symbol)?;
        Ok(Self { symbol, decimals })
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the decimal precision.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Parses a human-readable amount of this asset.
    ///
    /// # Errors
    ///
    /// See [`Amount::from_decimal_str`].
    pub fn parse_amount(&self, human: &str) -> Result<Amount> {
        Amount::from_decimal_str(human, self.decimals)
    }
}

pub(crate) fn validate_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(AmmError::InvalidAsset("symbol must not be empty"));
    }
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(AmmError::InvalidAsset("symbol longer than 16 characters"));
    }
    if !symbol
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_'))
    {
        return Err(AmmError::InvalidAsset("symbol contains invalid characters"));
    }
    Ok(())
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
