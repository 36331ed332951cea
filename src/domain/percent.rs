//! Signed fixed-point percentage.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fixed::{WAD, WAD_DECIMALS, write_wad};
use super::{BasisPoints, Rounding};
use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// A signed percentage with 18 fractional digits (`-0.1%` is
/// `-100_000_000_000_000_000`).
///
/// Used for price impact (always ≤ 0 for a constant-product trade) and
/// pool share.  Only the presentation layer should convert it to a
/// [`Decimal`] or a string.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{BasisPoints, Percent};
///
/// let half = Percent::from_bps(BasisPoints::new(50));
/// assert_eq!(half.to_string(), "0.5%");
/// assert!(Percent::from_raw(-1).is_negative());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Percent(i128);

impl Percent {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const ONE_HUNDRED: Self = Self(100 * WAD as i128);

    /// Wraps a raw mantissa (percent × `10^18`).
    #[must_use]
    pub const fn from_raw(mantissa: i128) -> Self {
        Self(mantissa)
    }

    /// Converts basis points exactly: 1 bp = 0.01% = `10^16` raw.
    #[must_use]
    pub const fn from_bps(bps: BasisPoints) -> Self {
        Self(bps.get() as i128 * (WAD as i128 / 100))
    }

    /// Computes `part / whole × 100` (non-negative).
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `whole` is zero.
    /// - [`AmmError::Overflow`] if the result does not fit.
    pub fn from_ratio(part: u128, whole: u128, rounding: Rounding) -> Result<Self> {
        let raw = mul_div(part, 100 * WAD, whole, rounding)?;
        i128::try_from(raw)
            .map(Self)
            .map_err(|_| AmmError::Overflow("percent exceeds i128"))
    }

    /// Returns the raw mantissa.
    #[must_use]
    pub const fn get(&self) -> i128 {
        self.0
    }

    /// Returns `true` for values strictly below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value as an unsigned mantissa.
    #[must_use]
    pub const fn magnitude(&self) -> u128 {
        self.0.unsigned_abs()
    }

    /// Returns the value negated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] for `i128::MIN`.
    pub const fn checked_neg(&self) -> Result<Self> {
        match self.0.checked_neg() {
            Some(v) => Ok(Self(v)),
            None => Err(AmmError::Overflow("percent negation overflow")),
        }
    }

    /// Converts to a display [`Decimal`] (e.g. `-0.0996`).
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the value exceeds the range of
    /// [`Decimal`].
    pub fn to_decimal(&self) -> Result<Decimal> {
        Decimal::try_from_i128_with_scale(self.0, WAD_DECIMALS)
            .map_err(|_| AmmError::Overflow("percent exceeds decimal range"))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_wad(f, self.is_negative(), self.magnitude())?;
        f.write_str("%")
    }
}
