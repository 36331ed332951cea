//! Fixed-point exchange rate.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::fixed::{WAD, WAD_DECIMALS, write_wad};
use super::{Amount, Rounding};
use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// Exchange rate `amount_out / amount_in` as an unsigned fixed-point number
/// with 18 fractional digits.
///
/// Prices are always derived from two integer amounts through
/// [`mul_div`], so two runs over the same reserves produce bit-identical
/// prices.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Price, Rounding};
///
/// let spot = Price::from_ratio(Amount::new(2_000), Amount::new(1_000), Rounding::Down)
///     .expect("non-zero denominator");
/// assert_eq!(spot.to_string(), "2");
///
/// let exec = Price::from_ratio(Amount::new(996), Amount::new(1_000), Rounding::Down)
///     .expect("non-zero denominator");
/// assert_eq!(exec.to_string(), "0.996");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u128);

impl Price {
    /// Scale factor of the mantissa (`10^18`).
    pub const SCALE: u128 = WAD;

    /// Zero.
    pub const ZERO: Self = Self(0);

    /// A 1:1 rate.
    pub const ONE: Self = Self(WAD);

    /// Wraps a raw mantissa (already scaled by `10^18`).
    #[must_use]
    pub const fn from_raw(mantissa: u128) -> Self {
        Self(mantissa)
    }

    /// Returns the raw mantissa.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Computes `numerator / denominator` at full 18-digit precision.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the rate exceeds the representable range.
    pub fn from_ratio(numerator: Amount, denominator: Amount, rounding: Rounding) -> Result<Self> {
        mul_div(numerator.get(), WAD, denominator.get(), rounding).map(Self)
    }

    /// Converts to a display [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the price exceeds the range of
    /// [`Decimal`] (about 7.9 × 10¹⁰ at 18 digits).
    pub fn to_decimal(&self) -> Result<Decimal> {
        let signed = i128::try_from(self.0).map_err(|_| AmmError::Overflow("price exceeds i128"))?;
        Decimal::try_from_i128_with_scale(signed, WAD_DECIMALS)
            .map_err(|_| AmmError::Overflow("price exceeds decimal range"))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_wad(f, false, self.0)
    }
}
