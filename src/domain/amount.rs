//! Fixed-point token amount.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Decimals, Rounding};
use crate::error::{AmmError, Result};
use crate::math::mul_div;

/// A non-negative token quantity stored as an integer mantissa.
///
/// The scale is implicit: an `Amount` for an asset with `d` decimals
/// holds `value × 10^d`.  The engine itself never interprets the scale;
/// only the presentation-boundary helpers ([`from_decimal_str`](Self::from_decimal_str),
/// [`to_decimal`](Self::to_decimal)) take a [`Decimals`] argument.
///
/// Comparisons are exact integer comparisons.  Arithmetic methods are
/// checked and return `None`/`Err` instead of panicking or wrapping.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, Decimals, Rounding};
///
/// let usdc = Decimals::new(6).expect("valid");
/// let a = Amount::from_decimal_str("1.5", usdc).expect("parses");
/// assert_eq!(a, Amount::new(1_500_000));
/// assert_eq!(a.checked_sub(&Amount::new(500_000)), Some(Amount::new(1_000_000)));
/// assert_eq!(a.mul_div(997, 1_000, Rounding::Down), Ok(Amount::new(1_495_500)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw scaled value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying scaled value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` if the result would be negative.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `self × numerator / denominator` through a 256-bit
    /// intermediate.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
    pub fn mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding) -> Result<Self> {
        mul_div(self.0, numerator, denominator, rounding).map(Self)
    }

    /// Parses a human-readable decimal string into a scaled amount.
    ///
    /// The conversion is exact: `"1.25"` with 6 decimals is `1_250_000`.
    /// Inputs carrying more fractional digits than `decimals` are rejected
    /// rather than silently truncated.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if the string is not a decimal
    /// number, is negative, or is more precise than the asset allows, and
    /// [`AmmError::Overflow`] if the scaled value does not fit.
    pub fn from_decimal_str(input: &str, decimals: Decimals) -> Result<Self> {
        let parsed = Decimal::from_str(input.trim())
            .map_err(|_| AmmError::InvalidAmount("not a decimal number"))?;
        if parsed.is_sign_negative() && !parsed.is_zero() {
            return Err(AmmError::InvalidAmount("amount must not be negative"));
        }

        let normalized = parsed.normalize();
        let scale = normalized.scale();
        let target = u32::from(decimals.get());
        if scale > target {
            return Err(AmmError::InvalidAmount(
                "more fractional digits than the asset supports",
            ));
        }

        let mantissa = normalized.mantissa().unsigned_abs();
        let factor = 10u128.pow(target - scale);
        mantissa
            .checked_mul(factor)
            .map(Self)
            .ok_or(AmmError::Overflow("scaled amount exceeds u128"))
    }

    /// Converts the scaled amount to a display [`Decimal`].
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the amount exceeds the 96-bit
    /// mantissa of [`Decimal`].
    pub fn to_decimal(&self, decimals: Decimals) -> Result<Decimal> {
        let signed =
            i128::try_from(self.0).map_err(|_| AmmError::Overflow("amount exceeds i128"))?;
        Decimal::try_from_i128_with_scale(signed, u32::from(decimals.get()))
            .map_err(|_| AmmError::Overflow("amount exceeds decimal range"))
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
