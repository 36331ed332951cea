//! Basis-point representation for percentages.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::{Amount, Percent, Rounding};
use crate::error::Result;

/// Number of basis points in 100%.
pub(crate) const BPS_DENOMINATOR: u128 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values are representable, but values above 10 000 are
/// meaningless as percentages; use [`is_valid_percent`](Self::is_valid_percent)
/// to check.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, BasisPoints, Rounding};
///
/// let bp = BasisPoints::new(2_500);
/// assert_eq!(bp.apply(Amount::new(1_000), Rounding::Down), Ok(Amount::new(250)));
/// assert_eq!(bp.complement().get(), 7_500);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(10_000);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` if the value is within `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= Self::MAX_PERCENT.0
    }

    /// Returns `10 000 − self`, saturating at zero for out-of-range values.
    #[must_use]
    pub const fn complement(&self) -> Self {
        Self(Self::MAX_PERCENT.0.saturating_sub(self.0))
    }

    /// Computes `amount × self / 10 000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if the
    /// quotient exceeds `u128` (only possible for values above 100%).
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        amount.mul_div(u128::from(self.0), BPS_DENOMINATOR, rounding)
    }

    /// Converts to an exact fixed-point [`Percent`] (30 bp → 0.30%).
    #[must_use]
    pub const fn to_percent(&self) -> Percent {
        Percent::from_bps(*self)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}
