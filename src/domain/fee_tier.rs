//! Swap fee rate of a pool.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::BPS_DENOMINATOR;
use super::{Amount, BasisPoints, Rounding};
use crate::error::{AmmError, Result};

/// The fee a pool retains from every swap input, in basis points.
///
/// Valid fees lie in `[0, 10 000)`: a 100% fee would leave nothing to
/// trade and is rejected at construction.
///
/// The fee is deducted from the input **before** the pricing formula:
///
/// ```text
/// effective_input = floor(amount_in × (10 000 − fee_bps) / 10 000)
/// fee             = amount_in − effective_input
/// ```
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, FeeTier};
///
/// let fee = FeeTier::TIER_0_30_PERCENT;
/// assert_eq!(fee.effective_input(Amount::new(1_000)), Ok(Amount::new(997)));
/// assert_eq!(fee.effective_input(Amount::new(1)), Ok(Amount::ZERO));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// No fee.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 0.05%, for stable pairs.
    pub const TIER_0_05_PERCENT: Self = Self(BasisPoints::new(5));

    /// 0.30%, the classic constant-product fee.
    pub const TIER_0_30_PERCENT: Self = Self(BasisPoints::new(30));

    /// 1.00%, for exotic pairs.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a validated fee tier.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if `bps ≥ 10 000`.
    pub const fn new(bps: BasisPoints) -> Result<Self> {
        if bps.get() >= BasisPoints::MAX_PERCENT.get() {
            return Err(AmmError::InvalidFee("fee must be below 10000 bps"));
        }
        Ok(Self(bps))
    }

    /// Returns the fee in basis points.
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Returns the part of `amount_in` that reaches the pricing curve.
    ///
    /// # Errors
    ///
    /// Never fails for valid tiers; the `Result` carries the
    /// [`AmmError::Overflow`] contract of the underlying `mul_div`.
    pub fn effective_input(&self, amount_in: Amount) -> Result<Amount> {
        self.0.complement().apply(amount_in, Rounding::Down)
    }

    /// Returns the smallest gross input whose effective part is at least
    /// `net`: `ceil(net × 10 000 / (10 000 − fee_bps))`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the gross amount exceeds `u128`.
    pub fn gross_input_for(&self, net: Amount) -> Result<Amount> {
        net.mul_div(
            BPS_DENOMINATOR,
            u128::from(self.0.complement().get()),
            Rounding::Up,
        )
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_0_30_PERCENT
    }
}

impl TryFrom<u32> for FeeTier {
    type Error = AmmError;

    fn try_from(bps: u32) -> Result<Self> {
        Self::new(BasisPoints::new(bps))
    }
}

impl From<FeeTier> for u32 {
    fn from(fee: FeeTier) -> Self {
        fee.0.get()
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}
