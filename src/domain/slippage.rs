//! Caller-supplied slippage protection.

use serde::{Deserialize, Serialize};

use super::{Amount, BasisPoints, Percent, Rounding};
use crate::error::{AmmError, Result};

/// Bounds a quote must satisfy to be returned.
///
/// Both bounds are optional and checked independently:
/// `min_output` is a floor on the amount received, `max_price_impact` is a
/// ceiling on the magnitude of the quote's price impact.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, BasisPoints, SlippageBound};
///
/// // 0.5% tolerance on an expected 10 000 units of output.
/// let bound = SlippageBound::from_tolerance(Amount::new(10_000), BasisPoints::new(50))
///     .expect("tolerance within 100%");
/// assert_eq!(bound.min_output(), Some(Amount::new(9_950)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SlippageBound {
    min_output: Option<Amount>,
    max_price_impact: Option<BasisPoints>,
}

impl SlippageBound {
    /// A bound that accepts every quote.
    pub const NONE: Self = Self {
        min_output: None,
        max_price_impact: None,
    };

    /// Requires at least `min_output` units out.
    #[must_use]
    pub const fn with_min_output(mut self, min_output: Amount) -> Self {
        self.min_output = Some(min_output);
        self
    }

    /// Caps the price-impact magnitude.
    #[must_use]
    pub const fn with_max_price_impact(mut self, max: BasisPoints) -> Self {
        self.max_price_impact = Some(max);
        self
    }

    /// Builds a minimum-output bound from an expected output and a
    /// tolerance: `floor(expected × (10 000 − tolerance) / 10 000)`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidFee`] if the tolerance exceeds 100%.
    pub fn from_tolerance(expected_output: Amount, tolerance: BasisPoints) -> Result<Self> {
        if !tolerance.is_valid_percent() {
            return Err(AmmError::InvalidFee("slippage tolerance above 100%"));
        }
        let min = tolerance.complement().apply(expected_output, Rounding::Down)?;
        Ok(Self::NONE.with_min_output(min))
    }

    /// Returns the minimum acceptable output, if any.
    #[must_use]
    pub const fn min_output(&self) -> Option<Amount> {
        self.min_output
    }

    /// Returns the maximum acceptable price-impact magnitude, if any.
    #[must_use]
    pub const fn max_price_impact(&self) -> Option<BasisPoints> {
        self.max_price_impact
    }

    /// Checks a quote's output and impact against the bound.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SlippageExceeded`] if either bound is violated.
    pub fn check(&self, output: Amount, impact: Percent) -> Result<()> {
        let max_impact = self.max_price_impact.map(|bps| bps.to_percent());
        let output_ok = self.min_output.is_none_or(|min| output >= min);
        let impact_ok = max_impact.is_none_or(|max| impact.magnitude() <= max.magnitude());
        if output_ok && impact_ok {
            return Ok(());
        }
        Err(AmmError::SlippageExceeded {
            output,
            min_output: self.min_output,
            impact,
            max_impact,
        })
    }
}
