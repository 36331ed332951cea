//! Trade requests: which side of a swap the trader pins.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::{AmmError, Result};

/// Which side of a quote was fixed by the caller.
///
/// Carried on every [`SwapQuote`](super::SwapQuote) so the applied trade
/// can be reported the way it was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    /// Input pinned; output priced.
    ExactIn,
    /// Output pinned; input priced.
    ExactOut,
}

impl fmt::Display for SwapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ExactIn => "exact-in",
            Self::ExactOut => "exact-out",
        })
    }
}

/// What a trader fixes when asking for a quote: the amount paid in, or
/// the amount to receive.
///
/// A zero amount is rejected at construction, so a quote for nothing can
/// never reach the pricing math.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Amount, SwapSpec, SwapType};
///
/// let sell = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
/// assert_eq!(sell.swap_type(), SwapType::ExactIn);
/// assert!(SwapSpec::exact_out(Amount::ZERO).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SwapSpec {
    /// Sell exactly `amount_in`.
    ExactIn { amount_in: Amount },
    /// Buy exactly `amount_out`, paying whatever the curve requires.
    ExactOut { amount_out: Amount },
}

impl SwapSpec {
    /// Sell exactly `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount` is zero.
    pub fn exact_in(amount: Amount) -> Result<Self> {
        Ok(Self::ExactIn {
            amount_in: non_zero(amount)?,
        })
    }

    /// Buy exactly `amount`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAmount`] if `amount` is zero.
    pub fn exact_out(amount: Amount) -> Result<Self> {
        Ok(Self::ExactOut {
            amount_out: non_zero(amount)?,
        })
    }

    #[must_use]
    pub const fn is_exact_in(&self) -> bool {
        matches!(self, Self::ExactIn { .. })
    }

    #[must_use]
    pub const fn is_exact_out(&self) -> bool {
        matches!(self, Self::ExactOut { .. })
    }

    /// The pinned amount, on whichever side it was pinned.
    #[must_use]
    pub const fn amount(&self) -> Amount {
        match self {
            Self::ExactIn { amount_in } => *amount_in,
            Self::ExactOut { amount_out } => *amount_out,
        }
    }

    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        match self {
            Self::ExactIn { .. } => SwapType::ExactIn,
            Self::ExactOut { .. } => SwapType::ExactOut,
        }
    }
}

fn non_zero(amount: Amount) -> Result<Amount> {
    if amount.is_zero() {
        return Err(AmmError::InvalidAmount("swap amount must be non-zero"));
    }
    Ok(amount)
}

impl fmt::Display for SwapSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.swap_type(), self.amount())
    }
}
