//! Priced swap, ready to be applied.

use core::fmt;

use serde::Serialize;

use super::{Amount, BasisPoints, Direction, Percent, Price, SwapType};

/// The immutable result of pricing a swap against one pool state.
///
/// A quote carries the pool version it was computed at and the reserves
/// it saw; applying it to a pool that has since moved fails with
/// [`StaleQuote`](crate::error::AmmError::StaleQuote).  It holds no
/// reference to the pool itself.
///
/// # Invariants
///
/// - `input_amount = effective_input + fee_amount`, `effective_input > 0`.
/// - `0 < output_amount < reserve_out_before`.
/// - `price_impact < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SwapQuote {
    direction: Direction,
    swap_type: SwapType,
    input_amount: Amount,
    output_amount: Amount,
    fee_amount: Amount,
    effective_input: Amount,
    effective_price: Price,
    spot_price_before: Price,
    price_impact: Percent,
    reserve_in_before: Amount,
    reserve_out_before: Amount,
    pool_version: u64,
}

/// Field bundle for [`SwapQuote::new`]; keeps the engine's call site legible.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SwapQuoteParts {
    pub direction: Direction,
    pub swap_type: SwapType,
    pub input_amount: Amount,
    pub output_amount: Amount,
    pub fee_amount: Amount,
    pub effective_input: Amount,
    pub effective_price: Price,
    pub spot_price_before: Price,
    pub price_impact: Percent,
    pub reserve_in_before: Amount,
    pub reserve_out_before: Amount,
    pub pool_version: u64,
}

impl SwapQuote {
    pub(crate) const fn new(parts: SwapQuoteParts) -> Self {
        Self {
            direction: parts.direction,
            swap_type: parts.swap_type,
            input_amount: parts.input_amount,
            output_amount: parts.output_amount,
            fee_amount: parts.fee_amount,
            effective_input: parts.effective_input,
            effective_price: parts.effective_price,
            spot_price_before: parts.spot_price_before,
            price_impact: parts.price_impact,
            reserve_in_before: parts.reserve_in_before,
            reserve_out_before: parts.reserve_out_before,
            pool_version: parts.pool_version,
        }
    }

    /// Side the trader pays into.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether the input or the output was fixed by the caller.
    #[must_use]
    pub const fn swap_type(&self) -> SwapType {
        self.swap_type
    }

    /// Gross amount paid in, fee included.
    pub const fn input_amount(&self) -> Amount {
        self.input_amount
    }

    /// Amount received.
    pub const fn output_amount(&self) -> Amount {
        self.output_amount
    }

    /// Portion of the input retained by the pool as fee.
    pub const fn fee_amount(&self) -> Amount {
        self.fee_amount
    }

    /// Input that actually moved along the curve.
    pub const fn effective_input(&self) -> Amount {
        self.effective_input
    }

    /// `output_amount / input_amount`.
    #[must_use]
    pub const fn effective_price(&self) -> Price {
        self.effective_price
    }

    /// `reserve_out / reserve_in` before the trade.
    #[must_use]
    pub const fn spot_price_before(&self) -> Price {
        self.spot_price_before
    }

    /// Signed deviation of the execution price from spot, in percent.
    #[must_use]
    pub const fn price_impact(&self) -> Percent {
        self.price_impact
    }

    pub const fn reserve_in_before(&self) -> Amount {
        self.reserve_in_before
    }

    pub const fn reserve_out_before(&self) -> Amount {
        self.reserve_out_before
    }

    /// Pool version the quote was computed at.
    #[must_use]
    pub const fn pool_version(&self) -> u64 {
        self.pool_version
    }

    /// Returns `true` if the impact magnitude is strictly above `threshold`.
    #[must_use]
    pub const fn is_high_impact(&self, threshold: BasisPoints) -> bool {
        self.price_impact.magnitude() > Percent::from_bps(threshold).magnitude()
    }
}

impl fmt::Display for SwapQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SwapQuote({} in={}, out={}, fee={}, impact={}, v{})",
            self.direction,
            self.input_amount,
            self.output_amount,
            self.fee_amount,
            self.price_impact,
            self.pool_version
        )
    }
}
