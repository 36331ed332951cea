//! Swap pricing against a pool snapshot.
//!
//! # Exact input (A → B shown; B → A is symmetric)
//!
//! ```text
//! effective_input = ⌊amount_in × (10 000 − fee_bps) / 10 000⌋
//! fee             = amount_in − effective_input
//! amount_out      = ⌊effective_input × reserve_b / (reserve_a + effective_input)⌋
//! ```
//!
//! # Exact output
//!
//! ```text
//! net_input = ⌈reserve_a × amount_out / (reserve_b − amount_out)⌉
//! amount_in = ⌈net_input × 10 000 / (10 000 − fee_bps)⌉
//! ```
//!
//! The gross input is then priced forward, so the quoted output is never
//! below the requested one.
//!
//! # Price impact
//!
//! Measured on the curve, before the fee and before integer flooring:
//!
//! ```text
//! x      = amount_in × (10 000 − fee_bps)          (scaled by 10 000)
//! impact = −x / (reserve_in × 10 000 + x) × 100
//! ```
//!
//! This is `(execution − spot) / spot` for the fee-adjusted input.  It is
//! rounded away from zero, so it is strictly negative for every accepted
//! trade and strictly grows in magnitude with the input.

use primitive_types::U256;

use crate::domain::{
    Amount, BPS_DENOMINATOR, Direction, Percent, Price, Rounding, SlippageBound, SwapQuote,
    SwapQuoteParts, SwapSpec, SwapType, WAD,
};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, wide_mul};
use crate::pool::Pool;

/// Stateless swap pricer.
///
/// Every method reads the pool and returns a value; nothing is mutated,
/// so quotes may be computed concurrently from shared references.
#[derive(Debug, Clone, Copy, Default)]
pub struct SwapQuoteEngine;

impl SwapQuoteEngine {
    /// Prices `spec` and checks the result against an optional bound.
    ///
    /// # Errors
    ///
    /// - Any error of [`quote_exact_in`](Self::quote_exact_in) or
    ///   [`quote_exact_out`](Self::quote_exact_out).
    /// - [`AmmError::SlippageExceeded`] if `bound` rejects the quote.
    pub fn quote(
        pool: &Pool,
        spec: SwapSpec,
        direction: Direction,
        bound: Option<&SlippageBound>,
    ) -> Result<SwapQuote> {
        let quote = match spec {
            SwapSpec::ExactIn { amount_in } => Self::quote_exact_in(pool, amount_in, direction)?,
            SwapSpec::ExactOut { amount_out } => {
                Self::quote_exact_out(pool, amount_out, direction)?
            }
        };
        if let Some(bound) = bound {
            bound.check(quote.output_amount(), quote.price_impact())?;
        }
        Ok(quote)
    }

    /// Prices a trade paying exactly `amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero or too small to
    ///   leave anything after the fee.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty or the
    ///   output rounds to zero.
    /// - [`AmmError::ExcessiveOutput`] if the output would drain the pool.
    /// - [`AmmError::Overflow`] if an intermediate exceeds its type.
    pub fn quote_exact_in(pool: &Pool, amount_in: Amount, direction: Direction) -> Result<SwapQuote> {
        Self::price(pool, amount_in, direction, SwapType::ExactIn)
    }

    /// Prices a trade receiving at least `amount_out`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_out` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::ExcessiveOutput`] if `amount_out` is not below the
    ///   output-side reserve.
    /// - [`AmmError::Overflow`] if the required input exceeds `u128`.
    pub fn quote_exact_out(
        pool: &Pool,
        amount_out: Amount,
        direction: Direction,
    ) -> Result<SwapQuote> {
        let amount_in = Self::required_input(pool, amount_out, direction)?;
        Self::price(pool, amount_in, direction, SwapType::ExactOut)
    }

    /// Smallest gross input whose forward quote yields at least
    /// `amount_out`.
    ///
    /// # Errors
    ///
    /// See [`quote_exact_out`](Self::quote_exact_out).
    pub fn required_input(pool: &Pool, amount_out: Amount, direction: Direction) -> Result<Amount> {
        if amount_out.is_zero() {
            return Err(AmmError::InvalidAmount("swap output must be non-zero"));
        }
        let (reserve_in, reserve_out) = live_reserves(pool, direction)?;
        if amount_out >= reserve_out {
            return Err(AmmError::ExcessiveOutput);
        }
        let remaining = reserve_out.safe_sub(&amount_out)?;
        let net = reserve_in.safe_mul_div(amount_out.get(), remaining.get(), Rounding::Up)?;
        pool.fee().gross_input_for(net)
    }

    /// Spot price `reserve_out / reserve_in` for `direction`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    /// - [`AmmError::Overflow`] if the ratio exceeds [`Price`]'s range.
    pub fn spot_price(pool: &Pool, direction: Direction) -> Result<Price> {
        let (reserve_in, reserve_out) = live_reserves(pool, direction)?;
        Price::from_ratio(reserve_out, reserve_in, Rounding::Down)
    }

    /// Curve price impact of paying `amount_in` in `direction`, net of the
    /// pool fee.  See the module docs for the formula.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    pub fn price_impact(pool: &Pool, amount_in: Amount, direction: Direction) -> Result<Percent> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be non-zero"));
        }
        let (reserve_in, _) = live_reserves(pool, direction)?;
        let complement = u128::from(pool.fee().basis_points().complement().get());
        curve_impact(amount_in, reserve_in, complement)
    }

    fn price(
        pool: &Pool,
        amount_in: Amount,
        direction: Direction,
        swap_type: SwapType,
    ) -> Result<SwapQuote> {
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount("swap input must be non-zero"));
        }
        let (reserve_in, reserve_out) = live_reserves(pool, direction)?;

        let effective_input = pool.fee().effective_input(amount_in)?;
        if effective_input.is_zero() {
            return Err(AmmError::InvalidAmount("input too small to cover the fee"));
        }
        let fee_amount = amount_in.safe_sub(&effective_input)?;

        let denominator = reserve_in.safe_add(&effective_input)?;
        let output_amount =
            effective_input.safe_mul_div(reserve_out.get(), denominator.get(), Rounding::Down)?;
        if output_amount.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        if output_amount >= reserve_out {
            return Err(AmmError::ExcessiveOutput);
        }

        let complement = u128::from(pool.fee().basis_points().complement().get());
        Ok(SwapQuote::new(SwapQuoteParts {
            direction,
            swap_type,
            input_amount: amount_in,
            output_amount,
            fee_amount,
            effective_input,
            effective_price: Price::from_ratio(output_amount, amount_in, Rounding::Down)?,
            spot_price_before: Price::from_ratio(reserve_out, reserve_in, Rounding::Down)?,
            price_impact: curve_impact(amount_in, reserve_in, complement)?,
            reserve_in_before: reserve_in,
            reserve_out_before: reserve_out,
            pool_version: pool.version(),
        }))
    }
}

fn live_reserves(pool: &Pool, direction: Direction) -> Result<(Amount, Amount)> {
    let (reserve_in, reserve_out) = pool.reserves(direction);
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok((reserve_in, reserve_out))
}

fn curve_impact(amount_in: Amount, reserve_in: Amount, complement: u128) -> Result<Percent> {
    let scaled_in = wide_mul(amount_in.get(), complement);
    // each term < 2^142, so neither the sum nor the scaled numerator overflows
    let denominator = wide_mul(reserve_in.get(), BPS_DENOMINATOR) + scaled_in;
    if denominator.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = (scaled_in * U256::from(100 * WAD)).div_mod(denominator);
    let magnitude = if remainder.is_zero() {
        quotient
    } else {
        quotient + U256::one()
    };
    // scaled_in ≤ denominator, so the magnitude is at most 100%.
    let magnitude = i128::try_from(magnitude.low_u128())
        .map_err(|_| AmmError::Overflow("price impact exceeds i128"))?;
    Percent::from_raw(magnitude).checked_neg()
}
