//! LP minting and redemption.
//!
//! # Deposit
//!
//! - Empty pool: both amounts are taken as given and
//!   `lp = ⌊√(desired_a × desired_b)⌋`.
//! - Otherwise the deposit is trimmed to the current ratio on one side:
//!   `required_b = ⌊desired_a × reserve_b / reserve_a⌋`; if that exceeds
//!   `desired_b`, `required_a = ⌊desired_b × reserve_a / reserve_b⌋` is
//!   used instead.  LP is minted from both sides
//!   (`⌊supply × deposit_x / reserve_x⌋`) and the smaller value wins; the
//!   two may differ by at most one unit.
//!
//! # Withdrawal
//!
//! `withdraw_x = ⌊reserve_x × burn / supply⌋` for each side.

use crate::domain::{
    AddLiquidityQuote, Amount, BPS_DENOMINATOR, BasisPoints, Liquidity, Percent,
    RemoveLiquidityQuote, Rounding,
};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, mul_div, sqrt_product};
use crate::pool::Pool;

/// Largest accepted gap between the LP amounts implied by each side.
const RATIO_TOLERANCE: u128 = 1;

/// Stateless liquidity pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiquidityEngine;

impl LiquidityEngine {
    /// Prices a deposit of up to `desired_a` and `desired_b`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if either amount is zero, or the
    ///   deposit is too small to mint LP at the current ratio.
    /// - [`AmmError::RatioMismatch`] if the two sides imply LP amounts more
    ///   than one unit apart.
    /// - [`AmmError::Overflow`] if an intermediate exceeds `u128`.
    pub fn quote_add(
        pool: &Pool,
        desired_a: Amount,
        desired_b: Amount,
    ) -> Result<AddLiquidityQuote> {
        if desired_a.is_zero() || desired_b.is_zero() {
            return Err(AmmError::InvalidAmount("deposit must include both assets"));
        }
        if !pool.is_initialized() {
            let lp_minted = Liquidity::new(sqrt_product(desired_a.get(), desired_b.get()));
            return Ok(AddLiquidityQuote {
                deposit_a: desired_a,
                deposit_b: desired_b,
                lp_minted,
                pool_share: Percent::ONE_HUNDRED,
                reserve_a_before: pool.reserve_a(),
                reserve_b_before: pool.reserve_b(),
                lp_supply_before: pool.total_lp_supply(),
                pool_version: pool.version(),
            });
        }

        let (reserve_a, reserve_b) = (pool.reserve_a(), pool.reserve_b());
        let required_b = desired_a.safe_mul_div(reserve_b.get(), reserve_a.get(), Rounding::Down)?;
        let (deposit_a, deposit_b) = if required_b <= desired_b {
            (desired_a, required_b)
        } else {
            let required_a =
                desired_b.safe_mul_div(reserve_a.get(), reserve_b.get(), Rounding::Down)?;
            (required_a, desired_b)
        };
        if deposit_a.is_zero() || deposit_b.is_zero() {
            return Err(AmmError::InvalidAmount(
                "deposit too small for the current ratio",
            ));
        }

        let supply = pool.total_lp_supply().get();
        let lp_from_a = mul_div(supply, deposit_a.get(), reserve_a.get(), Rounding::Down)?;
        let lp_from_b = mul_div(supply, deposit_b.get(), reserve_b.get(), Rounding::Down)?;
        if lp_from_a.abs_diff(lp_from_b) > RATIO_TOLERANCE {
            return Err(AmmError::RatioMismatch {
                lp_from_a,
                lp_from_b,
            });
        }
        let lp_minted = Liquidity::new(lp_from_a.min(lp_from_b));
        if lp_minted.is_zero() {
            return Err(AmmError::InvalidAmount("deposit too small to mint LP"));
        }

        let supply_after = pool.total_lp_supply().safe_add(&lp_minted)?;
        Ok(AddLiquidityQuote {
            deposit_a,
            deposit_b,
            lp_minted,
            pool_share: Percent::from_ratio(lp_minted.get(), supply_after.get(), Rounding::Down)?,
            reserve_a_before: pool.reserve_a(),
            reserve_b_before: pool.reserve_b(),
            lp_supply_before: pool.total_lp_supply(),
            pool_version: pool.version(),
        })
    }

    /// Prices burning `lp_to_burn` LP units.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if the burn is zero, exceeds the LP
    ///   supply, or is too small to withdraw something from both sides.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is empty.
    pub fn quote_remove(pool: &Pool, lp_to_burn: Liquidity) -> Result<RemoveLiquidityQuote> {
        if lp_to_burn.is_zero() {
            return Err(AmmError::InvalidAmount("burn must be non-zero"));
        }
        let supply = pool.total_lp_supply();
        if supply.is_zero() {
            return Err(AmmError::InsufficientLiquidity);
        }
        if lp_to_burn > supply {
            return Err(AmmError::InvalidAmount("burn exceeds LP supply"));
        }

        let withdraw_a =
            pool.reserve_a()
                .safe_mul_div(lp_to_burn.get(), supply.get(), Rounding::Down)?;
        let withdraw_b =
            pool.reserve_b()
                .safe_mul_div(lp_to_burn.get(), supply.get(), Rounding::Down)?;
        if withdraw_a.is_zero() || withdraw_b.is_zero() {
            return Err(AmmError::InvalidAmount(
                "burn too small to withdraw both assets",
            ));
        }

        Ok(RemoveLiquidityQuote {
            lp_burned: lp_to_burn,
            withdraw_a,
            withdraw_b,
            pool_share: Percent::from_ratio(lp_to_burn.get(), supply.get(), Rounding::Down)?,
            reserve_a_before: pool.reserve_a(),
            reserve_b_before: pool.reserve_b(),
            lp_supply_before: pool.total_lp_supply(),
            pool_version: pool.version(),
        })
    }

    /// Prices burning `percent` of a held LP balance (e.g. the 25/50/75/100%
    /// presets), rounding the burn down.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidAmount`] if `percent` is zero or above 100%, or
    ///   `held` is zero.
    /// - Any error of [`quote_remove`](Self::quote_remove).
    pub fn quote_remove_percent(
        pool: &Pool,
        held: Liquidity,
        percent: BasisPoints,
    ) -> Result<RemoveLiquidityQuote> {
        if percent.get() == 0 || !percent.is_valid_percent() {
            return Err(AmmError::InvalidAmount("percentage must be in (0, 100]"));
        }
        if held.is_zero() {
            return Err(AmmError::InvalidAmount("no LP balance held"));
        }
        let burn = held.safe_mul_div(u128::from(percent.get()), BPS_DENOMINATOR, Rounding::Down)?;
        Self::quote_remove(pool, burn)
    }
}
