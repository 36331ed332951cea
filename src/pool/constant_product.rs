//! Constant-product pool state (`x · y = k`).
//!
//! A [`Pool`] only changes by applying a quote that was priced against
//! its current version.  Every application:
//!
//! 1. checks the quote's version against the pool's (`StaleQuote`),
//! 2. computes every new field into locals with checked arithmetic,
//! 3. verifies the pool invariants on the locals,
//! 4. commits all fields and bumps the version.
//!
//! A failure at any step leaves the pool untouched.
//!
//! # Invariants
//!
//! - `total_lp_supply > 0` ⇔ `reserve_a > 0 ∧ reserve_b > 0`.
//! - `reserve_a × reserve_b` never decreases across a swap (checked in
//!   256 bits).
//! - `version` increases by exactly one per successful application.

use core::fmt;

use crate::config::PoolConfig;
use crate::domain::{
    AddLiquidityQuote, Amount, BasisPoints, Direction, FeeTier, Liquidity, LiquidityQuote, PairId,
    PoolSnapshot, RemoveLiquidityQuote, SwapQuote,
};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, sqrt_product, wide_mul};
use crate::traits::{FromConfig, Versioned};

/// Reserves, fee and LP supply of one trading pair.
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::domain::{Amount, BasisPoints, Direction, SwapSpec};
/// use hydra_cpmm::engine::SwapQuoteEngine;
/// use hydra_cpmm::pool::Pool;
///
/// let mut pool = Pool::create(
///     "ETH/USDC".parse().expect("valid pair"),
///     Amount::new(1_000_000),
///     Amount::new(1_000_000),
///     BasisPoints::new(30),
/// )
/// .expect("valid pool");
/// assert_eq!(pool.total_lp_supply().get(), 1_000_000);
///
/// let spec = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
/// let quote = SwapQuoteEngine::quote(&pool, spec, Direction::AToB, None).expect("quote");
/// assert_eq!(quote.output_amount(), Amount::new(996));
///
/// let after = pool.apply_swap(&quote).expect("fresh quote");
/// assert_eq!(after.reserve_a, Amount::new(1_001_000));
/// assert_eq!(after.reserve_b, Amount::new(999_004));
/// assert_eq!(after.version, 1);
///
/// // The same quote is now stale.
/// assert!(pool.apply_swap(&quote).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pair: PairId,
    fee: FeeTier,
    reserve_a: Amount,
    reserve_b: Amount,
    total_lp: Liquidity,
    accumulated_fees_a: Amount,
    accumulated_fees_b: Amount,
    version: u64,
}

impl Pool {
    /// Creates a live pool and mints `⌊√(reserve_a × reserve_b)⌋` LP units
    /// to the creator.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPool`] if either reserve is zero or
    /// `fee_bps` is not in `[0, 10 000)`.
    pub fn create(
        pair: PairId,
        reserve_a: Amount,
        reserve_b: Amount,
        fee_bps: BasisPoints,
    ) -> Result<Self> {
        if reserve_a.is_zero() || reserve_b.is_zero() {
            return Err(AmmError::InvalidPool("reserves must be non-zero"));
        }
        let mut pool = Self::uninitialized(pair, fee_bps)?;
        pool.reserve_a = reserve_a;
        pool.reserve_b = reserve_b;
        pool.total_lp = Liquidity::new(sqrt_product(reserve_a.get(), reserve_b.get()));
        Ok(pool)
    }

    /// Creates an empty pool that awaits its first deposit.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidPool`] if `fee_bps` is not in `[0, 10 000)`.
    pub fn uninitialized(pair: PairId, fee_bps: BasisPoints) -> Result<Self> {
        let fee = FeeTier::new(fee_bps)
            .map_err(|_| AmmError::InvalidPool("fee must be below 10000 bps"))?;
        Ok(Self {
            pair,
            fee,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            total_lp: Liquidity::ZERO,
            accumulated_fees_a: Amount::ZERO,
            accumulated_fees_b: Amount::ZERO,
            version: 0,
        })
    }

    #[must_use]
    pub const fn pair(&self) -> &PairId {
        &self.pair
    }

    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    pub const fn reserve_a(&self) -> Amount {
        self.reserve_a
    }

    pub const fn reserve_b(&self) -> Amount {
        self.reserve_b
    }

    #[must_use]
    pub const fn total_lp_supply(&self) -> Liquidity {
        self.total_lp
    }

    /// Lifetime fee retained on side A.
    pub const fn accumulated_fees_a(&self) -> Amount {
        self.accumulated_fees_a
    }

    /// Lifetime fee retained on side B.
    pub const fn accumulated_fees_b(&self) -> Amount {
        self.accumulated_fees_b
    }

    /// Monotonic mutation counter, starting at 0.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns `true` once the pool holds liquidity.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        !self.total_lp.is_zero()
    }

    /// Returns `(reserve_in, reserve_out)` for a trade in `direction`.
    pub const fn reserves(&self, direction: Direction) -> (Amount, Amount) {
        match direction {
            Direction::AToB => (self.reserve_a, self.reserve_b),
            Direction::BToA => (self.reserve_b, self.reserve_a),
        }
    }

    /// Returns a copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> PoolSnapshot {
        PoolSnapshot {
            pair: self.pair.clone(),
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            fee: self.fee,
            total_lp_supply: self.total_lp,
            version: self.version,
            accumulated_fees_a: self.accumulated_fees_a,
            accumulated_fees_b: self.accumulated_fees_b,
        }
    }

    /// Applies a swap quote.
    ///
    /// The input (fee included) is added to the input-side reserve and the
    /// output is removed from the other side.  The fee part is also added
    /// to that side's fee counter.
    ///
    /// # Errors
    ///
    /// - [`AmmError::StaleQuote`] if the pool moved since the quote.
    /// - [`AmmError::InsufficientLiquidity`] if the output would empty the
    ///   output-side reserve.
    /// - [`AmmError::InvariantViolation`] if the quote does not match the
    ///   reserves it claims, or would decrease `k`.
    /// - [`AmmError::Overflow`] if a reserve or counter overflows.
    pub fn apply_swap(&mut self, quote: &SwapQuote) -> Result<PoolSnapshot> {
        self.ensure_current(quote)?;
        let direction = quote.direction();
        let (reserve_in, reserve_out) = self.reserves(direction);
        if (reserve_in, reserve_out) != (quote.reserve_in_before(), quote.reserve_out_before()) {
            return Err(AmmError::InvariantViolation(
                "quote reserves do not match the pool",
            ));
        }
        let consistent_fee = quote
            .effective_input()
            .checked_add(&quote.fee_amount())
            .is_some_and(|total| total == quote.input_amount());
        if !consistent_fee {
            return Err(AmmError::InvariantViolation(
                "quote input is not effective input plus fee",
            ));
        }

        let new_out = reserve_out
            .checked_sub(&quote.output_amount())
            .filter(|r| !r.is_zero())
            .ok_or(AmmError::InsufficientLiquidity)?;
        let new_in = reserve_in.safe_add(&quote.input_amount())?;
        if wide_mul(new_in.get(), new_out.get()) < wide_mul(reserve_in.get(), reserve_out.get()) {
            return Err(AmmError::InvariantViolation("swap would decrease k"));
        }

        let (reserve_a, reserve_b, fees_a, fees_b) = match direction {
            Direction::AToB => (
                new_in,
                new_out,
                self.accumulated_fees_a.safe_add(&quote.fee_amount())?,
                self.accumulated_fees_b,
            ),
            Direction::BToA => (
                new_out,
                new_in,
                self.accumulated_fees_a,
                self.accumulated_fees_b.safe_add(&quote.fee_amount())?,
            ),
        };
        let version = self.next_version()?;

        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.accumulated_fees_a = fees_a;
        self.accumulated_fees_b = fees_b;
        self.version = version;
        Ok(self.snapshot())
    }

    /// Applies a deposit quote.  On an empty pool the deposit becomes the
    /// opening reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::StaleQuote`] if the pool moved since the quote.
    /// - [`AmmError::InvariantViolation`] if the quote was priced against
    ///   other reserves or another LP supply.
    /// - [`AmmError::InvalidAmount`] if a deposit side or the minted LP is zero.
    /// - [`AmmError::Overflow`] if a reserve or the supply overflows.
    pub fn apply_liquidity_add(&mut self, quote: &AddLiquidityQuote) -> Result<PoolSnapshot> {
        self.ensure_current(quote)?;
        self.ensure_priced_state(quote.state_before())?;
        if quote.deposit_a().is_zero() || quote.deposit_b().is_zero() {
            return Err(AmmError::InvalidAmount("deposit must include both assets"));
        }
        if quote.lp_minted().is_zero() {
            return Err(AmmError::InvalidAmount("deposit mints no LP units"));
        }
        let reserve_a = self.reserve_a.safe_add(&quote.deposit_a())?;
        let reserve_b = self.reserve_b.safe_add(&quote.deposit_b())?;
        let total_lp = self.total_lp.safe_add(&quote.lp_minted())?;
        self.commit_liquidity(reserve_a, reserve_b, total_lp)
    }

    /// Applies a withdrawal quote.  Burning the whole supply returns the
    /// pool to its empty state.
    ///
    /// # Errors
    ///
    /// - [`AmmError::StaleQuote`] if the pool moved since the quote.
    /// - [`AmmError::InvariantViolation`] if the quote was priced against
    ///   other reserves or another LP supply.
    /// - [`AmmError::InvalidAmount`] if more LP is burned than exists.
    /// - [`AmmError::InsufficientLiquidity`] if a withdrawal exceeds a reserve.
    /// - [`AmmError::InvariantViolation`] if a partial burn would empty a side.
    pub fn apply_liquidity_remove(&mut self, quote: &RemoveLiquidityQuote) -> Result<PoolSnapshot> {
        self.ensure_current(quote)?;
        self.ensure_priced_state(quote.state_before())?;
        let total_lp = self
            .total_lp
            .checked_sub(&quote.lp_burned())
            .ok_or(AmmError::InvalidAmount("burn exceeds LP supply"))?;
        let reserve_a = self
            .reserve_a
            .checked_sub(&quote.withdraw_a())
            .ok_or(AmmError::InsufficientLiquidity)?;
        let reserve_b = self
            .reserve_b
            .checked_sub(&quote.withdraw_b())
            .ok_or(AmmError::InsufficientLiquidity)?;
        self.commit_liquidity(reserve_a, reserve_b, total_lp)
    }

    /// Applies either kind of liquidity quote.
    ///
    /// # Errors
    ///
    /// See [`apply_liquidity_add`](Self::apply_liquidity_add) and
    /// [`apply_liquidity_remove`](Self::apply_liquidity_remove).
    pub fn apply_liquidity(&mut self, quote: &LiquidityQuote) -> Result<PoolSnapshot> {
        match quote {
            LiquidityQuote::Add(q) => self.apply_liquidity_add(q),
            LiquidityQuote::Remove(q) => self.apply_liquidity_remove(q),
        }
    }

    fn ensure_priced_state(
        &self,
        (reserve_a, reserve_b, lp_supply): (Amount, Amount, Liquidity),
    ) -> Result<()> {
        if (reserve_a, reserve_b, lp_supply) != (self.reserve_a, self.reserve_b, self.total_lp) {
            return Err(AmmError::InvariantViolation(
                "quote was priced against another pool state",
            ));
        }
        Ok(())
    }

    fn commit_liquidity(
        &mut self,
        reserve_a: Amount,
        reserve_b: Amount,
        total_lp: Liquidity,
    ) -> Result<PoolSnapshot> {
        let funded = !reserve_a.is_zero() && !reserve_b.is_zero();
        let drained = reserve_a.is_zero() && reserve_b.is_zero();
        let consistent = if total_lp.is_zero() { drained } else { funded };
        if !consistent {
            return Err(AmmError::InvariantViolation(
                "LP supply and reserves out of step",
            ));
        }
        let version = self.next_version()?;
        self.reserve_a = reserve_a;
        self.reserve_b = reserve_b;
        self.total_lp = total_lp;
        self.version = version;
        Ok(self.snapshot())
    }

    fn next_version(&self) -> Result<u64> {
        self.version
            .checked_add(1)
            .ok_or(AmmError::Overflow("pool version overflow"))
    }
}

impl Versioned for Pool {
    fn pool_version(&self) -> u64 {
        self.version
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Builds a live pool, or an empty one when both reserves are zero.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        let pair = config.pair_id()?;
        let fee_bps = BasisPoints::new(config.fee_bps);
        if config.is_uninitialized() {
            Self::uninitialized(pair, fee_bps)
        } else {
            Self::create(pair, config.reserve_a, config.reserve_b, fee_bps)
        }
    }
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool({}, a={}, b={}, lp={}, {}, v{})",
            self.pair, self.reserve_a, self.reserve_b, self.total_lp, self.fee, self.version
        )
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Asset, Decimals, SwapSpec};
    use crate::engine::{LiquidityEngine, SwapQuoteEngine};

    fn pair() -> PairId {
        let Ok(id) = PairId::new("ETH", "USDC") else {
            panic!("valid pair");
        };
        id
    }

    fn make_pool(ra: u128, rb: u128, fee_bps: u32) -> Pool {
        let Ok(pool) = Pool::create(
            pair(),
            Amount::new(ra),
            Amount::new(rb),
            BasisPoints::new(fee_bps),
        ) else {
            panic!("valid pool");
        };
        pool
    }

    fn quote_in(pool: &Pool, amount: u128, direction: Direction) -> SwapQuote {
        let Ok(spec) = SwapSpec::exact_in(Amount::new(amount)) else {
            panic!("non-zero");
        };
        let Ok(q) = SwapQuoteEngine::quote(pool, spec, direction, None) else {
            panic!("expected quote");
        };
        q
    }

    // -- create -------------------------------------------------------------

    mod create {
        use super::*;

        #[test]
        fn mints_geometric_mean() {
            let pool = make_pool(100, 400, 30);
            assert_eq!(pool.total_lp_supply(), Liquidity::new(200));
            assert_eq!(pool.version(), 0);
            assert!(pool.is_initialized());
        }

        #[test]
        fn zero_reserve_rejected() {
            for (a, b) in [(0, 1), (1, 0), (0, 0)] {
                let Err(AmmError::InvalidPool(_)) =
                    Pool::create(pair(), Amount::new(a), Amount::new(b), BasisPoints::new(30))
                else {
                    panic!("expected InvalidPool for ({a}, {b})");
                };
            }
        }

        #[test]
        fn fee_out_of_range_rejected() {
            let Err(AmmError::InvalidPool(_)) = Pool::create(
                pair(),
                Amount::new(1),
                Amount::new(1),
                BasisPoints::new(10_000),
            ) else {
                panic!("expected InvalidPool");
            };
            assert!(Pool::uninitialized(pair(), BasisPoints::new(9_999)).is_ok());
        }

        #[test]
        fn uninitialized_is_empty() {
            let Ok(pool) = Pool::uninitialized(pair(), BasisPoints::new(30)) else {
                panic!("expected Ok");
            };
            assert!(!pool.is_initialized());
            assert!(pool.snapshot().is_empty());
            assert_eq!(pool.reserves(Direction::AToB), (Amount::ZERO, Amount::ZERO));
        }

        #[test]
        fn from_config() {
            let Ok(d) = Decimals::new(6) else {
                panic!("valid decimals");
            };
            let (Ok(a), Ok(b)) = (Asset::new("ETH", d), Asset::new("USDC", d)) else {
                panic!("valid assets");
            };
            let cfg = PoolConfig {
                asset_a: a,
                asset_b: b,
                fee_bps: 5,
                reserve_a: Amount::new(9),
                reserve_b: Amount::new(16),
            };
            let Ok(pool) = Pool::from_config(&cfg) else {
                panic!("expected Ok");
            };
            assert_eq!(pool.pair().to_string(), "ETH/USDC");
            assert_eq!(pool.fee().basis_points().get(), 5);
            assert_eq!(pool.total_lp_supply(), Liquidity::new(12));

            let empty = PoolConfig {
                reserve_a: Amount::ZERO,
                reserve_b: Amount::ZERO,
                ..cfg
            };
            let Ok(pool) = Pool::from_config(&empty) else {
                panic!("expected Ok");
            };
            assert!(!pool.is_initialized());
        }
    }

    // -- apply_swap ---------------------------------------------------------

    mod apply_swap {
        use super::*;

        #[test]
        fn a_to_b_updates_reserves_and_fees() {
            let mut pool = make_pool(1_000_000, 1_000_000, 30);
            let q = quote_in(&pool, 1_000, Direction::AToB);
            let Ok(snap) = pool.apply_swap(&q) else {
                panic!("expected Ok");
            };
            assert_eq!(snap.reserve_a, Amount::new(1_001_000));
            assert_eq!(snap.reserve_b, Amount::new(999_004));
            assert_eq!(snap.accumulated_fees_a, Amount::new(3));
            assert_eq!(snap.accumulated_fees_b, Amount::ZERO);
            assert_eq!(snap.version, 1);
            assert_eq!(snap, pool.snapshot());
        }

        #[test]
        fn b_to_a_updates_other_side() {
            let mut pool = make_pool(1_000_000, 2_000_000, 30);
            let q = quote_in(&pool, 10_000, Direction::BToA);
            let Ok(snap) = pool.apply_swap(&q) else {
                panic!("expected Ok");
            };
            assert_eq!(snap.reserve_b, Amount::new(2_010_000));
            assert_eq!(snap.reserve_a.get(), 1_000_000 - q.output_amount().get());
            assert_eq!(snap.accumulated_fees_b, Amount::new(30));
        }

        #[test]
        fn k_never_decreases() {
            let mut pool = make_pool(1_000_000, 2_450_320_000, 30);
            for (amount, direction) in [
                (2, Direction::AToB),
                (500_000, Direction::BToA),
                (777, Direction::AToB),
                (1_234_567, Direction::BToA),
            ] {
                let k_before = wide_mul(pool.reserve_a().get(), pool.reserve_b().get());
                let q = quote_in(&pool, amount, direction);
                assert!(pool.apply_swap(&q).is_ok());
                let k_after = wide_mul(pool.reserve_a().get(), pool.reserve_b().get());
                assert!(k_after >= k_before);
            }
        }

        #[test]
        fn stale_quote_rejected_without_mutation() {
            let mut pool = make_pool(1_000_000, 1_000_000, 30);
            let first = quote_in(&pool, 1_000, Direction::AToB);
            let second = quote_in(&pool, 2_000, Direction::AToB);
            assert!(pool.apply_swap(&first).is_ok());
            let before = pool.clone();
            let Err(AmmError::StaleQuote { quoted, current }) = pool.apply_swap(&second) else {
                panic!("expected StaleQuote");
            };
            assert_eq!((quoted, current), (0, 1));
            assert_eq!(pool, before);
        }

        #[test]
        fn quote_from_another_pool_rejected() {
            let other = make_pool(5_000_000, 5_000_000, 30);
            let q = quote_in(&other, 1_000, Direction::AToB);
            let mut pool = make_pool(1_000_000, 1_000_000, 30);
            let Err(AmmError::InvariantViolation(_)) = pool.apply_swap(&q) else {
                panic!("expected InvariantViolation");
            };
            assert_eq!(pool.version(), 0);
        }
    }

    // -- apply_liquidity ----------------------------------------------------

    mod apply_liquidity {
        use super::*;

        #[test]
        fn first_deposit_opens_pool() {
            let Ok(mut pool) = Pool::uninitialized(pair(), BasisPoints::new(30)) else {
                panic!("expected Ok");
            };
            let Ok(q) = LiquidityEngine::quote_add(&pool, Amount::new(100), Amount::new(400))
            else {
                panic!("expected quote");
            };
            let Ok(snap) = pool.apply_liquidity(&q.into()) else {
                panic!("expected Ok");
            };
            assert_eq!(snap.reserve_a, Amount::new(100));
            assert_eq!(snap.reserve_b, Amount::new(400));
            assert_eq!(snap.total_lp_supply, Liquidity::new(200));
            assert_eq!(snap.version, 1);
        }

        #[test]
        fn full_burn_returns_to_empty() {
            let mut pool = make_pool(100, 400, 30);
            let Ok(q) = LiquidityEngine::quote_remove(&pool, Liquidity::new(200)) else {
                panic!("expected quote");
            };
            let Ok(snap) = pool.apply_liquidity_remove(&q) else {
                panic!("expected Ok");
            };
            assert!(snap.is_empty());
            assert_eq!((snap.reserve_a, snap.reserve_b), (Amount::ZERO, Amount::ZERO));
            assert!(!pool.is_initialized());
        }

        #[test]
        fn stale_liquidity_quote_rejected() {
            let mut pool = make_pool(1_000, 1_000, 30);
            let Ok(add) = LiquidityEngine::quote_add(&pool, Amount::new(10), Amount::new(10)) else {
                panic!("expected quote");
            };
            let swap = quote_in(&pool, 50, Direction::AToB);
            assert!(pool.apply_swap(&swap).is_ok());
            let Err(AmmError::StaleQuote { .. }) = pool.apply_liquidity_add(&add) else {
                panic!("expected StaleQuote");
            };
            assert_eq!(pool.total_lp_supply(), Liquidity::new(1_000));
        }

        #[test]
        fn quote_from_other_pool_rejected_at_same_version() {
            let priced_on = make_pool(1_000_000, 1_000_000, 30);
            let mut target = make_pool(5_000_000, 1_000_000, 30);
            let before = target.snapshot();

            let Ok(add) =
                LiquidityEngine::quote_add(&priced_on, Amount::new(1_000), Amount::new(1_000))
            else {
                panic!("expected quote");
            };
            let Ok(remove) = LiquidityEngine::quote_remove(&priced_on, Liquidity::new(1_000))
            else {
                panic!("expected quote");
            };
            assert_eq!(add.pool_version(), target.version());

            let Err(AmmError::InvariantViolation(_)) = target.apply_liquidity_add(&add) else {
                panic!("expected InvariantViolation for deposit");
            };
            let Err(AmmError::InvariantViolation(_)) = target.apply_liquidity_remove(&remove)
            else {
                panic!("expected InvariantViolation for withdrawal");
            };
            assert_eq!(target.snapshot(), before);
        }
    }
}
