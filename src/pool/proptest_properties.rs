//! Property-based tests using `proptest` for pool invariant validation.
//!
//! 1. **Invariant monotonicity**: `k` never decreases across swaps.
//! 2. **No profit from zero**: a zero-sized trade is always rejected.
//! 3. **Liquidity round trip**: deposit then full withdrawal returns the
//!    deposit within one LP unit's worth of each reserve.
//! 4. **Direction symmetry**: the input required for a target output,
//!    priced forward, yields at least the target.
//! 5. **Monotonic price impact**: more input, strictly more impact.

use proptest::prelude::*;

use super::Pool;
use crate::domain::{Amount, BasisPoints, Direction, Liquidity, PairId, SwapSpec};
use crate::engine::{LiquidityEngine, SwapQuoteEngine};
use crate::error::AmmError;
use crate::math::wide_mul;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

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

fn k(pool: &Pool) -> primitive_types::U256 {
    wide_mul(pool.reserve_a().get(), pool.reserve_b().get())
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in range [10_000, 1_000_000_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=1_000_000_000_000u128
}

/// Fee tiers from zero to 1%.
fn fee_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![Just(0u32), Just(5), Just(30), Just(100)]
}

fn direction_strategy() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::AToB), Just(Direction::BToA)]
}

// ---------------------------------------------------------------------------
// Property 1: Invariant monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_k_never_decreases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        trades in prop::collection::vec((1u128..=1_000_000_000u128, direction_strategy()), 1..16),
    ) {
        let mut pool = make_pool(ra, rb, fee);
        for (amount, direction) in trades {
            let Ok(quote) = SwapQuoteEngine::quote_exact_in(&pool, Amount::new(amount), direction)
            else {
                continue;
            };
            let before = k(&pool);
            prop_assert!(pool.apply_swap(&quote).is_ok());
            prop_assert!(k(&pool) >= before);
            prop_assert!(!pool.reserve_a().is_zero() && !pool.reserve_b().is_zero());
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: No profit from zero
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_zero_input_rejected(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
    ) {
        let pool = make_pool(ra, rb, fee);
        prop_assert!(matches!(
            SwapQuoteEngine::quote_exact_in(&pool, Amount::ZERO, direction),
            Err(AmmError::InvalidAmount(_))
        ));
        prop_assert!(SwapSpec::exact_in(Amount::ZERO).is_err());
    }
}

// ---------------------------------------------------------------------------
// Property 3: Liquidity round trip
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_round_trip_is_exact(
        a in 1u128..=1_000_000_000_000u128,
        b in 1u128..=1_000_000_000_000u128,
    ) {
        let Ok(mut pool) = Pool::uninitialized(pair(), BasisPoints::new(30)) else {
            panic!("valid pool");
        };
        let Ok(add) = LiquidityEngine::quote_add(&pool, Amount::new(a), Amount::new(b)) else {
            panic!("first deposit accepted");
        };
        prop_assert!(pool.apply_liquidity_add(&add).is_ok());
        let Ok(remove) = LiquidityEngine::quote_remove(&pool, add.lp_minted()) else {
            panic!("full burn accepted");
        };
        prop_assert_eq!(remove.withdraw_a(), Amount::new(a));
        prop_assert_eq!(remove.withdraw_b(), Amount::new(b));
        prop_assert!(pool.apply_liquidity_remove(&remove).is_ok());
        prop_assert_eq!(pool.total_lp_supply(), Liquidity::ZERO);
    }

    #[test]
    fn prop_ratio_deposit_round_trip(
        ra in 10_000u128..=1_000_000_000u128,
        ratio in 1u128..=100u128,
        deposit_pct in 1u128..=100u128,
    ) {
        let rb = ra * ratio;
        let mut pool = make_pool(ra, rb, 30);
        let a = (ra * deposit_pct / 100).max(1);
        let b = a * ratio;

        let Ok(add) = LiquidityEngine::quote_add(&pool, Amount::new(a), Amount::new(b)) else {
            return Ok(());
        };
        prop_assert_eq!(add.deposit_a(), Amount::new(a));
        prop_assert_eq!(add.deposit_b(), Amount::new(b));
        prop_assert!(pool.apply_liquidity_add(&add).is_ok());

        let Ok(remove) = LiquidityEngine::quote_remove(&pool, add.lp_minted()) else {
            return Ok(());
        };
        let supply = pool.total_lp_supply().get();
        let unit_a = pool.reserve_a().get().div_ceil(supply);
        let unit_b = pool.reserve_b().get().div_ceil(supply);
        let (wa, wb) = (remove.withdraw_a().get(), remove.withdraw_b().get());
        prop_assert!(wa <= a && a - wa <= unit_a + 1, "a={} withdrew {}", a, wa);
        prop_assert!(wb <= b && b - wb <= unit_b + 1, "b={} withdrew {}", b, wb);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Direction symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_exact_out_covers_target(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        target_pct in 1u128..=9_000u128,
    ) {
        let pool = make_pool(ra, rb, fee);
        let (_, reserve_out) = pool.reserves(direction);
        let target = Amount::new((reserve_out.get() * target_pct / 10_000).max(1));

        let Ok(required) = SwapQuoteEngine::required_input(&pool, target, direction) else {
            panic!("target below reserve is always reachable");
        };
        let Ok(forward) = SwapQuoteEngine::quote_exact_in(&pool, required, direction) else {
            panic!("required input is always tradable");
        };
        prop_assert!(forward.output_amount() >= target);

        let Ok(quote) = SwapQuoteEngine::quote_exact_out(&pool, target, direction) else {
            panic!("exact-out quote");
        };
        prop_assert_eq!(quote.input_amount(), required);
        prop_assert_eq!(quote.output_amount(), forward.output_amount());
    }
}

// ---------------------------------------------------------------------------
// Property 5: Monotonic price impact
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_impact_strictly_increases(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        fee in fee_strategy(),
        direction in direction_strategy(),
        small_pct in 1u128..=500_000u128,
        extra_pct in 1u128..=500_000u128,
    ) {
        let pool = make_pool(ra, rb, fee);
        let (reserve_in, _) = pool.reserves(direction);
        // inputs up to 10× the input-side reserve
        let small = (reserve_in.get() * small_pct / 100_000).max(1);
        let large = small + (reserve_in.get() * extra_pct / 100_000).max(1);

        let (Ok(lo), Ok(hi)) = (
            SwapQuoteEngine::price_impact(&pool, Amount::new(small), direction),
            SwapQuoteEngine::price_impact(&pool, Amount::new(large), direction),
        ) else {
            panic!("impact defined for non-zero input");
        };
        prop_assert!(lo.is_negative() && hi.is_negative());
        prop_assert!(hi.magnitude() > lo.magnitude(), "{} vs {}", hi, lo);
    }
}
