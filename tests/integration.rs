//! Integration tests exercising the public API end to end.
//!
//! Flows run through [`PoolRegistry`] the way an embedding service would:
//! config loading, quote-then-apply swaps, liquidity lifecycle, stale
//! quote rejection, and concurrent traders on one pool.

#![allow(clippy::panic)]

use std::thread;

use hydra_cpmm::config::EngineConfig;
use hydra_cpmm::domain::{
    Amount, BasisPoints, Direction, Liquidity, PairId, SlippageBound, SwapSpec,
};
use hydra_cpmm::error::AmmError;
use hydra_cpmm::math::wide_mul;
use hydra_cpmm::registry::PoolRegistry;
use hydra_cpmm::traits::FromConfig;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn pair(s: &str) -> PairId {
    let Ok(id) = s.parse() else {
        panic!("valid pair");
    };
    id
}

fn registry_with(id: &PairId, ra: u128, rb: u128) -> PoolRegistry {
    let registry = PoolRegistry::new();
    let Ok(_) = registry.create_pool(id, Amount::new(ra), Amount::new(rb), BasisPoints::new(30))
    else {
        panic!("pool created");
    };
    registry
}

fn exact_in(amount: u128) -> SwapSpec {
    let Ok(s) = SwapSpec::exact_in(Amount::new(amount)) else {
        panic!("non-zero");
    };
    s
}

fn exact_out(amount: u128) -> SwapSpec {
    let Ok(s) = SwapSpec::exact_out(Amount::new(amount)) else {
        panic!("non-zero");
    };
    s
}

// ---------------------------------------------------------------------------
// Swap scenarios
// ---------------------------------------------------------------------------

#[test]
fn balanced_pool_swap_lifecycle() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 1_000_000);

    let Ok(quote) = registry.get_quote(&id, exact_in(1_000), Direction::AToB, None) else {
        panic!("quote");
    };
    assert_eq!(quote.output_amount(), Amount::new(996));
    assert_eq!(quote.fee_amount(), Amount::new(3));
    assert_eq!(quote.effective_input(), Amount::new(997));
    assert_eq!(quote.pool_version(), 0);

    let Ok(snap) = registry.apply_quote(&id, &quote) else {
        panic!("apply");
    };
    assert_eq!(snap.reserve_a, Amount::new(1_001_000));
    assert_eq!(snap.reserve_b, Amount::new(999_004));
    assert_eq!(snap.accumulated_fees_a, Amount::new(3));
    assert_eq!(snap.version, 1);

    // Swap back the other way on the moved pool.
    let Ok(back) = registry.get_quote(&id, exact_in(996), Direction::BToA, None) else {
        panic!("reverse quote");
    };
    assert_eq!(back.pool_version(), 1);
    assert!(back.output_amount() < Amount::new(1_000));
    let Ok(snap) = registry.apply_quote(&id, &back) else {
        panic!("reverse apply");
    };
    assert_eq!(snap.version, 2);
    assert_eq!(snap.accumulated_fees_b, back.fee_amount());
}

#[test]
fn dust_input_is_rejected_at_the_rounding_boundary() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 2_450_320_000);

    // 1 × 0.997 truncates to zero.
    assert!(matches!(
        registry.get_quote(&id, exact_in(1), Direction::AToB, None),
        Err(AmmError::InvalidAmount(_))
    ));

    // 2 × 0.997 truncates to one; 1 × 2 450 320 000 / 1 000 001 = 2450.
    let Ok(quote) = registry.get_quote(&id, exact_in(2), Direction::AToB, None) else {
        panic!("two units tradable");
    };
    assert_eq!(quote.effective_input(), Amount::new(1));
    assert_eq!(quote.output_amount(), Amount::new(2_450));
    assert_eq!(quote.fee_amount(), Amount::new(1));
}

#[test]
fn exact_out_delivers_at_least_the_target() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 2_450_320_000);

    let Ok(quote) = registry.get_quote(&id, exact_out(2_450_000), Direction::AToB, None) else {
        panic!("exact-out quote");
    };
    assert!(quote.output_amount() >= Amount::new(2_450_000));
    assert!(registry.apply_quote(&id, &quote).is_ok());

    let Ok(snap) = registry.get_pool_snapshot(&id) else {
        panic!("snapshot");
    };
    assert_eq!(
        snap.reserve_b,
        Amount::new(2_450_320_000 - quote.output_amount().get())
    );

    // Draining the whole side is impossible.
    assert!(matches!(
        registry.get_quote(&id, exact_out(snap.reserve_b.get()), Direction::AToB, None),
        Err(AmmError::ExcessiveOutput)
    ));
}

#[test]
fn slippage_bounds_are_enforced() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 1_000_000);

    let tight = SlippageBound::NONE.with_min_output(Amount::new(997));
    assert!(matches!(
        registry.get_quote(&id, exact_in(1_000), Direction::AToB, Some(tight)),
        Err(AmmError::SlippageExceeded { .. })
    ));

    // A 10% trade moves the curve by roughly 9%; a 5% impact cap rejects it.
    let capped = SlippageBound::NONE.with_max_price_impact(BasisPoints::new(500));
    assert!(matches!(
        registry.get_quote(&id, exact_in(100_000), Direction::AToB, Some(capped)),
        Err(AmmError::SlippageExceeded { .. })
    ));

    let loose = SlippageBound::NONE
        .with_min_output(Amount::new(990))
        .with_max_price_impact(BasisPoints::new(50));
    assert!(
        registry
            .get_quote(&id, exact_in(1_000), Direction::AToB, Some(loose))
            .is_ok()
    );
}

#[test]
fn stale_quote_is_rejected_and_pool_left_untouched() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 1_000_000);

    let (Ok(first), Ok(second)) = (
        registry.get_quote(&id, exact_in(1_000), Direction::AToB, None),
        registry.get_quote(&id, exact_in(5_000), Direction::BToA, None),
    ) else {
        panic!("quotes");
    };
    assert!(registry.apply_quote(&id, &first).is_ok());
    let Ok(before) = registry.get_pool_snapshot(&id) else {
        panic!("snapshot");
    };

    assert_eq!(
        registry.apply_quote(&id, &second),
        Err(AmmError::StaleQuote {
            quoted: 0,
            current: 1
        })
    );
    assert_eq!(registry.get_pool_snapshot(&id), Ok(before));
}

#[test]
fn quote_on_other_pair_is_not_applicable() {
    let eth_usdc = pair("ETH/USDC");
    let registry = registry_with(&eth_usdc, 1_000_000, 1_000_000);
    let uni_eth = pair("UNI/ETH");
    let Ok(_) = registry.create_pool(
        &uni_eth,
        Amount::new(5_000_000),
        Amount::new(1_000_000),
        BasisPoints::new(30),
    ) else {
        panic!("second pool");
    };

    let Ok(quote) = registry.get_quote(&eth_usdc, exact_in(1_000), Direction::AToB, None) else {
        panic!("quote");
    };
    // Same version, different reserves.
    assert!(matches!(
        registry.apply_quote(&uni_eth, &quote),
        Err(AmmError::InvariantViolation(_))
    ));
}

#[test]
fn liquidity_quote_on_other_pair_is_not_applicable() {
    let eth_usdc = pair("ETH/USDC");
    let registry = registry_with(&eth_usdc, 1_000_000, 1_000_000);
    let uni_eth = pair("UNI/ETH");
    let Ok(_) = registry.create_pool(
        &uni_eth,
        Amount::new(5_000_000),
        Amount::new(1_000_000),
        BasisPoints::new(30),
    ) else {
        panic!("second pool");
    };
    let Ok(before) = registry.get_pool_snapshot(&uni_eth) else {
        panic!("snapshot");
    };

    let (Ok(add), Ok(remove)) = (
        registry.get_add_liquidity_quote(&eth_usdc, Amount::new(1_000), Amount::new(1_000)),
        registry.get_remove_liquidity_quote(&eth_usdc, Liquidity::new(1_000)),
    ) else {
        panic!("liquidity quotes");
    };
    // Both pools sit at version 0; only the priced state tells them apart.
    assert_eq!(add.pool_version(), before.version);
    assert!(matches!(
        registry.apply_liquidity(&uni_eth, add),
        Err(AmmError::InvariantViolation(_))
    ));
    assert!(matches!(
        registry.apply_liquidity(&uni_eth, remove),
        Err(AmmError::InvariantViolation(_))
    ));
    assert_eq!(registry.get_pool_snapshot(&uni_eth), Ok(before));

    // The quotes remain good for the pool they were priced on.
    assert!(registry.apply_liquidity(&eth_usdc, add).is_ok());
}

#[test]
fn liquidity_quotes_go_stale_after_a_swap() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 1_000_000);

    let (Ok(add), Ok(remove), Ok(swap)) = (
        registry.get_add_liquidity_quote(&id, Amount::new(10_000), Amount::new(10_000)),
        registry.get_remove_liquidity_quote(&id, Liquidity::new(10_000)),
        registry.get_quote(&id, exact_in(50_000), Direction::AToB, None),
    ) else {
        panic!("quotes");
    };
    assert!(registry.apply_quote(&id, &swap).is_ok());
    let Ok(after_swap) = registry.get_pool_snapshot(&id) else {
        panic!("snapshot");
    };

    let stale = Err(AmmError::StaleQuote {
        quoted: 0,
        current: 1,
    });
    assert_eq!(registry.apply_liquidity(&id, add), stale);
    assert_eq!(registry.apply_liquidity(&id, remove), stale);
    assert_eq!(registry.get_pool_snapshot(&id), Ok(after_swap));

    // A fresh quote against the moved reserves applies.
    let Ok(requote) =
        registry.get_add_liquidity_quote(&id, Amount::new(10_000), Amount::new(10_000))
    else {
        panic!("requote");
    };
    assert_eq!(requote.pool_version(), 1);
    assert!(registry.apply_liquidity(&id, requote).is_ok());
}

// ---------------------------------------------------------------------------
// Liquidity lifecycle
// ---------------------------------------------------------------------------

#[test]
fn empty_pool_first_deposit_then_full_exit() {
    let Ok(config) = EngineConfig::from_json_str(
        r#"{ "pools": [ {
            "asset_a": { "symbol": "UNI", "decimals": 18 },
            "asset_b": { "symbol": "ETH", "decimals": 18 }
        } ] }"#,
    ) else {
        panic!("valid config");
    };
    let Ok(registry) = PoolRegistry::from_config(&config) else {
        panic!("registry");
    };
    let id = pair("UNI/ETH");

    assert!(matches!(
        registry.get_quote(&id, exact_in(10), Direction::AToB, None),
        Err(AmmError::InsufficientLiquidity)
    ));

    let Ok(add) = registry.get_add_liquidity_quote(&id, Amount::new(100), Amount::new(400)) else {
        panic!("first deposit");
    };
    assert_eq!(add.lp_minted(), Liquidity::new(200));
    let Ok(snap) = registry.apply_liquidity(&id, add) else {
        panic!("apply deposit");
    };
    assert_eq!(snap.total_lp_supply, Liquidity::new(200));
    assert_eq!(snap.version, 1);

    let Ok(remove) = registry.get_remove_liquidity_quote(&id, Liquidity::new(200)) else {
        panic!("full burn");
    };
    assert_eq!(remove.withdraw_a(), Amount::new(100));
    assert_eq!(remove.withdraw_b(), Amount::new(400));
    let Ok(snap) = registry.apply_liquidity(&id, remove) else {
        panic!("apply burn");
    };
    assert!(snap.is_empty());
    assert_eq!(snap.version, 2);
}

#[test]
fn off_ratio_deposit_is_trimmed_and_fees_accrue_to_lps() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000, 1_000_000);

    // Twice as much B as the ratio needs: only the matching part is taken.
    let Ok(add) = registry.get_add_liquidity_quote(&id, Amount::new(10_000), Amount::new(20_000))
    else {
        panic!("deposit quote");
    };
    assert_eq!(add.deposit_a(), Amount::new(10_000));
    assert_eq!(add.deposit_b(), Amount::new(10_000));
    assert_eq!(add.lp_minted(), Liquidity::new(10_000));
    assert!(registry.apply_liquidity(&id, add).is_ok());

    for _ in 0..10 {
        for direction in [Direction::AToB, Direction::BToA] {
            let Ok(q) = registry.get_quote(&id, exact_in(50_000), direction, None) else {
                panic!("quote");
            };
            assert!(registry.apply_quote(&id, &q).is_ok());
        }
    }

    let Ok(remove) = registry.get_remove_liquidity_quote(&id, add.lp_minted()) else {
        panic!("withdraw quote");
    };
    // Fees stay in the reserves, so the LP leaves with more value than it brought.
    let brought = wide_mul(10_000, 10_000);
    let taken = wide_mul(remove.withdraw_a().get(), remove.withdraw_b().get());
    assert!(taken > brought);
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_traders_serialise_on_version() {
    let id = pair("ETH/USDC");
    let registry = registry_with(&id, 1_000_000_000, 1_000_000_000);
    let k0 = wide_mul(1_000_000_000, 1_000_000_000);

    let applied: usize = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let (registry, id) = (&registry, &id);
                s.spawn(move || {
                    let direction = if t % 2 == 0 {
                        Direction::AToB
                    } else {
                        Direction::BToA
                    };
                    let mut applied = 0;
                    for i in 0..25u128 {
                        let Ok(q) = registry.get_quote(id, exact_in(1_000 + i), direction, None)
                        else {
                            panic!("quote");
                        };
                        match registry.apply_quote(id, &q) {
                            Ok(_) => applied += 1,
                            Err(AmmError::StaleQuote { .. } | AmmError::InvariantViolation(_)) => {}
                            Err(e) => panic!("unexpected error: {e}"),
                        }
                    }
                    applied
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(n) => n,
                Err(_) => panic!("trader thread panicked"),
            })
            .sum()
    });

    let Ok(snap) = registry.get_pool_snapshot(&id) else {
        panic!("snapshot");
    };
    assert!(applied >= 1);
    assert_eq!(snap.version, applied as u64);
    assert!(wide_mul(snap.reserve_a.get(), snap.reserve_b.get()) >= k0);
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

#[test]
fn config_rejects_reversed_duplicate_pair() {
    let json = r#"{ "pools": [
        { "asset_a": { "symbol": "ETH", "decimals": 18 },
          "asset_b": { "symbol": "USDC", "decimals": 6 } },
        { "asset_a": { "symbol": "USDC", "decimals": 6 },
          "asset_b": { "symbol": "ETH", "decimals": 18 } }
    ] }"#;
    assert!(matches!(
        EngineConfig::from_json_str(json),
        Err(AmmError::InvalidConfiguration(_))
    ));
}

#[test]
fn config_rejects_one_sided_reserves() {
    let json = r#"{ "pools": [
        { "asset_a": { "symbol": "ETH", "decimals": 18 },
          "asset_b": { "symbol": "USDC", "decimals": 6 },
          "reserve_a": 1000 }
    ] }"#;
    assert!(EngineConfig::from_json_str(json).is_err());
}
