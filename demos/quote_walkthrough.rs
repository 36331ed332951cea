//! Constant-product quote walkthrough.
//!
//! Loads two pools from JSON, quotes and applies swaps in both directions,
//! shows a stale quote being rejected, then adds and removes liquidity.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_cpmm=debug cargo run --example quote_walkthrough
//! ```

use hydra_cpmm::prelude::*;
use hydra_cpmm::telemetry::init_tracing;

const CONFIG: &str = r#"{
    "default_slippage_bps": 50,
    "high_impact_bps": 300,
    "pools": [
        { "asset_a": { "symbol": "ETH", "decimals": 6 },
          "asset_b": { "symbol": "USDC", "decimals": 6 },
          "fee_bps": 30,
          "reserve_a": 1000000000000, "reserve_b": 2450320000000000 },
        { "asset_a": { "symbol": "UNI", "decimals": 6 },
          "asset_b": { "symbol": "ETH", "decimals": 6 },
          "fee_bps": 100 }
    ]
}"#;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    init_tracing("hydra_cpmm=info")?;
    println!("=== Constant Product quotes (x · y = k) ===\n");

    // ── 1. Load the registry from config ────────────────────────────────
    let config = EngineConfig::from_json_str(CONFIG)?;
    let registry = PoolRegistry::from_config(&config)?;
    for pair in registry.pairs() {
        println!("{}", registry.get_pool_snapshot(&pair)?);
    }

    let eth = Asset::new("ETH", Decimals::new(6)?)?;
    let eth_usdc: PairId = "ETH/USDC".parse()?;

    // ── 2. Quote a sell of 1.5 ETH ──────────────────────────────────────
    let sell = SwapSpec::exact_in(eth.parse_amount("1.5")?)?;
    let quote = registry.get_quote(&eth_usdc, sell, Direction::AToB, None)?;
    println!("\n--- Sell 1.5 ETH ---");
    println!("  {quote}");
    println!("  Spot price:  {}", quote.spot_price_before());
    println!("  Eff. price:  {}", quote.effective_price());
    println!("  Impact:      {}%", quote.price_impact().to_decimal()?);

    // ── 3. Apply it with the registry's default 0.5% tolerance ──────────
    let bound = registry.default_bound(&quote)?;
    let requote = registry.get_quote(&eth_usdc, sell, Direction::AToB, Some(bound))?;
    let snapshot = registry.apply_quote(&eth_usdc, &requote)?;
    println!("\nApplied: {snapshot}");

    // ── 4. The original quote is now stale ──────────────────────────────
    match registry.apply_quote(&eth_usdc, &quote) {
        Err(AmmError::StaleQuote { quoted, current }) => {
            println!("\nStale quote rejected (quoted v{quoted}, pool at v{current})");
        }
        other => println!("\nUnexpected: {other:?}"),
    }

    // ── 5. Buy exactly 1 000 USDC worth back ────────────────────────────
    let buy = SwapSpec::exact_out(Amount::new(1_000_000_000))?;
    let quote = registry.get_quote(&eth_usdc, buy, Direction::AToB, None)?;
    println!("\n--- Buy 1 000 USDC ---");
    println!("  {quote}");
    registry.apply_quote(&eth_usdc, &quote)?;

    // ── 6. Seed the empty UNI/ETH pool and withdraw half ────────────────
    let uni_eth: PairId = "UNI/ETH".parse()?;
    let add = registry.get_add_liquidity_quote(
        &uni_eth,
        Amount::new(5_000_000_000),
        Amount::new(1_000_000_000),
    )?;
    println!("\n--- Seed UNI/ETH ---");
    println!("  {}", LiquidityQuote::from(add));
    let snapshot = registry.apply_liquidity(&uni_eth, add)?;

    let half = registry.get_remove_liquidity_percent_quote(
        &uni_eth,
        snapshot.total_lp_supply,
        BasisPoints::new(5_000),
    )?;
    println!("  {}", LiquidityQuote::from(half));
    println!("  {}", registry.apply_liquidity(&uni_eth, half)?);

    println!("\n=== Done ===");
    Ok(())
}
