//! # Hydra CPMM
//!
//! Constant-product market maker engine (Uniswap v2 style) on exact
//! fixed-point integers: swap quotes with fees, price impact and slippage
//! bounds, LP share accounting, and a registry of pools keyed by pair.
//!
//! Pricing is a pure function of pool state.  Every quote carries the
//! pool version it was computed against, and applying a quote to a pool
//! that has since changed fails with [`AmmError::StaleQuote`](error::AmmError::StaleQuote).
//!
//! # Quick Start
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//!
//! let registry = PoolRegistry::new();
//! let pair: PairId = "ETH/USDC".parse().expect("valid pair");
//! registry
//!     .create_pool(&pair, Amount::new(1_000_000), Amount::new(1_000_000), BasisPoints::new(30))
//!     .expect("pool created");
//!
//! // Sell 1 000 units of ETH for USDC.
//! let spec = SwapSpec::exact_in(Amount::new(1_000)).expect("non-zero");
//! let quote = registry.get_quote(&pair, spec, Direction::AToB, None).expect("quote");
//! assert_eq!(quote.output_amount(), Amount::new(996));
//! assert_eq!(quote.fee_amount(), Amount::new(3));
//! assert!(quote.price_impact().is_negative());
//!
//! let snapshot = registry.apply_quote(&pair, &quote).expect("fresh quote");
//! assert_eq!(snapshot.reserve_a, Amount::new(1_001_000));
//! assert_eq!(snapshot.reserve_b, Amount::new(999_004));
//!
//! // The same quote cannot be applied twice.
//! assert!(matches!(
//!     registry.apply_quote(&pair, &quote),
//!     Err(AmmError::StaleQuote { quoted: 0, current: 1 })
//! ));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │ PoolRegistry │  pair lookup, per-pool locks, logging
//! └──────┬───────┘
//!        │ quote (read) / apply (write)
//!        ▼
//! ┌──────────────┐     ┌──────────────────────────────────┐
//! │     Pool     │◄────│ SwapQuoteEngine, LiquidityEngine │  pure pricing
//! └──────┬───────┘     └──────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │    Domain    │  Amount, Liquidity, Price, Percent, SwapQuote, …
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Price`](domain::Price), [`SwapQuote`](domain::SwapQuote), etc. |
//! | [`math`] | Checked arithmetic, 256-bit `mul_div`, integer square root |
//! | [`pool`] | [`Pool`](pool::Pool) state and quote application |
//! | [`engine`] | [`SwapQuoteEngine`](engine::SwapQuoteEngine) and [`LiquidityEngine`](engine::LiquidityEngine) |
//! | [`registry`] | [`PoolRegistry`](registry::PoolRegistry), the concurrent entry point |
//! | [`config`] | Serde-backed [`EngineConfig`](config::EngineConfig) and [`PoolConfig`](config::PoolConfig) |
//! | [`traits`] | [`FromConfig`](traits::FromConfig) and [`Versioned`](traits::Versioned) |
//! | [`telemetry`] | Optional `tracing` subscriber setup |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod registry;
pub mod telemetry;
pub mod traits;
