//! Pair-keyed pool registry: the engine's external interface.
//!
//! [`PoolRegistry`] resolves a pair to its pool, prices swaps and
//! liquidity changes against the current state, and applies accepted
//! quotes under a per-pool lock.
//!
//! # Usage
//!
//! ```rust
//! use hydra_cpmm::config::EngineConfig;
//! use hydra_cpmm::domain::{Amount, Liquidity};
//! use hydra_cpmm::registry::PoolRegistry;
//! use hydra_cpmm::traits::FromConfig;
//!
//! let config = EngineConfig::from_json_str(r#"{ "pools": [ {
//!     "asset_a": { "symbol": "UNI", "decimals": 18 },
//!     "asset_b": { "symbol": "ETH", "decimals": 18 }
//! } ] }"#).expect("valid config");
//! let registry = PoolRegistry::from_config(&config).expect("registry");
//!
//! let pair = "UNI/ETH".parse().expect("valid pair");
//! let deposit = registry
//!     .get_add_liquidity_quote(&pair, Amount::new(100), Amount::new(400))
//!     .expect("first deposit");
//! assert_eq!(deposit.lp_minted(), Liquidity::new(200));
//!
//! let snapshot = registry.apply_liquidity(&pair, deposit).expect("fresh");
//! assert_eq!(snapshot.reserve_b, Amount::new(400));
//! ```

mod pool_registry;

pub use pool_registry::PoolRegistry;
