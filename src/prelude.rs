//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

pub use crate::domain::{
    AddLiquidityQuote, Amount, Asset, AssetPair, BasisPoints, Decimals, Direction, FeeTier,
    Liquidity, LiquidityQuote, PairId, Percent, PoolSnapshot, Price, RemoveLiquidityQuote,
    Rounding, SlippageBound, SwapQuote, SwapSpec, SwapType,
};

pub use crate::traits::{FromConfig, Versioned};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{EngineConfig, PoolConfig};

pub use crate::engine::{LiquidityEngine, SwapQuoteEngine};

pub use crate::pool::Pool;

pub use crate::registry::PoolRegistry;

pub use crate::error::{AmmError, Result};
