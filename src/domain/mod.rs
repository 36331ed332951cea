//! Value types of the constant-product engine.
//!
//! Amounts, rates and identifiers are validated newtypes over integers;
//! quotes and snapshots are immutable values with no reference back to
//! the pool that produced them.  Nothing in this module logs or locks.

mod amount;
mod asset;
mod basis_points;
mod decimals;
mod direction;
mod fee_tier;
mod fixed;
mod liquidity;
mod liquidity_quote;
mod pair;
mod percent;
mod price;
mod rounding;
mod slippage;
mod snapshot;
mod swap_quote;
mod swap_spec;

pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::BasisPoints;
pub(crate) use basis_points::BPS_DENOMINATOR;
pub use decimals::Decimals;
pub use direction::Direction;
pub use fee_tier::FeeTier;
pub(crate) use fixed::WAD;
pub use liquidity::Liquidity;
pub use liquidity_quote::{AddLiquidityQuote, LiquidityQuote, RemoveLiquidityQuote};
pub use pair::{AssetPair, PairId};
pub use percent::Percent;
pub use price::Price;
pub use rounding::Rounding;
pub use slippage::SlippageBound;
pub use snapshot::PoolSnapshot;
pub(crate) use swap_quote::SwapQuoteParts;
pub use swap_quote::SwapQuote;
pub use swap_spec::{SwapSpec, SwapType};
