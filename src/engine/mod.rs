//! Pure pricing engines.
//!
//! [`SwapQuoteEngine`] prices trades and [`LiquidityEngine`] prices
//! deposits and withdrawals.  Both read a [`Pool`](crate::pool::Pool) by
//! shared reference and return immutable quotes; applying a quote is the
//! pool's job.

mod liquidity;
mod swap;

pub use liquidity::LiquidityEngine;
pub use swap::SwapQuoteEngine;
