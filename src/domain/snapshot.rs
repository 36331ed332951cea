//! Point-in-time view of a pool.

use core::fmt;

use serde::Serialize;

use super::{Amount, FeeTier, Liquidity, PairId};

/// A copy of a pool's state, returned by the registry after every read or
/// mutation.
///
/// `accumulated_fees_a`/`accumulated_fees_b` are running totals of the fee
/// retained on each side since the pool was created; callers derive
/// windowed figures (such as 24h fees) by differencing two snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PoolSnapshot {
    pub pair: PairId,
    pub reserve_a: Amount,
    pub reserve_b: Amount,
    pub fee: FeeTier,
    pub total_lp_supply: Liquidity,
    pub version: u64,
    pub accumulated_fees_a: Amount,
    pub accumulated_fees_b: Amount,
}

impl PoolSnapshot {
    /// Returns `true` while the pool awaits its first deposit.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total_lp_supply.is_zero()
    }
}

impl fmt::Display for PoolSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [a={}, b={}, fee={}, lp={}, v{}]",
            self.pair, self.reserve_a, self.reserve_b, self.fee, self.total_lp_supply, self.version
        )
    }
}
