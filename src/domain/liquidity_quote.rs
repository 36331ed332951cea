//! Priced liquidity deposits and withdrawals.

use core::fmt;

use serde::Serialize;

use super::{Amount, Liquidity, Percent};

/// A priced deposit.
///
/// `deposit_a`/`deposit_b` are the amounts the pool will accept, which may
/// be less than requested on one side when the request is off-ratio.
/// The pool state it was priced against travels with it, so it can only
/// be applied to that state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AddLiquidityQuote {
    pub(crate) deposit_a: Amount,
    pub(crate) deposit_b: Amount,
    pub(crate) lp_minted: Liquidity,
    pub(crate) pool_share: Percent,
    pub(crate) reserve_a_before: Amount,
    pub(crate) reserve_b_before: Amount,
    pub(crate) lp_supply_before: Liquidity,
    pub(crate) pool_version: u64,
}

impl AddLiquidityQuote {
    pub const fn deposit_a(&self) -> Amount {
        self.deposit_a
    }

    pub const fn deposit_b(&self) -> Amount {
        self.deposit_b
    }

    /// LP units minted to the depositor.
    #[must_use]
    pub const fn lp_minted(&self) -> Liquidity {
        self.lp_minted
    }

    /// Depositor's share of the post-deposit LP supply.
    #[must_use]
    pub const fn pool_share(&self) -> Percent {
        self.pool_share
    }

    /// Pool reserves and LP supply the quote was priced against.
    #[must_use]
    pub const fn state_before(&self) -> (Amount, Amount, Liquidity) {
        (self.reserve_a_before, self.reserve_b_before, self.lp_supply_before)
    }

    #[must_use]
    pub const fn pool_version(&self) -> u64 {
        self.pool_version
    }
}

/// A priced withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RemoveLiquidityQuote {
    pub(crate) lp_burned: Liquidity,
    pub(crate) withdraw_a: Amount,
    pub(crate) withdraw_b: Amount,
    pub(crate) pool_share: Percent,
    pub(crate) reserve_a_before: Amount,
    pub(crate) reserve_b_before: Amount,
    pub(crate) lp_supply_before: Liquidity,
    pub(crate) pool_version: u64,
}

impl RemoveLiquidityQuote {
    #[must_use]
    pub const fn lp_burned(&self) -> Liquidity {
        self.lp_burned
    }

    pub const fn withdraw_a(&self) -> Amount {
        self.withdraw_a
    }

    pub const fn withdraw_b(&self) -> Amount {
        self.withdraw_b
    }

    /// Share of the pre-withdrawal LP supply being redeemed.
    #[must_use]
    pub const fn pool_share(&self) -> Percent {
        self.pool_share
    }

    /// Pool reserves and LP supply the quote was priced against.
    #[must_use]
    pub const fn state_before(&self) -> (Amount, Amount, Liquidity) {
        (self.reserve_a_before, self.reserve_b_before, self.lp_supply_before)
    }

    #[must_use]
    pub const fn pool_version(&self) -> u64 {
        self.pool_version
    }
}

/// Either kind of liquidity quote, as accepted by
/// [`Pool::apply_liquidity`](crate::pool::Pool::apply_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LiquidityQuote {
    /// A deposit.
    Add(AddLiquidityQuote),
    /// A withdrawal.
    Remove(RemoveLiquidityQuote),
}

impl LiquidityQuote {
    /// Pool version the quote was computed at.
    #[must_use]
    pub const fn pool_version(&self) -> u64 {
        match self {
            Self::Add(q) => q.pool_version,
            Self::Remove(q) => q.pool_version,
        }
    }

    #[must_use]
    pub const fn is_add(&self) -> bool {
        matches!(self, Self::Add(_))
    }
}

impl From<AddLiquidityQuote> for LiquidityQuote {
    fn from(q: AddLiquidityQuote) -> Self {
        Self::Add(q)
    }
}

impl From<RemoveLiquidityQuote> for LiquidityQuote {
    fn from(q: RemoveLiquidityQuote) -> Self {
        Self::Remove(q)
    }
}

impl fmt::Display for LiquidityQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Add(q) => write!(
                f,
                "Add(a={}, b={}, minted={}, share={})",
                q.deposit_a, q.deposit_b, q.lp_minted, q.pool_share
            ),
            Self::Remove(q) => write!(
                f,
                "Remove(burned={}, a={}, b={}, share={})",
                q.lp_burned, q.withdraw_a, q.withdraw_b, q.pool_share
            ),
        }
    }
}
