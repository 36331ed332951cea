//! LP token units.

use core::fmt;

use serde::{Deserialize, Serialize};

/// LP units: a pro-rata claim on both reserves of one pool.
///
/// Holding `n` units of a pool whose supply is `S` entitles the holder to
/// `n / S` of each reserve.  Units are minted on deposit and burned on
/// withdrawal; a pool with zero supply holds no reserves.  An LP unit has
/// no fixed value in either asset, so it never converts to an
/// [`Amount`](super::Amount) without the pool's reserves.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Liquidity;
///
/// let supply = Liquidity::new(1_000);
/// let after_mint = supply.checked_add(&Liquidity::new(200));
/// assert_eq!(after_mint, Some(Liquidity::new(1_200)));
/// // More LP cannot be burned than exists.
/// assert_eq!(supply.checked_sub(&Liquidity::new(1_001)), None);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Liquidity(u128);

impl Liquidity {
    /// Supply of an empty pool.
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// `true` for the supply of an empty pool, or an empty balance.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Supply after minting `other`; `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Supply after burning `other`; `None` if `other` exceeds it.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} LP", self.0)
    }
}
