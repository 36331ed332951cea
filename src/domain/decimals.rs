//! Asset decimal places.

use serde::{Deserialize, Serialize};

use crate::error::{AmmError, Result};

/// Largest supported decimal precision.
const MAX_DECIMALS: u8 = 18;

/// Number of fractional digits an asset's amounts are scaled by.
///
/// Valid range is `0..=18`.  The engine operates on already-scaled
/// integers; `Decimals` is only consulted when converting to or from a
/// human-readable value.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Decimals;
///
/// let d = Decimals::new(6).expect("6 is valid");
/// assert_eq!(d.factor(), 1_000_000);
/// assert!(Decimals::new(19).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places (the engine's "scale 1").
    pub const ZERO: Self = Self(0);

    /// Eighteen decimal places.
    pub const MAX: Self = Self(MAX_DECIMALS);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidAsset`] if `value` exceeds 18.
    pub const fn new(value: u8) -> Result<Self> {
        if value > MAX_DECIMALS {
            return Err(AmmError::InvalidAsset("decimals must be 0..=18"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub const fn factor(&self) -> u128 {
        10u128.pow(self.0 as u32)
    }
}

impl TryFrom<u8> for Decimals {
    type Error = AmmError;

    fn try_from(value: u8) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(d: Decimals) -> Self {
        d.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn valid_range() {
        for d in [0u8, 6, 8, 18] {
            let Ok(v) = Decimals::new(d) else {
                panic!("expected Ok for {d}");
            };
            assert_eq!(v.get(), d);
        }
    }

    #[test]
    fn rejects_nineteen() {
        assert_eq!(
            Decimals::new(19),
            Err(AmmError::InvalidAsset("decimals must be 0..=18"))
        );
    }

    #[test]
    fn factors() {
        assert_eq!(Decimals::ZERO.factor(), 1);
        assert_eq!(Decimals::MAX.factor(), 1_000_000_000_000_000_000);
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Decimals>("6").is_ok());
        assert!(serde_json::from_str::<Decimals>("24").is_err());
    }
}
