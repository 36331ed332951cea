//! Swap direction.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Which side of a pool a trade pays into.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Direction;
///
/// assert_eq!(Direction::AToB.reverse(), Direction::BToA);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Pay asset A, receive asset B.
    AToB,
    /// Pay asset B, receive asset A.
    BToA,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::AToB => Self::BToA,
            Self::BToA => Self::AToB,
        }
    }

    /// Returns `true` when the input is asset A.
    #[must_use]
    pub const fn is_a_to_b(self) -> bool {
        matches!(self, Self::AToB)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => f.write_str("A->B"),
            Self::BToA => f.write_str("B->A"),
        }
    }
}
