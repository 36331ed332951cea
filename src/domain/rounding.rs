//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the engine.
///
/// Outputs paid by the pool (swap output, withdrawals, minted LP) round
/// [`Down`](Self::Down); inputs owed to the pool (exact-out input, fee
/// gross-up) round [`Up`](Self::Up).  The remainder always stays in the
/// reserves.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert_eq!(Rounding::Down.opposite(), Rounding::Up);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }

    /// Returns the other direction.
    #[must_use]
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}
