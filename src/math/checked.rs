//! Checked arithmetic trait for fixed-point wrapper types.
//!
//! The [`CheckedArithmetic`] trait provides fallible arithmetic that returns
//! [`AmmError`] instead of panicking or wrapping.  It is implemented for
//! the two integer quantities the engine moves around:
//!
//! - [`Amount`]: scaled token quantities
//! - [`Liquidity`]: LP token units
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::{Amount, Rounding};
//! use hydra_cpmm::math::CheckedArithmetic;
//!
//! let reserve = Amount::new(1_000_000);
//! let out = Amount::new(997).safe_mul_div(reserve.get(), 1_000_997, Rounding::Down);
//! assert_eq!(out, Ok(Amount::new(996)));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use super::mul_div;
use crate::domain::{Amount, Liquidity, Rounding};
use crate::error::{AmmError, Result};

/// Fallible arithmetic for integer quantity types.
///
/// # Contract
///
/// - **No panics** and **no saturation**: every failure is an `Err`.
/// - Subtraction below zero is [`AmmError::Underflow`], never a wrap.
/// - [`safe_mul_div`](Self::safe_mul_div) keeps a 256-bit intermediate.
pub trait CheckedArithmetic: Sized + Copy {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum exceeds `u128`.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product exceeds `u128`.
    fn safe_mul(&self, other: &Self) -> Result<Self>;

    /// Computes `self × numerator / denominator` with explicit rounding.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `denominator` is zero.
    /// - [`AmmError::Overflow`] if the quotient exceeds `u128`.
    fn safe_mul_div(&self, numerator: u128, denominator: u128, rounding: Rounding)
    -> Result<Self>;
}

macro_rules! impl_checked_arithmetic {
    ($ty:ty, $label:literal) => {
        impl CheckedArithmetic for $ty {
            #[inline]
            fn safe_add(&self, other: &Self) -> Result<Self> {
                self.get()
                    .checked_add(other.get())
                    .map(<$ty>::new)
                    .ok_or(AmmError::Overflow(concat!($label, " addition overflow")))
            }

            #[inline]
            fn safe_sub(&self, other: &Self) -> Result<Self> {
                self.get()
                    .checked_sub(other.get())
                    .map(<$ty>::new)
                    .ok_or(AmmError::Underflow(concat!($label, " subtraction underflow")))
            }

            #[inline]
            fn safe_mul(&self, other: &Self) -> Result<Self> {
                self.get()
                    .checked_mul(other.get())
                    .map(<$ty>::new)
                    .ok_or(AmmError::Overflow(concat!($label, " multiplication overflow")))
            }

            #[inline]
            fn safe_mul_div(
                &self,
                numerator: u128,
                denominator: u128,
                rounding: Rounding,
            ) -> Result<Self> {
                mul_div(self.get(), numerator, denominator, rounding).map(<$ty>::new)
            }
        }
    };
}

impl_checked_arithmetic!(Amount, "amount");
impl_checked_arithmetic!(Liquidity, "liquidity");
