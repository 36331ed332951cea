//! Wide-intermediate multiply-divide and integer square root.
//!
//! Every AMM formula in the crate has the shape `a × b / c`.  With `u128`
//! reserves the product `a × b` can need up to 256 bits, so it is computed
//! in a [`U256`] and only the quotient is narrowed back to `u128`.  A
//! quotient that does not fit is an error, never a wrapped value.
//!
//! # Examples
//!
//! ```
//! use hydra_cpmm::domain::Rounding;
//! use hydra_cpmm::math::mul_div;
//!
//! // floor(997 × 1 000 000 / 1 000 997) = 996
//! assert_eq!(mul_div(997, 1_000_000, 1_000_997, Rounding::Down), Ok(996));
//! // The intermediate product overflows u128 but the quotient does not.
//! assert_eq!(mul_div(u128::MAX, u128::MAX, u128::MAX, Rounding::Down), Ok(u128::MAX));
//! ```

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::{AmmError, Result};

/// Computes `a × b / c` with a 256-bit intermediate and explicit rounding.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `c` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in `u128`.
pub fn mul_div(a: u128, b: u128, c: u128, rounding: Rounding) -> Result<u128> {
    if c == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let (quotient, remainder) = wide_mul(a, b).div_mod(U256::from(c));

    // quotient ≤ (2^128 - 1)^2, so adding one cannot overflow 256 bits.
    let quotient = if rounding.is_up() && !remainder.is_zero() {
        quotient + U256::one()
    } else {
        quotient
    };

    narrow(quotient, "mul_div quotient exceeds u128")
}

/// Returns the exact 256-bit product `a × b`.
///
/// Used for invariant comparisons (`k = reserve_a × reserve_b`) where
/// the product itself must never be truncated.
#[must_use]
pub fn wide_mul(a: u128, b: u128) -> U256 {
    U256::from(a) * U256::from(b)
}

/// Returns `floor(√(a × b))`, the geometric mean of two amounts.
///
/// The square root of a product of two `u128` values always fits in
/// `u128`, so this function is infallible.
#[must_use]
pub fn sqrt_product(a: u128, b: u128) -> u128 {
    wide_mul(a, b).integer_sqrt().low_u128()
}

/// Integer square root (floor) of a single `u128`.
#[must_use]
pub fn isqrt(n: u128) -> u128 {
    U256::from(n).integer_sqrt().low_u128()
}

fn narrow(value: U256, context: &'static str) -> Result<u128> {
    if value.bits() > 128 {
        return Err(AmmError::Overflow(context));
    }
    Ok(value.low_u128())
}
