//! Integer arithmetic for AMM calculations.
//!
//! Nothing in this module touches floating point.  All quantities are
//! `u128` mantissas at a fixed scale; products are formed in 256 bits by
//! [`mul_div`] and narrowed back only after division.
//!
//! # Rounding convention
//!
//! **Always round against the trader** (pool-favourable):
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Swap output | [`Rounding::Down`](crate::domain::Rounding::Down) |
//! | Required input (exact-out) | [`Rounding::Up`](crate::domain::Rounding::Up) |
//! | LP minted / tokens withdrawn | [`Rounding::Down`](crate::domain::Rounding::Down) |

mod checked;
mod mul_div;

pub use checked::CheckedArithmetic;
pub use mul_div::{isqrt, mul_div, sqrt_product, wide_mul};
