//! Unified error types for the constant-product engine.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type, ensuring a consistent error handling experience for consumers.
//! Every variant is detected locally and synchronously; nothing is retried.

use crate::domain::{Amount, PairId, Percent};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Every failure the engine can report.
///
/// Arithmetic variants carry a static description of the step that
/// failed so that a rejected quote can be traced back to its formula.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// A requested amount is zero, too small to survive rounding, or
    /// otherwise unusable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// Pool parameters violate the pool invariants.
    #[error("invalid pool: {0}")]
    InvalidPool(&'static str),

    /// The pool cannot pay out the requested amount.
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The trade would drain the output reserve entirely.
    #[error("output would drain the pool reserve")]
    ExcessiveOutput,

    /// The quote violates the caller's slippage bound.
    #[error("slippage exceeded: output {output} (min {min_output:?}), impact {impact} (max {max_impact:?})")]
    SlippageExceeded {
        /// Output the pool would pay.
        output: Amount,
        /// Minimum output requested by the caller, if any.
        min_output: Option<Amount>,
        /// Price impact of the quote.
        impact: Percent,
        /// Largest tolerated impact magnitude, if any.
        max_impact: Option<Percent>,
    },

    /// The pool moved since the quote was computed.
    #[error("stale quote: computed at pool version {quoted}, pool is at {current}")]
    StaleQuote {
        /// Version captured when the quote was produced.
        quoted: u64,
        /// Current pool version.
        current: u64,
    },

    /// LP minting computed from each side diverged by more than one unit.
    #[error("deposit ratio mismatch: {lp_from_a} LP from A vs {lp_from_b} LP from B")]
    RatioMismatch {
        /// LP units implied by the token A deposit.
        lp_from_a: u128,
        /// LP units implied by the token B deposit.
        lp_from_b: u128,
    },

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow (a result would be negative).
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Fee rate outside `[0, 10 000)` basis points.
    #[error("invalid fee: {0}")]
    InvalidFee(&'static str),

    /// Malformed asset symbol, decimals or pair identifier.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Configuration could not be parsed or validated.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No pool is registered under the pair.
    #[error("pool not found: {0}")]
    PoolNotFound(PairId),

    /// A pool is already registered under the pair.
    #[error("pool already exists: {0}")]
    PoolAlreadyExists(PairId),

    /// Applying a delta would break `reserve_a × reserve_b` monotonicity
    /// or the supply/reserve coupling.
    #[error("pool invariant violated: {0}")]
    InvariantViolation(&'static str),
}
