//! Pool state and invariant enforcement.

mod constant_product;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use constant_product::Pool;
