//! Line-item pricing.
//!
//! Converts one line item's raw inputs (quantity, rate, discount, tax
//! rate) into its derived amounts. Called on every edit; no rounding at
//! any intermediate step.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod props;

pub use calculator::{line_amounts, validate};
pub use error::PricingError;
pub use types::{DiscountType, LineAmounts, LineItem};
