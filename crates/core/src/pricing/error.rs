//! Pricing error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Pricing validation errors.
///
/// The calculator itself never fails; these are produced only by the
/// opt-in [`validate`](super::calculator::validate) check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Discount exceeds the gross amount, leaving a negative taxable
    /// amount.
    #[error("Discount ({discount}) exceeds gross amount ({gross})")]
    NegativeTaxableAmount {
        /// Gross amount before discount.
        gross: Decimal,
        /// Discount amount applied.
        discount: Decimal,
    },
}
