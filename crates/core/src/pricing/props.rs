//! Property-based tests for line-item pricing.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::calculator::line_amounts;
use super::types::DiscountType;

/// Strategy to generate quantities (0.00 to 100.00, 2 decimal places).
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..10_000).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate unit rates (0.00 to 10,000.00).
fn rate() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate percentage discounts (0 to 100).
fn percent_discount() -> impl Strategy<Value = Decimal> {
    (0i64..=100).prop_map(Decimal::from)
}

/// Strategy to generate flat discounts (0.00 to 1,000.00).
fn flat_discount() -> impl Strategy<Value = Decimal> {
    (0i64..100_000).prop_map(|v| Decimal::new(v, 2))
}

/// Strategy to generate a GST slab rate.
fn slab() -> impl Strategy<Value = Decimal> {
    prop::sample::select(vec![0u8, 5, 12, 18, 28]).prop_map(Decimal::from)
}

proptest! {
    /// amount = (q*r - q*r*d/100) * (1 + t/100), exactly, for
    /// percentage discounts.
    #[test]
    fn prop_percentage_amount_formula(
        q in quantity(),
        r in rate(),
        d in percent_discount(),
        t in slab(),
    ) {
        let amounts = line_amounts(q, r, d, DiscountType::Percentage, t);

        let gross = q * r;
        let expected =
            (gross - gross * d / Decimal::ONE_HUNDRED) * (Decimal::ONE + t / Decimal::ONE_HUNDRED);
        prop_assert_eq!(amounts.total, expected);
    }

    /// amount = (q*r - d) * (1 + t/100), exactly, for flat discounts.
    #[test]
    fn prop_flat_amount_formula(
        q in quantity(),
        r in rate(),
        d in flat_discount(),
        t in slab(),
    ) {
        let amounts = line_amounts(q, r, d, DiscountType::Flat, t);

        let expected = (q * r - d) * (Decimal::ONE + t / Decimal::ONE_HUNDRED);
        prop_assert_eq!(amounts.total, expected);
    }

    /// The total always decomposes into taxable + tax, and gross into
    /// taxable + discount.
    #[test]
    fn prop_amounts_decompose(
        q in quantity(),
        r in rate(),
        d in percent_discount(),
        t in slab(),
    ) {
        let amounts = line_amounts(q, r, d, DiscountType::Percentage, t);

        prop_assert_eq!(amounts.total, amounts.taxable + amounts.tax);
        prop_assert_eq!(amounts.gross, amounts.taxable + amounts.discount);
    }

    /// Zero tax rate means zero tax and total == taxable.
    #[test]
    fn prop_zero_tax(
        q in quantity(),
        r in rate(),
        d in percent_discount(),
    ) {
        let amounts = line_amounts(q, r, d, DiscountType::Percentage, Decimal::ZERO);

        prop_assert_eq!(amounts.tax, Decimal::ZERO);
        prop_assert_eq!(amounts.total, amounts.taxable);
    }

    /// Percentage discounts up to 100% never drive the taxable amount
    /// negative.
    #[test]
    fn prop_percentage_discount_keeps_taxable_non_negative(
        q in quantity(),
        r in rate(),
        d in percent_discount(),
        t in slab(),
    ) {
        let amounts = line_amounts(q, r, d, DiscountType::Percentage, t);

        prop_assert!(amounts.taxable >= Decimal::ZERO);
        prop_assert!(amounts.total >= Decimal::ZERO);
    }

    /// The calculation is a pure function: same inputs, same outputs.
    #[test]
    fn prop_deterministic(
        q in quantity(),
        r in rate(),
        d in flat_discount(),
        t in slab(),
    ) {
        let first = line_amounts(q, r, d, DiscountType::Flat, t);
        let second = line_amounts(q, r, d, DiscountType::Flat, t);
        prop_assert_eq!(first, second);
    }
}
