//! Line item amount calculation.

use rust_decimal::Decimal;

use super::error::PricingError;
use super::types::{DiscountType, LineAmounts, LineItem};

/// Computes one line's amounts from its raw inputs.
///
/// The sequence is discount-then-tax:
///
/// 1. gross = quantity × rate
/// 2. discount = percentage ? gross × discount / 100 : discount
/// 3. taxable = gross − discount
/// 4. tax = taxable × rate / 100
/// 5. total = taxable + tax
///
/// No rounding at any step; display rounding is the caller's concern.
/// A discount larger than the gross amount flows through as a negative
/// taxable amount rather than an error; use [`validate`] to reject it.
///
/// Callers are expected to have coerced inputs to non-negative values
/// (unparseable form fields become zero before reaching here).
#[must_use]
pub fn line_amounts(
    quantity: Decimal,
    rate: Decimal,
    discount: Decimal,
    discount_type: DiscountType,
    tax_rate: Decimal,
) -> LineAmounts {
    let gross = quantity * rate;
    let discount = match discount_type {
        DiscountType::Percentage => gross * discount / Decimal::ONE_HUNDRED,
        DiscountType::Flat => discount,
    };
    let taxable = gross - discount;
    let tax = taxable * tax_rate / Decimal::ONE_HUNDRED;

    LineAmounts {
        gross,
        discount,
        taxable,
        tax,
        total: taxable + tax,
    }
}

/// Rejects a line item whose discount exceeds its gross amount.
///
/// The calculator itself lets a negative taxable amount pass through;
/// callers that want a hard failure instead call this first.
///
/// # Errors
///
/// Returns [`PricingError::NegativeTaxableAmount`] when the resolved
/// discount exceeds the gross amount.
pub fn validate(item: &LineItem) -> Result<(), PricingError> {
    let amounts = item.amounts();
    if amounts.taxable < Decimal::ZERO {
        return Err(PricingError::NegativeTaxableAmount {
            gross: amounts.gross,
            discount: amounts.discount,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_percentage_discount_then_tax() {
        let amounts = line_amounts(dec!(10), dec!(100), dec!(10), DiscountType::Percentage, dec!(18));
        assert_eq!(amounts.gross, dec!(1000));
        assert_eq!(amounts.discount, dec!(100));
        assert_eq!(amounts.taxable, dec!(900));
        assert_eq!(amounts.tax, dec!(162));
        assert_eq!(amounts.total, dec!(1062));
    }

    #[test]
    fn test_flat_discount() {
        let amounts = line_amounts(dec!(5), dec!(50), dec!(25), DiscountType::Flat, dec!(0));
        assert_eq!(amounts.gross, dec!(250));
        assert_eq!(amounts.discount, dec!(25));
        assert_eq!(amounts.taxable, dec!(225));
        assert_eq!(amounts.tax, dec!(0));
        assert_eq!(amounts.total, dec!(225));
    }

    #[test]
    fn test_zero_quantity_zeroes_everything() {
        let amounts = line_amounts(dec!(0), dec!(100), dec!(50), DiscountType::Percentage, dec!(18));
        assert_eq!(amounts.gross, dec!(0));
        assert_eq!(amounts.total, dec!(0));
    }

    #[test]
    fn test_no_intermediate_rounding() {
        // 3 × 33.33 = 99.99; 10% discount = 9.999 exactly, carried in full.
        let amounts = line_amounts(dec!(3), dec!(33.33), dec!(10), DiscountType::Percentage, dec!(18));
        assert_eq!(amounts.discount, dec!(9.999));
        assert_eq!(amounts.taxable, dec!(89.991));
        assert_eq!(amounts.tax, dec!(16.19838));
        assert_eq!(amounts.total, dec!(106.18938));
    }

    #[test]
    fn test_excess_flat_discount_goes_negative() {
        let amounts = line_amounts(dec!(1), dec!(100), dec!(150), DiscountType::Flat, dec!(18));
        assert_eq!(amounts.taxable, dec!(-50));
        assert_eq!(amounts.tax, dec!(-9));
        assert_eq!(amounts.total, dec!(-59));
    }

    #[test]
    fn test_validate_accepts_full_discount() {
        let mut item = LineItem::new("row-1");
        item.quantity = dec!(1);
        item.rate = dec!(100);
        item.discount = dec!(100);
        item.discount_type = DiscountType::Percentage;
        assert!(validate(&item).is_ok());
    }

    #[test]
    fn test_validate_rejects_excess_discount() {
        let mut item = LineItem::new("row-1");
        item.quantity = dec!(1);
        item.rate = dec!(100);
        item.discount = dec!(150);
        item.discount_type = DiscountType::Flat;
        assert_eq!(
            validate(&item),
            Err(PricingError::NegativeTaxableAmount {
                gross: dec!(100),
                discount: dec!(150),
            })
        );
    }
}
