//! Document totals aggregation.

use rust_decimal::Decimal;

use bahi_shared::types::State;

use super::types::DocumentTotals;
use crate::pricing::LineItem;
use crate::tax::{classify_place_of_supply, integrated_tax_name};

/// Aggregates line items into document totals.
///
/// Recomputes every line's taxable and tax amounts from scratch, then
/// buckets each line's tax: IGST when the document regime is
/// inter-state or the line's own tax name is from the IGST family,
/// otherwise an even CGST/SGST split. Shipping and adjustment are added
/// after tax.
///
/// Pure and idempotent; re-runs in full on every edit. Line item counts
/// stay small enough that recomputing from scratch is the simplest
/// correct trigger.
#[must_use]
pub fn document_totals(
    items: &[LineItem],
    shipping_charges: Decimal,
    adjustment: Decimal,
    place_of_supply: Option<&str>,
    home_state: State,
) -> DocumentTotals {
    let regime = classify_place_of_supply(place_of_supply, home_state);

    let mut sub_total = Decimal::ZERO;
    let mut cgst = Decimal::ZERO;
    let mut sgst = Decimal::ZERO;
    let mut igst = Decimal::ZERO;

    for item in items {
        let amounts = item.amounts();
        sub_total += amounts.taxable;

        // The line's own IGST tax name wins over the document regime.
        if regime.is_inter_state() || integrated_tax_name(&item.tax_name) {
            igst += amounts.tax;
        } else {
            let half = amounts.tax / Decimal::TWO;
            cgst += half;
            sgst += half;
        }
    }

    DocumentTotals {
        sub_total,
        cgst,
        sgst,
        igst,
        shipping_charges,
        adjustment,
        total: sub_total + cgst + sgst + igst + shipping_charges + adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::DiscountType;
    use crate::tax::TaxCode;
    use rust_decimal_macros::dec;

    fn line(
        id: &str,
        quantity: Decimal,
        rate: Decimal,
        discount: Decimal,
        discount_type: DiscountType,
        tax: TaxCode,
    ) -> LineItem {
        let mut item = LineItem::new(id);
        item.quantity = quantity;
        item.rate = rate;
        item.discount = discount;
        item.discount_type = discount_type;
        item.apply_tax(tax);
        item.recompute();
        item
    }

    #[test]
    fn test_intra_state_splits_evenly() {
        let items = vec![line(
            "row-1",
            dec!(10),
            dec!(100),
            dec!(10),
            DiscountType::Percentage,
            TaxCode::Gst18,
        )];
        let totals = document_totals(
            &items,
            dec!(0),
            dec!(0),
            Some("Maharashtra"),
            State::Maharashtra,
        );

        assert_eq!(totals.sub_total, dec!(900));
        assert_eq!(totals.cgst, dec!(81));
        assert_eq!(totals.sgst, dec!(81));
        assert_eq!(totals.igst, dec!(0));
        assert_eq!(totals.total, dec!(1062));
    }

    #[test]
    fn test_inter_state_goes_to_igst() {
        let items = vec![line(
            "row-1",
            dec!(10),
            dec!(100),
            dec!(10),
            DiscountType::Percentage,
            TaxCode::Gst18,
        )];
        let totals = document_totals(
            &items,
            dec!(0),
            dec!(0),
            Some("Karnataka"),
            State::Maharashtra,
        );

        assert_eq!(totals.sub_total, dec!(900));
        assert_eq!(totals.cgst, dec!(0));
        assert_eq!(totals.sgst, dec!(0));
        assert_eq!(totals.igst, dec!(162));
        assert_eq!(totals.total, dec!(1062));
    }

    #[test]
    fn test_flat_discount_zero_tax() {
        let items = vec![line(
            "row-1",
            dec!(5),
            dec!(50),
            dec!(25),
            DiscountType::Flat,
            TaxCode::None,
        )];
        let totals = document_totals(&items, dec!(0), dec!(0), None, State::Maharashtra);

        assert_eq!(totals.sub_total, dec!(225));
        assert_eq!(totals.total_tax(), dec!(0));
        assert_eq!(totals.total, dec!(225));
    }

    #[test]
    fn test_igst_tax_name_overrides_intra_state_regime() {
        let items = vec![
            line(
                "row-1",
                dec!(1),
                dec!(100),
                dec!(0),
                DiscountType::Percentage,
                TaxCode::Gst18,
            ),
            line(
                "row-2",
                dec!(1),
                dec!(100),
                dec!(0),
                DiscountType::Percentage,
                TaxCode::Igst18,
            ),
        ];
        // Home-state document, yet row-2 insists on IGST.
        let totals = document_totals(
            &items,
            dec!(0),
            dec!(0),
            Some("Maharashtra"),
            State::Maharashtra,
        );

        assert_eq!(totals.sub_total, dec!(200));
        assert_eq!(totals.cgst, dec!(9));
        assert_eq!(totals.sgst, dec!(9));
        assert_eq!(totals.igst, dec!(18));
        assert_eq!(totals.total, dec!(236));
    }

    #[test]
    fn test_shipping_and_negative_adjustment() {
        let items = vec![line(
            "row-1",
            dec!(2),
            dec!(100),
            dec!(0),
            DiscountType::Percentage,
            TaxCode::Gst12,
        )];
        let totals = document_totals(&items, dec!(50), dec!(-10.50), None, State::Maharashtra);

        assert_eq!(totals.sub_total, dec!(200));
        assert_eq!(totals.cgst, dec!(12));
        assert_eq!(totals.sgst, dec!(12));
        assert_eq!(totals.shipping_charges, dec!(50));
        assert_eq!(totals.adjustment, dec!(-10.50));
        assert_eq!(totals.total, dec!(263.50));
    }

    #[test]
    fn test_missing_place_of_supply_is_intra_state() {
        let items = vec![line(
            "row-1",
            dec!(1),
            dec!(100),
            dec!(0),
            DiscountType::Percentage,
            TaxCode::Gst28,
        )];
        let totals = document_totals(&items, dec!(0), dec!(0), None, State::Maharashtra);

        assert_eq!(totals.cgst, dec!(14));
        assert_eq!(totals.sgst, dec!(14));
        assert_eq!(totals.igst, dec!(0));
    }

    #[test]
    fn test_empty_document() {
        let totals = document_totals(&[], dec!(0), dec!(0), None, State::Maharashtra);
        assert_eq!(totals, DocumentTotals::zero());
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let items = vec![line(
            "row-1",
            dec!(3),
            dec!(33.33),
            dec!(10),
            DiscountType::Percentage,
            TaxCode::Gst18,
        )];
        let first = document_totals(&items, dec!(5), dec!(1), None, State::Maharashtra);
        let second = document_totals(&items, dec!(5), dec!(1), None, State::Maharashtra);
        assert_eq!(first, second);
    }
}
