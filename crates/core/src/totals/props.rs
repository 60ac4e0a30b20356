//! Property-based tests for document totals aggregation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use bahi_shared::types::State;

use super::aggregator::document_totals;
use crate::pricing::{DiscountType, LineItem};
use crate::tax::TaxCode;

/// Strategy to generate one GST tax code (CGST/SGST family).
fn gst_code() -> impl Strategy<Value = TaxCode> {
    prop::sample::select(vec![
        TaxCode::None,
        TaxCode::Gst0,
        TaxCode::Gst5,
        TaxCode::Gst12,
        TaxCode::Gst18,
        TaxCode::Gst28,
    ])
}

/// Strategy to generate any tax code, IGST family included.
fn any_code() -> impl Strategy<Value = TaxCode> {
    prop::sample::select(TaxCode::ALL.to_vec())
}

/// Strategy to generate one line item.
fn line_item(code: impl Strategy<Value = TaxCode>) -> impl Strategy<Value = LineItem> {
    (0i64..10_000, 0i64..100_000, 0i64..=100, code).prop_map(|(q, r, d, tax)| {
        let mut item = LineItem::new("row");
        item.quantity = Decimal::new(q, 2);
        item.rate = Decimal::new(r, 2);
        item.discount = Decimal::from(d);
        item.discount_type = DiscountType::Percentage;
        item.apply_tax(tax);
        item.recompute();
        item
    })
}

/// Strategy to generate shipping charges and adjustments (adjustment may
/// be negative).
fn charges() -> impl Strategy<Value = (Decimal, Decimal)> {
    (0i64..100_000, -50_000i64..50_000)
        .prop_map(|(s, a)| (Decimal::new(s, 2), Decimal::new(a, 2)))
}

proptest! {
    /// Sum law: total == subTotal + cgst + sgst + igst + shipping +
    /// adjustment, for every document.
    #[test]
    fn prop_sum_law(
        items in prop::collection::vec(line_item(any_code()), 0..12),
        (shipping, adjustment) in charges(),
        inter in any::<bool>(),
    ) {
        let place = if inter { Some("Karnataka") } else { Some("Maharashtra") };
        let totals = document_totals(&items, shipping, adjustment, place, State::Maharashtra);

        prop_assert_eq!(
            totals.total,
            totals.sub_total + totals.cgst + totals.sgst + totals.igst
                + totals.shipping_charges + totals.adjustment
        );
    }

    /// Intra-state documents with no IGST-named lines split tax evenly:
    /// igst == 0 and cgst == sgst == total tax / 2.
    #[test]
    fn prop_intra_state_even_split(
        items in prop::collection::vec(line_item(gst_code()), 0..12),
        (shipping, adjustment) in charges(),
    ) {
        let totals =
            document_totals(&items, shipping, adjustment, Some("Maharashtra"), State::Maharashtra);

        prop_assert_eq!(totals.igst, Decimal::ZERO);
        prop_assert_eq!(totals.cgst, totals.sgst);
        prop_assert_eq!(totals.cgst, totals.total_tax() / Decimal::TWO);
    }

    /// Inter-state documents put every line's tax in igst, never split.
    #[test]
    fn prop_inter_state_all_igst(
        items in prop::collection::vec(line_item(any_code()), 0..12),
        (shipping, adjustment) in charges(),
    ) {
        let totals =
            document_totals(&items, shipping, adjustment, Some("Karnataka"), State::Maharashtra);

        prop_assert_eq!(totals.cgst, Decimal::ZERO);
        prop_assert_eq!(totals.sgst, Decimal::ZERO);
    }

    /// The subtotal is the sum of the lines' taxable amounts regardless
    /// of regime.
    #[test]
    fn prop_sub_total_is_regime_independent(
        items in prop::collection::vec(line_item(any_code()), 0..12),
    ) {
        let intra = document_totals(&items, Decimal::ZERO, Decimal::ZERO, None, State::Maharashtra);
        let inter = document_totals(
            &items, Decimal::ZERO, Decimal::ZERO, Some("Karnataka"), State::Maharashtra,
        );

        prop_assert_eq!(intra.sub_total, inter.sub_total);
        prop_assert_eq!(intra.total_tax(), inter.total_tax());
    }

    /// Recomputing an unchanged document yields identical totals.
    #[test]
    fn prop_idempotent(
        items in prop::collection::vec(line_item(any_code()), 0..12),
        (shipping, adjustment) in charges(),
    ) {
        let first = document_totals(&items, shipping, adjustment, None, State::Maharashtra);
        let second = document_totals(&items, shipping, adjustment, None, State::Maharashtra);
        prop_assert_eq!(first, second);
    }
}
