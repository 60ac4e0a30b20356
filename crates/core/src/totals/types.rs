//! Document totals types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bahi_shared::types::numeric::round_display;

/// The totals block of a priced document.
///
/// Always derived: `total` is the sum of every other field, and per line
/// exactly one of the CGST/SGST pair or IGST received that line's tax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Sum of taxable amounts across line items.
    pub sub_total: Decimal,
    /// Central GST (half of intra-state tax).
    pub cgst: Decimal,
    /// State GST (half of intra-state tax).
    pub sgst: Decimal,
    /// Integrated GST (inter-state tax, in full).
    pub igst: Decimal,
    /// Shipping charges added after tax.
    pub shipping_charges: Decimal,
    /// Manual adjustment; may be negative.
    pub adjustment: Decimal,
    /// Grand total.
    pub total: Decimal,
}

impl DocumentTotals {
    /// Zero totals for an empty document.
    #[must_use]
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of the tax buckets.
    #[must_use]
    pub fn total_tax(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }

    /// Projects every field to currency display precision (2 decimal
    /// places). For rendering only; aggregation keeps full precision.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            sub_total: round_display(self.sub_total),
            cgst: round_display(self.cgst),
            sgst: round_display(self.sgst),
            igst: round_display(self.igst),
            shipping_charges: round_display(self.shipping_charges),
            adjustment: round_display(self.adjustment),
            total: round_display(self.total),
        }
    }
}
