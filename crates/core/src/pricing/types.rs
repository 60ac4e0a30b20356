//! Line-item domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bahi_shared::types::ItemId;

use super::calculator::line_amounts;
use crate::tax::TaxCode;

/// How a line item's discount is expressed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountType {
    /// Discount is a percentage of the gross amount.
    #[default]
    Percentage,
    /// Discount is a flat currency amount.
    Flat,
}

/// One row of a priced document.
///
/// Rows are transient form state: created client-side with an opaque
/// string id, mutated on every edit, and serialized wholesale with the
/// parent document. `amount` is derived from the other fields and is
/// overwritten on every recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Client-assigned row id.
    pub id: String,
    /// Catalog item this row was picked from, if any.
    pub item_id: Option<ItemId>,
    /// Item name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Quantity (non-negative).
    pub quantity: Decimal,
    /// Unit rate in currency major units (non-negative).
    pub rate: Decimal,
    /// Discount value, interpreted per `discount_type` (non-negative).
    pub discount: Decimal,
    /// Discount interpretation.
    pub discount_type: DiscountType,
    /// Tax percentage applied after discount.
    pub tax_rate: Decimal,
    /// Tax name as selected (e.g., "GST18", "IGST18").
    pub tax_name: String,
    /// Derived total: taxable amount plus tax.
    pub amount: Decimal,
}

impl LineItem {
    /// Creates an empty row with the given client id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            item_id: None,
            name: String::new(),
            description: None,
            quantity: Decimal::ZERO,
            rate: Decimal::ZERO,
            discount: Decimal::ZERO,
            discount_type: DiscountType::Percentage,
            tax_rate: Decimal::ZERO,
            tax_name: TaxCode::None.as_str().to_string(),
            amount: Decimal::ZERO,
        }
    }

    /// Computes this row's amounts without mutating it.
    #[must_use]
    pub fn amounts(&self) -> LineAmounts {
        line_amounts(
            self.quantity,
            self.rate,
            self.discount,
            self.discount_type,
            self.tax_rate,
        )
    }

    /// Recomputes the derived `amount` from the other fields.
    pub fn recompute(&mut self) {
        self.amount = self.amounts().total;
    }

    /// Applies a tax code from the static table, setting both the rate
    /// and the tax name.
    pub fn apply_tax(&mut self, code: TaxCode) {
        self.tax_rate = code.rate();
        self.tax_name = code.as_str().to_string();
    }
}

/// Every intermediate figure of one line's amount calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineAmounts {
    /// Quantity times rate, before discount.
    pub gross: Decimal,
    /// Discount in currency units (resolved from percentage if needed).
    pub discount: Decimal,
    /// Gross minus discount; may be negative when the discount exceeds
    /// the gross amount.
    pub taxable: Decimal,
    /// Tax on the taxable amount.
    pub tax: Decimal,
    /// Taxable amount plus tax.
    pub total: Decimal,
}
