//! Wire payloads for document exchange.
//!
//! Documents travel as camelCase JSON: fetched from the backend when an
//! editor opens, and submitted back wholesale on save. Numeric fields
//! are lenient on the way in (number or string, unparseable becomes
//! zero) and every derived figure is recomputed, never trusted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bahi_shared::types::State;
use bahi_shared::types::numeric::non_negative_or_zero;

use super::types::{Document, DocumentKind, Party};
use crate::pricing::{DiscountType, LineItem};
use crate::totals::DocumentTotals;

mod de {
    //! Lenient deserialization for form-fed numeric fields.

    use rust_decimal::Decimal;
    use serde::{Deserialize, Deserializer};

    use bahi_shared::types::numeric::parse_or_zero;

    /// Deserializes a JSON number, numeric string, or null into a
    /// `Decimal`, coercing anything unparseable to zero.
    pub fn lenient_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match value {
            Some(serde_json::Value::Number(n)) => parse_or_zero(&n.to_string()),
            Some(serde_json::Value::String(s)) => parse_or_zero(&s),
            _ => Decimal::ZERO,
        })
    }
}

/// One line item on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    /// Client-assigned row id.
    #[serde(default)]
    pub id: String,
    /// Catalog item reference, if any.
    #[serde(default)]
    pub item_id: Option<String>,
    /// Item name.
    #[serde(default)]
    pub name: String,
    /// Optional description.
    #[serde(default)]
    pub description: Option<String>,
    /// Quantity.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub quantity: Decimal,
    /// Unit rate.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub rate: Decimal,
    /// Discount value.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub discount: Decimal,
    /// Discount interpretation.
    #[serde(default)]
    pub discount_type: DiscountType,
    /// Tax percentage.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub tax: Decimal,
    /// Tax name as selected.
    #[serde(default)]
    pub tax_name: String,
    /// Submitted amount; display data only, recomputed on decode.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub amount: Decimal,
}

impl LineItemPayload {
    /// Converts a wire row into a domain line item.
    ///
    /// Quantity, rate, and discount are clamped to non-negative values;
    /// the derived amount is recomputed, discarding whatever was
    /// submitted.
    #[must_use]
    pub fn into_line_item(self) -> LineItem {
        let mut item = LineItem::new(self.id);
        item.item_id = self.item_id.and_then(|raw| raw.parse().ok());
        item.name = self.name;
        item.description = self.description;
        item.quantity = non_negative_or_zero(self.quantity);
        item.rate = non_negative_or_zero(self.rate);
        item.discount = non_negative_or_zero(self.discount);
        item.discount_type = self.discount_type;
        item.tax_rate = self.tax;
        item.tax_name = self.tax_name;
        item.recompute();
        item
    }
}

impl From<&LineItem> for LineItemPayload {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.clone(),
            item_id: item.item_id.map(|id| id.to_string()),
            name: item.name.clone(),
            description: item.description.clone(),
            quantity: item.quantity,
            rate: item.rate,
            discount: item.discount,
            discount_type: item.discount_type,
            tax: item.tax_rate,
            tax_name: item.tax_name.clone(),
            amount: item.amount,
        }
    }
}

/// The totals block on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsPayload {
    /// Sum of taxable amounts.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub sub_total: Decimal,
    /// Central GST.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub cgst: Decimal,
    /// State GST.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub sgst: Decimal,
    /// Integrated GST.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub igst: Decimal,
    /// Shipping charges.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub shipping_charges: Decimal,
    /// Adjustment.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub adjustment: Decimal,
    /// Grand total.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub total: Decimal,
}

impl From<&DocumentTotals> for TotalsPayload {
    fn from(totals: &DocumentTotals) -> Self {
        Self {
            sub_total: totals.sub_total,
            cgst: totals.cgst,
            sgst: totals.sgst,
            igst: totals.igst,
            shipping_charges: totals.shipping_charges,
            adjustment: totals.adjustment,
            total: totals.total,
        }
    }
}

/// A whole document on the wire.
///
/// The kind is implied by the resource family the payload came from,
/// so it is not part of the body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    /// Document id.
    #[serde(default)]
    pub id: Option<String>,
    /// Owning organization id.
    #[serde(default)]
    pub organization_id: Option<String>,
    /// Document number.
    #[serde(default)]
    pub number: Option<String>,
    /// Document date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Customer/vendor reference.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Customer/vendor display name.
    #[serde(default)]
    pub customer_name: String,
    /// Customer GSTIN.
    #[serde(default)]
    pub gstin: Option<String>,
    /// Customer billing state.
    #[serde(default)]
    pub billing_state: Option<String>,
    /// Place of supply, as entered.
    #[serde(default)]
    pub place_of_supply: Option<String>,
    /// Line items.
    #[serde(default)]
    pub line_items: Vec<LineItemPayload>,
    /// Shipping charges.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub shipping_charges: Decimal,
    /// Adjustment; may be negative.
    #[serde(default, deserialize_with = "de::lenient_decimal")]
    pub adjustment: Decimal,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Terms and conditions.
    #[serde(default)]
    pub terms: Option<String>,
    /// Submitted totals; display data only, recomputed on decode.
    #[serde(default)]
    pub totals: Option<TotalsPayload>,
}

impl DocumentPayload {
    /// Converts a wire document into the domain model, recomputing
    /// every line amount and the totals.
    ///
    /// The kind comes from the resource family the payload was fetched
    /// from; missing ids are freshly assigned.
    #[must_use]
    pub fn into_document(self, kind: DocumentKind, home: State) -> Document {
        let party = Party {
            id: self.customer_id.and_then(|raw| raw.parse().ok()),
            name: self.customer_name,
            gstin: self.gstin,
            billing_state: self.billing_state,
        };

        let mut document = Document {
            id: self
                .id
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            organization_id: self
                .organization_id
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_default(),
            kind,
            number: self.number,
            date: self.date,
            party,
            place_of_supply: self.place_of_supply,
            items: self
                .line_items
                .into_iter()
                .map(LineItemPayload::into_line_item)
                .collect(),
            shipping_charges: self.shipping_charges,
            adjustment: self.adjustment,
            notes: self.notes,
            terms: self.terms,
            totals: DocumentTotals::zero(),
        };
        document.recompute_totals(home);
        document
    }
}

impl From<&Document> for DocumentPayload {
    fn from(document: &Document) -> Self {
        Self {
            id: Some(document.id.to_string()),
            organization_id: Some(document.organization_id.to_string()),
            number: document.number.clone(),
            date: document.date,
            customer_id: document.party.id.map(|id| id.to_string()),
            customer_name: document.party.name.clone(),
            gstin: document.party.gstin.clone(),
            billing_state: document.party.billing_state.clone(),
            place_of_supply: document.place_of_supply.clone(),
            line_items: document.items.iter().map(LineItemPayload::from).collect(),
            shipping_charges: document.shipping_charges,
            adjustment: document.adjustment,
            notes: document.notes.clone(),
            terms: document.terms.clone(),
            totals: Some(TotalsPayload::from(&document.totals)),
        }
    }
}
