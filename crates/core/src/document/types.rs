//! Document domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use bahi_shared::types::{CustomerId, DocumentId, OrganizationId, State};

use crate::pricing::LineItem;
use crate::totals::{DocumentTotals, document_totals};

/// The kinds of priced documents an editor produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Sales quotation.
    Quote,
    /// Credit note issued against an invoice.
    CreditNote,
    /// Purchase order to a vendor.
    PurchaseOrder,
    /// Delivery challan accompanying goods.
    DeliveryChallan,
}

impl DocumentKind {
    /// Returns the wire name for this kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::CreditNote => "credit_note",
            Self::PurchaseOrder => "purchase_order",
            Self::DeliveryChallan => "delivery_challan",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The customer or vendor a document is addressed to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Party {
    /// Customer/vendor reference, when picked from the directory.
    pub id: Option<CustomerId>,
    /// Display name.
    pub name: String,
    /// GST identification number, if registered.
    pub gstin: Option<String>,
    /// Billing state, as entered.
    pub billing_state: Option<String>,
}

/// A priced document.
///
/// Owns its line items for its lifetime; rows are never addressed
/// outside an edit session. `totals` is derived and overwritten by
/// every recompute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier.
    pub id: DocumentId,
    /// Organization this document belongs to.
    pub organization_id: OrganizationId,
    /// Document kind.
    pub kind: DocumentKind,
    /// Document number (e.g., "QT-0042"), assigned by the backend.
    pub number: Option<String>,
    /// Document date.
    pub date: Option<NaiveDate>,
    /// Customer or vendor.
    pub party: Party,
    /// Place of supply, as entered (state name or code).
    pub place_of_supply: Option<String>,
    /// Line items.
    pub items: Vec<LineItem>,
    /// Shipping charges.
    pub shipping_charges: Decimal,
    /// Manual adjustment; may be negative.
    pub adjustment: Decimal,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Terms and conditions.
    pub terms: Option<String>,
    /// Derived totals.
    pub totals: DocumentTotals,
}

impl Document {
    /// Creates an empty draft document.
    #[must_use]
    pub fn new(kind: DocumentKind, organization_id: OrganizationId) -> Self {
        Self {
            id: DocumentId::new(),
            organization_id,
            kind,
            number: None,
            date: None,
            party: Party::default(),
            place_of_supply: None,
            items: Vec::new(),
            shipping_charges: Decimal::ZERO,
            adjustment: Decimal::ZERO,
            notes: None,
            terms: None,
            totals: DocumentTotals::zero(),
        }
    }

    /// Recomputes every line's derived amount and the document totals.
    pub fn recompute_totals(&mut self, home: State) {
        for item in &mut self.items {
            item.recompute();
        }
        self.totals = document_totals(
            &self.items,
            self.shipping_charges,
            self.adjustment,
            self.place_of_supply.as_deref(),
            home,
        );
    }
}
