//! Tax regime classification from place of supply.
//!
//! GST splits by jurisdiction: supplies within the seller's home state
//! levy CGST + SGST in equal halves, supplies to any other state levy
//! IGST in full. The document's place of supply decides the regime; an
//! individual line whose tax name is from the IGST family overrides the
//! document-level decision for its own contribution.

use bahi_shared::types::State;
use serde::{Deserialize, Serialize};

/// Tax treatment for a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxRegime {
    /// Place of supply is the home state: CGST + SGST, split evenly.
    IntraState,
    /// Place of supply is another state: IGST, full amount.
    InterState,
}

impl TaxRegime {
    /// Returns true for the inter-state (IGST) regime.
    #[must_use]
    pub fn is_inter_state(&self) -> bool {
        matches!(self, Self::InterState)
    }
}

/// Classifies a document's tax regime from its place of supply.
///
/// Inter-state iff a place of supply is present and matches none of the
/// home state's representations (name, GST code, two-letter code). A
/// string naming no known state is therefore inter-state; a missing or
/// blank place of supply is intra-state.
#[must_use]
pub fn classify_place_of_supply(place_of_supply: Option<&str>, home: State) -> TaxRegime {
    match place_of_supply {
        Some(raw) if !raw.trim().is_empty() && !home.matches(raw) => TaxRegime::InterState,
        _ => TaxRegime::IntraState,
    }
}

/// Returns true if a line item's free-form tax name forces IGST
/// treatment for that item.
#[must_use]
pub fn integrated_tax_name(tax_name: &str) -> bool {
    tax_name.trim_start().starts_with("IGST")
}
