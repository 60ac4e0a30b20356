//! GST rate table and tax regime classification.
//!
//! - Static tax codes (GST and IGST at the standard slabs)
//! - Intra-state vs inter-state classification from place of supply
//! - The per-item IGST tax-name override signal

pub mod error;
pub mod rates;
pub mod regime;

pub use error::TaxError;
pub use rates::TaxCode;
pub use regime::{TaxRegime, classify_place_of_supply, integrated_tax_name};
