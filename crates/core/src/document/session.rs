//! Document edit sessions.
//!
//! An edit session owns one open document and mirrors what a document
//! editor does: every field change lands here as a raw form value, and
//! the whole totals block is recomputed from scratch after each one.
//! All of it is synchronous, single-threaded form state.

use thiserror::Error;
use tracing::debug;

use bahi_shared::types::State;
use bahi_shared::types::numeric::{non_negative_or_zero, parse_or_zero};

use super::types::Document;
use crate::pricing::{DiscountType, LineItem};
use crate::tax::TaxCode;

/// Edit-session errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// No line item with the given row id.
    #[error("Unknown line item: {0}")]
    UnknownLine(String),
}

/// An open document edit session.
pub struct EditSession {
    document: Document,
    home: State,
    next_row: u64,
}

impl EditSession {
    /// Opens a session over a document, recomputing its totals once so
    /// the session never starts from drifted figures.
    #[must_use]
    pub fn new(mut document: Document, home: State) -> Self {
        document.recompute_totals(home);
        let next_row = document.items.len() as u64;
        Self {
            document,
            home,
            next_row,
        }
    }

    /// Read access to the document being edited.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Finishes the session, yielding the document for submission.
    #[must_use]
    pub fn into_document(self) -> Document {
        self.document
    }

    /// The document's current totals.
    #[must_use]
    pub fn totals(&self) -> &crate::totals::DocumentTotals {
        &self.document.totals
    }

    /// Appends an empty row and returns its id.
    pub fn add_line(&mut self) -> String {
        let id = loop {
            let candidate = format!("row-{}", self.next_row);
            self.next_row += 1;
            if !self.document.items.iter().any(|item| item.id == candidate) {
                break candidate;
            }
        };
        self.document.items.push(LineItem::new(id.clone()));
        debug!(row = %id, "added line item");
        self.recompute();
        id
    }

    /// Removes a row.
    pub fn remove_line(&mut self, id: &str) -> Result<(), EditError> {
        let before = self.document.items.len();
        self.document.items.retain(|item| item.id != id);
        if self.document.items.len() == before {
            return Err(EditError::UnknownLine(id.to_string()));
        }
        debug!(row = %id, "removed line item");
        self.recompute();
        Ok(())
    }

    /// Sets a row's quantity from a raw form value.
    pub fn set_quantity(&mut self, id: &str, raw: &str) -> Result<(), EditError> {
        self.line_mut(id)?.quantity = non_negative_or_zero(parse_or_zero(raw));
        self.recompute();
        Ok(())
    }

    /// Sets a row's unit rate from a raw form value.
    pub fn set_rate(&mut self, id: &str, raw: &str) -> Result<(), EditError> {
        self.line_mut(id)?.rate = non_negative_or_zero(parse_or_zero(raw));
        self.recompute();
        Ok(())
    }

    /// Sets a row's discount and its interpretation from raw form
    /// values.
    pub fn set_discount(
        &mut self,
        id: &str,
        raw: &str,
        discount_type: DiscountType,
    ) -> Result<(), EditError> {
        let item = self.line_mut(id)?;
        item.discount = non_negative_or_zero(parse_or_zero(raw));
        item.discount_type = discount_type;
        self.recompute();
        Ok(())
    }

    /// Applies a tax code from the static table to a row.
    pub fn set_tax(&mut self, id: &str, code: TaxCode) -> Result<(), EditError> {
        self.line_mut(id)?.apply_tax(code);
        self.recompute();
        Ok(())
    }

    /// Sets the document's place of supply.
    pub fn set_place_of_supply(&mut self, place_of_supply: Option<String>) {
        self.document.place_of_supply = place_of_supply;
        self.recompute();
    }

    /// Sets shipping charges from a raw form value.
    pub fn set_shipping_charges(&mut self, raw: &str) {
        self.document.shipping_charges = parse_or_zero(raw);
        self.recompute();
    }

    /// Sets the adjustment from a raw form value. Negative values are
    /// allowed.
    pub fn set_adjustment(&mut self, raw: &str) {
        self.document.adjustment = parse_or_zero(raw);
        self.recompute();
    }

    fn line_mut(&mut self, id: &str) -> Result<&mut LineItem, EditError> {
        self.document
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| EditError::UnknownLine(id.to_string()))
    }

    fn recompute(&mut self) {
        self.document.recompute_totals(self.home);
        debug!(
            lines = self.document.items.len(),
            sub_total = %self.document.totals.sub_total,
            total = %self.document.totals.total,
            "recomputed document totals"
        );
    }
}
